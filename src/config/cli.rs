use crate::config::file::FileConfig;
use crate::domain::model::Quotas;
use crate::utils::error::{LotteryError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::{Parser, Subcommand};
use std::time::Duration;

/// 住宅戶別抽籤工具:送出報名、檢查重複、執行兩階段抽籤。
#[derive(Debug, Clone, Parser)]
#[command(name = "unit-lottery")]
#[command(about = "A small lottery tool for housing unit allocation")]
pub struct CliConfig {
    /// 遠端報名資料表的端點網址
    #[arg(long)]
    pub endpoint: Option<String>,

    /// TOML 配置檔路徑
    #[arg(long)]
    pub config: Option<String>,

    /// HTTP 請求逾時秒數 (預設 30)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// 送出一筆報名資料
    Submit {
        /// 門牌號碼
        #[arg(long)]
        address: String,

        /// 樓層
        #[arg(long)]
        floor: String,

        /// 第一志願 (A/B/C 或 甲/乙/丙)
        #[arg(long)]
        first: String,

        /// 第二志願,不可與第一志願相同
        #[arg(long)]
        second: String,
    },

    /// 檢查重複報名的戶別
    Duplicates,

    /// 抽籤並顯示各組錄取名單
    Draw {
        /// 甲組名額
        #[arg(long)]
        quota_a: Option<u32>,

        /// 乙組名額
        #[arg(long)]
        quota_b: Option<u32>,

        /// 丙組名額
        #[arg(long)]
        quota_c: Option<u32>,

        /// 固定亂數種子,讓抽籤結果可重現
        #[arg(long)]
        seed: Option<u64>,

        /// 將結果另存成 CSV 檔
        #[arg(long)]
        output: Option<String>,
    },
}

/// 命令列與配置檔合併後的實際設定。
#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint: String,
    pub timeout: Duration,
    pub monitor: bool,
}

impl CliConfig {
    /// 載入 --config 指定的配置檔 (若有)。
    pub fn load_file_config(&self) -> Result<Option<FileConfig>> {
        match &self.config {
            Some(path) => {
                let file = FileConfig::from_file(path)?;
                file.validate_config()?;
                Ok(Some(file))
            }
            None => Ok(None),
        }
    }

    /// 合併命令列參數與配置檔,命令列優先。
    pub fn resolve_settings(&self, file: Option<&FileConfig>) -> Result<Settings> {
        let endpoint = self
            .endpoint
            .clone()
            .or_else(|| file.map(|f| f.store.endpoint.clone()))
            .ok_or_else(|| LotteryError::MissingConfigError {
                field: "endpoint".to_string(),
            })?;
        validate_url("endpoint", &endpoint)?;

        let timeout_seconds = self
            .timeout_seconds
            .or_else(|| file.and_then(|f| f.store.timeout_seconds))
            .unwrap_or(30);
        validate_positive_number("timeout_seconds", timeout_seconds as usize, 1)?;

        let monitor = self.monitor || file.map(|f| f.monitoring_enabled()).unwrap_or(false);

        Ok(Settings {
            endpoint,
            timeout: Duration::from_secs(timeout_seconds),
            monitor,
        })
    }

    /// 取得抽籤名額;三組名額各自可來自命令列或配置檔,缺一即拒絕抽籤。
    pub fn resolve_quotas(&self, file: Option<&FileConfig>) -> Result<Quotas> {
        let Command::Draw {
            quota_a,
            quota_b,
            quota_c,
            ..
        } = &self.command
        else {
            return Err(LotteryError::ConfigError {
                message: "quotas only apply to the draw command".to_string(),
            });
        };

        let draw = file.and_then(|f| f.draw.as_ref());
        let resolve = |cli: Option<u32>, from_file: Option<u32>, field: &str| {
            cli.or(from_file)
                .ok_or_else(|| LotteryError::MissingConfigError {
                    field: field.to_string(),
                })
        };

        Ok(Quotas::new(
            resolve(*quota_a, draw.and_then(|d| d.quota_a), "quota_a")?,
            resolve(*quota_b, draw.and_then(|d| d.quota_b), "quota_b")?,
            resolve(*quota_c, draw.and_then(|d| d.quota_c), "quota_c")?,
        ))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.endpoint {
            validate_url("endpoint", endpoint)?;
        }
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout as usize, 1)?;
        }
        Ok(())
    }
}
