use crate::utils::error::{LotteryError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML 配置檔,提供 endpoint 與名額的預設值;命令列參數優先。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub store: StoreConfig,
    pub draw: Option<DrawConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawConfig {
    pub quota_a: Option<u32>,
    pub quota_b: Option<u32>,
    pub quota_c: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LotteryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LOTTERY_ENDPOINT});未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_url("store.endpoint", &self.store.endpoint)?;

        if let Some(timeout) = self.store.timeout_seconds {
            crate::utils::validation::validate_positive_number(
                "store.timeout_seconds",
                timeout as usize,
                1,
            )?;
        }

        Ok(())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
            [store]
            endpoint = "https://example.com/exec"
        "#;
        let config = FileConfig::from_toml_str(toml).unwrap();

        assert_eq!(config.store.endpoint, "https://example.com/exec");
        assert!(config.store.timeout_seconds.is_none());
        assert!(config.draw.is_none());
        assert!(!config.monitoring_enabled());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [store]
            endpoint = "https://example.com/exec"
            timeout_seconds = 10

            [draw]
            quota_a = 5
            quota_b = 3
            quota_c = 2

            [monitoring]
            enabled = true
        "#;
        let config = FileConfig::from_toml_str(toml).unwrap();

        assert_eq!(config.store.timeout_seconds, Some(10));
        let draw = config.draw.as_ref().unwrap();
        assert_eq!(draw.quota_a, Some(5));
        assert_eq!(draw.quota_c, Some(2));
        assert!(config.monitoring_enabled());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("UNIT_LOTTERY_TEST_ENDPOINT", "https://env.example.com");
        let toml = r#"
            [store]
            endpoint = "${UNIT_LOTTERY_TEST_ENDPOINT}"
        "#;
        let config = FileConfig::from_toml_str(toml).unwrap();

        assert_eq!(config.store.endpoint, "https://env.example.com");
        std::env::remove_var("UNIT_LOTTERY_TEST_ENDPOINT");
    }

    #[test]
    fn test_unset_env_var_left_verbatim() {
        let toml = r#"
            [store]
            endpoint = "${UNIT_LOTTERY_UNSET_VAR}"
        "#;
        let config = FileConfig::from_toml_str(toml).unwrap();

        assert_eq!(config.store.endpoint, "${UNIT_LOTTERY_UNSET_VAR}");
        assert!(config.validate_config().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = FileConfig::from_toml_str("not valid toml [");
        assert!(matches!(result, Err(LotteryError::ConfigError { .. })));
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let toml = r#"
            [store]
            endpoint = "ftp://example.com"
        "#;
        let config = FileConfig::from_toml_str(toml).unwrap();
        assert!(config.validate_config().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let toml = r#"
            [store]
            endpoint = "https://example.com"
            timeout_seconds = 0
        "#;
        let config = FileConfig::from_toml_str(toml).unwrap();
        assert!(config.validate_config().is_err());
    }
}
