use thiserror::Error;

#[derive(Error, Debug)]
pub enum LotteryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl LotteryError {
    /// 給操作者看的簡短說明。
    pub fn user_friendly_message(&self) -> String {
        match self {
            LotteryError::ApiError(_) => "無法連線到報名資料表,請稍後再試。".to_string(),
            LotteryError::CsvError(_) | LotteryError::IoError(_) => {
                "結果輸出失敗。".to_string()
            }
            LotteryError::SerializationError(_) => "資料表回應的格式無法解析。".to_string(),
            LotteryError::ConfigError { message } => format!("設定有誤:{}", message),
            LotteryError::InvalidConfigValueError { field, reason, .. } => {
                format!("欄位 {} 的值無效:{}", field, reason)
            }
            LotteryError::MissingConfigError { field } => {
                format!("缺少必要設定:{}", field)
            }
            LotteryError::ValidationError { message } => format!("資料驗證失敗:{}", message),
        }
    }

    /// 建議的排除方式。
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LotteryError::ApiError(_) => "確認網路連線與 endpoint 設定後重新執行",
            LotteryError::CsvError(_) | LotteryError::IoError(_) => {
                "確認輸出路徑存在且有寫入權限"
            }
            LotteryError::SerializationError(_) => "確認 endpoint 指向正確的資料表端點",
            LotteryError::ConfigError { .. }
            | LotteryError::InvalidConfigValueError { .. }
            | LotteryError::MissingConfigError { .. } => "檢查命令列參數與配置檔內容",
            LotteryError::ValidationError { .. } => "修正輸入欄位後重新送出",
        }
    }
}

pub type Result<T> = std::result::Result<T, LotteryError>;
