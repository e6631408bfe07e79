use thiserror::Error;

#[derive(Error, Debug)]
pub enum TierError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error in {field}: {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    System,
}

impl TierError {
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        TierError::ValidationError {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            TierError::ConfigParseError { .. }
            | TierError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            TierError::ValidationError { .. } | TierError::SerializationError(_) => {
                ErrorCategory::Input
            }
            TierError::IoError(_) | TierError::ServerError { .. } => ErrorCategory::System,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Invalid laptop specification: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    /// 行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 2,
            ErrorCategory::Configuration => 1,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, TierError>;
