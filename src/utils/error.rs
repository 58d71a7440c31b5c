use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error("No input file provided")]
    MissingInput,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

impl OptimizeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OptimizeError::MissingInput => ErrorCategory::Input,
            OptimizeError::TomlError(_)
            | OptimizeError::ConfigError { .. }
            | OptimizeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            OptimizeError::IoError(_) | OptimizeError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    /// 依錯誤類別決定行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            OptimizeError::MissingInput => "Pass the mesh file path as the first argument",
            OptimizeError::TomlError(_) => "Check the config file is valid TOML",
            OptimizeError::ConfigError { .. } | OptimizeError::InvalidConfigValueError { .. } => {
                "Fix the [simulation] values in the config file or on the command line"
            }
            OptimizeError::IoError(_) => "Check the file exists and is readable",
            OptimizeError::SerializationError(_) => "Report this as a bug",
        }
    }
}

pub type Result<T> = std::result::Result<T, OptimizeError>;
