use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("File {path} is not valid UTF-8")]
    NonUtf8File { path: String },
}

impl PrimerError {
    /// Message shown on stderr when the program refuses to start.
    pub fn user_friendly_message(&self) -> String {
        match self {
            PrimerError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            PrimerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting for {}: {}", field, reason)
            }
            PrimerError::TomlError(e) => {
                format!("The config file is not valid TOML: {}", e)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PrimerError>;
