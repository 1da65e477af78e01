use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("JSON Error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Configuration Error: {0}")]
    ConfigError(String),
}
