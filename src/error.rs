use thiserror::Error;

#[derive(Error, Debug)]
pub enum NameDividerError {
    #[error("Invalid Input: name length needs at least 2 chars, got '{0}'")]
    InvalidInput(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pattern Error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type NdResult<T> = Result<T, NameDividerError>;
