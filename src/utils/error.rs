use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Prediction endpoint returned HTTP {status}: {body}")]
    EndpointError { status: u16, body: String },

    #[error("Response is missing the 'predictions' field")]
    MissingPredictions,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ScreenError>;
