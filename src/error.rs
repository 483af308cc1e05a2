use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    /// The simulated gateway could not be reached. Never retried.
    #[error("Gateway failure: the payment gateway did not respond")]
    GatewayFailure,
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
    #[error("Unknown payment status: {0:?}")]
    UnknownStatus(String),
    #[error("Unknown fraud status: {0:?}")]
    UnknownFraudStatus(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
