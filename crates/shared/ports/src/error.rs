use thiserror::Error;

/// Errors from fetching a market price
///
/// Infrastructure implementations convert their transport errors to this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Price API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse price response: {0}")]
    Parse(String),
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Errors from the key-value persistence port
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Stored data is malformed: {0}")]
    Serialization(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e.to_string())
    }
}
