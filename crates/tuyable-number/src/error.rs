use thiserror::Error;

/// Errors raised by a [`StateStore`](crate::StateStore).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
