use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A metric was requested over zero examples.
    #[error("cannot compute a metric over an empty example set")]
    EmptyDataset,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to install the log subscriber: {0}")]
    Logging(#[from] SetGlobalDefaultError),
}
