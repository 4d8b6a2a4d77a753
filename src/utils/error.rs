use thiserror::Error;

/// The arithmetic itself cannot fail; errors only occur at the output edge
/// when results are rendered or written.
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
