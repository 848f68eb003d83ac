use thiserror::Error;

#[derive(Debug, Error)]
pub enum FibError {
    #[error("invalid bound {input:?}: {reason}")]
    InvalidBound { input: String, reason: &'static str },

    #[error("failed to write sequence: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FibError>;
