use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChannelError {
    #[error("Length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, ChannelError>;

/// Fail unless two paired sequences have the same length.
pub(crate) fn ensure_same_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(ChannelError::LengthMismatch { expected, actual });
    }
    Ok(())
}
