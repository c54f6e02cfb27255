use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PointSetError {
    #[error("index {index} out of range for point set of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid range [{from}, {to}) for point set of length {len}")]
    InvalidRange { from: usize, to: usize, len: usize },
}
