use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FpError {
    #[error("min_support must be a positive integer (got {0})")]
    InvalidMinSupport(usize),
    #[error("the tree has not been fitted yet")]
    NotFitted,
}
