use thiserror::Error;

/// Errors raised by vector operations.
///
/// Numeric edge cases (division by zero, normalising a zero vector) are not
/// errors; they surface as IEEE `inf`/`NaN` components instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// An operand was neither a vector of the right kind nor a number, or a
    /// conversion was handed malformed input.
    #[error("invalid operand: {0}")]
    InvalidOperand(String),
}

impl VectorError {
    pub fn invalid_operand(msg: impl Into<String>) -> Self {
        VectorError::InvalidOperand(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, VectorError>;
