use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthError {
    #[error("period length must be at least 2, got {0}")]
    InvalidPeriodLength(usize),
}

pub type SynthResult<T> = Result<T, SynthError>;
