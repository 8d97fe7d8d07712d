//! Error types shared across the crate.

use thiserror::Error;

pub type AnalyzeResult<T> = Result<T, AnalyzeError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("invalid card notation '{0}'")]
    InvalidCard(String),

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("empty range: select at least one combo")]
    EmptyRange,

    #[error("range produced no valid combinations against this board")]
    NoValidCombos,
}
