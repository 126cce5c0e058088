use thiserror::Error;

pub mod portfolio;
pub mod suggestions;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    #[error("{0}")]
    Overflow(String),
}
