use thiserror::Error;

/// Errors surfaced to embedders.
///
/// Only misuse of the API is a hard failure. Running out of wall-clock
/// budget, exhausting the partial set, or an interactive stop are normal
/// exits that still return whatever was accumulated.
#[derive(Error, Debug)]
pub enum ModePlanError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type MpResult<T> = Result<T, ModePlanError>;
