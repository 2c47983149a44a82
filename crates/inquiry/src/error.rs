use thiserror::Error;

/// Rejection of a submitted form, shown verbatim to the submitter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email format")]
    InvalidEmail,
}

pub type Result<T, E = ValidationError> = std::result::Result<T, E>;
