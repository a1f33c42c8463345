use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures converting host-supplied values into engine inputs.
///
/// Malformed domain input (blank terms, unknown terms, unregistered ids) is
/// never an error; only values of the wrong shape are.
#[derive(Error, Debug)]
pub enum Error {
    #[error("expected an array of terms, found {0}")]
    NotAnArray(&'static str),

    #[error("expected a string at position {index}, found {found}")]
    NotAString { index: usize, found: &'static str },

    #[error("invalid document id: {0}")]
    InvalidDocId(String),

    #[error("field {field} must be a string, found {found}")]
    FieldNotAString { field: &'static str, found: &'static str },

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
