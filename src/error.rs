use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StripError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {} as JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("expected a JSON array at the root of {}, found {found}", path.display())]
    NotAnArray { path: PathBuf, found: &'static str },

    #[error("expected an object at index {index} of {}, found {found}", path.display())]
    NotARecord {
        path: PathBuf,
        index: usize,
        found: &'static str,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to move temporary file onto {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        source: tempfile::PersistError,
    },
}

pub type Result<T> = std::result::Result<T, StripError>;

/// Name of a JSON value's kind, for error messages
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
