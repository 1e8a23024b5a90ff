use thiserror::Error;

#[cfg(feature = "aws-sdk")]
use crate::native::sdk::ConversionError;

/// A wire string that names no variant of the enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` is not a valid {type_name} (expected one of {expected:?})")]
pub struct UnknownVariant {
    pub type_name: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

/// Errors raised while editing a record through a field path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("empty field path")]
    EmptyPath,
    #[error("{record} has no field `{field}`")]
    UnknownField { record: &'static str, field: String },
    #[error("`{segment}` is not a list index")]
    InvalidIndex { segment: String },
    #[error("index {index} is out of range for a list of {len} elements")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("`{path}` does not lead through a record or a list")]
    NotAContainer { path: String },
    #[error("`{path}` is a record or a list, not a scalar")]
    NotAScalar { path: String },
    #[error("invalid value `{value}` for `{path}`: {reason}")]
    InvalidValue {
        path: String,
        value: String,
        reason: String,
    },
    #[error(transparent)]
    UnknownVariant(#[from] UnknownVariant),
}

/// Errors raised when working with record types by name.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown record type `{0}`")]
    UnknownType(String),
    #[error("expected a {expected} record, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "aws-sdk")]
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
