//! Error types for response validation and status translation.

use thiserror::Error;

/// The API response does not have the expected shape.
///
/// Validation stops at the first problem, so only one field is ever named.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// `homeworks` is missing or is not a list.
    #[error("invalid response: field 'homeworks' is not a list")]
    HomeworksNotList,

    /// An element of `homeworks` is not an object.
    #[error("invalid response: homework #{index} is not an object")]
    HomeworkNotObject { index: usize },

    /// `homework_name` is missing or is not a string.
    #[error("invalid response: field 'homework_name' of homework #{index} is not a string")]
    NameNotString { index: usize },

    /// `status` is missing or is not a string.
    #[error("invalid response: field 'status' of homework #{index} is not a string")]
    StatusNotString { index: usize },
}

/// A homework carries a status outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown homework status: {status}")]
pub struct UnknownStatusError {
    /// The status string as received.
    pub status: String,
}

impl UnknownStatusError {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}
