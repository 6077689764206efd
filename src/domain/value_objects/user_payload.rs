//! User payload - the opaque element carried through the queue

use std::fmt;

use serde_json::Value;

/// Reasons a submitted `data` field cannot become a queue element
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("'data' field is missing")]
    Missing,

    #[error("'data' field must be a string, got {0}")]
    NotAString(&'static str),

    #[error("'data' field is empty")]
    Empty,
}

/// A non-empty string supplied by a producer.
///
/// The service never interprets the contents; the only rule is that the
/// string is not empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPayload(String);

impl UserPayload {
    pub fn new(data: impl Into<String>) -> Result<Self, PayloadError> {
        let data = data.into();
        if data.is_empty() {
            return Err(PayloadError::Empty);
        }
        Ok(Self(data))
    }

    /// Validate an arbitrary JSON value taken from a request body
    pub fn from_json(value: Option<Value>) -> Result<Self, PayloadError> {
        match value {
            None | Some(Value::Null) => Err(PayloadError::Missing),
            Some(Value::String(data)) => Self::new(data),
            Some(other) => Err(PayloadError::NotAString(json_kind(&other))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
