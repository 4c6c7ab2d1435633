//! Incoming request record with dictionary-style body access.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An already-parsed JSON request body.
///
/// Controllers only read from it: field lookup goes through [`HttpRequest::get`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpRequest {
    /// Top-level JSON object of the request body.
    pub body: Map<String, Value>,
}

impl HttpRequest {
    /// Create a request from an already-parsed JSON object.
    pub fn new(body: Map<String, Value>) -> Self {
        Self { body }
    }

    /// Create a request with an empty body.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse raw bytes into a request.
    ///
    /// Malformed JSON and non-object top-level values both degrade to an empty
    /// body, so downstream validation reports the missing field instead of a
    /// parse error.
    pub fn from_json_bytes(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(body)) => Self { body },
            _ => Self::default(),
        }
    }

    /// Look up a top-level body field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }
}
