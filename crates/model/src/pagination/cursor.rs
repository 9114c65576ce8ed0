use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque continuation token handed back by the service.
///
/// A token is only a valid continuation of the exact page that produced it,
/// and only while that page reported a strictly positive remaining count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreamPosition(String);

impl StreamPosition {
    pub fn new(token: impl Into<String>) -> Self {
        StreamPosition(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StreamPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
