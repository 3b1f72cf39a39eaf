//! Error types for invariant assertions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Message carried by the default exception when no data was supplied.
pub const DEFAULT_MESSAGE: &str = "Invariant error";

/// Exception produced by the default assertion function.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvariantError {
    pub message: String,
}

impl InvariantError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for InvariantError {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE)
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for InvariantError {}

/// Result type alias for assertions built on the default producer.
pub type InvariantResult<T> = Result<T, InvariantError>;

impl From<String> for InvariantError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for InvariantError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
