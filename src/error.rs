//! Error types for navgraph
//!
//! Every error here is a local, recoverable condition. Graph queries that
//! legitimately find nothing (no route between two known fixes) are not
//! errors and are reported as `Ok(None)` instead.

mod macros;

use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum NavError {
    #[error("node already exists: {id}")]
    DuplicateId { id: String },

    #[error("edge already exists: {from} -> {to}")]
    DuplicateEdge { from: String, to: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("node not in path: {id}")]
    NotInPath { id: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl NavError {
    /// Create an error for a node id that is already taken
    pub fn duplicate_id(id: impl std::fmt::Display) -> Self {
        NavError::DuplicateId { id: id.to_string() }
    }

    /// Create an error for a directed edge that already exists
    pub fn duplicate_edge(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        NavError::DuplicateEdge {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        NavError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a node that does not appear in a path
    pub fn not_in_path(id: impl std::fmt::Display) -> Self {
        NavError::NotInPath { id: id.to_string() }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NavError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Whether this error means some id could not be resolved
    pub fn is_not_found(&self) -> bool {
        matches!(self, NavError::NotFound { .. })
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            NavError::DuplicateId { .. } => "duplicate_id",
            NavError::DuplicateEdge { .. } => "duplicate_edge",
            NavError::NotFound { .. } => "not_found",
            NavError::NotInPath { .. } => "not_in_path",
            NavError::InvalidValue { .. } => "invalid_value",
            NavError::Io(_) => "io_error",
            NavError::Toml(_) => "toml_error",
            NavError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for navgraph operations
pub type Result<T> = std::result::Result<T, NavError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = NavError::not_found("node", "LEBL");
        assert_eq!(err.to_string(), "node not found: LEBL");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_duplicate_edge_message() {
        let err = NavError::duplicate_edge("A", "B");
        assert_eq!(err.to_string(), "edge already exists: A -> B");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_error_type_identifiers() {
        assert_eq!(NavError::duplicate_id("A").error_type(), "duplicate_id");
        assert_eq!(NavError::not_in_path("A").error_type(), "not_in_path");
        assert_eq!(
            NavError::invalid_value("cost", -1.0).error_type(),
            "invalid_value"
        );
    }

    #[test]
    fn test_to_json() {
        let json = NavError::not_in_path("GODOX").to_json();
        assert_eq!(json["error"]["type"], "not_in_path");
        assert_eq!(json["error"]["message"], "node not in path: GODOX");
    }
}
