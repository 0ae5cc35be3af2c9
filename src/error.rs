//! Error types for WINQ.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WinqError {
    /// A configuration call received a value incompatible with the slot's grammar.
    #[error("Invalid argument for {context}: {message}")]
    InvalidArgument {
        context: &'static str,
        message: String,
    },

    /// Render was attempted on a statement lacking a mandatory clause.
    #[error("{statement} statement is missing required {clause} clause")]
    MissingRequiredClause {
        statement: &'static str,
        clause: &'static str,
    },

    /// Render encountered an `Invalid` node or a structurally malformed subtree.
    #[error("Invalid tree: {0}")]
    InvalidTree(String),
}

impl WinqError {
    /// Create an invalid-argument error for the given call site.
    pub fn invalid_argument(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context,
            message: message.into(),
        }
    }

    /// Create a missing-clause error.
    pub fn missing(statement: &'static str, clause: &'static str) -> Self {
        Self::MissingRequiredClause { statement, clause }
    }

    /// Create an invalid-tree error.
    pub fn invalid_tree(message: impl Into<String>) -> Self {
        Self::InvalidTree(message.into())
    }
}

/// Result type alias for WINQ operations.
pub type WinqResult<T> = Result<T, WinqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WinqError::missing("DELETE", "FROM");
        assert_eq!(
            err.to_string(),
            "DELETE statement is missing required FROM clause"
        );

        let err = WinqError::invalid_argument("BindParameter", "index must be >= 1");
        assert_eq!(
            err.to_string(),
            "Invalid argument for BindParameter: index must be >= 1"
        );
    }
}
