use thiserror::Error;

/// Result type alias using FoxdenError
pub type Result<T> = std::result::Result<T, FoxdenError>;

/// Comprehensive error taxonomy for site kernel operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FoxdenError {
    // ===== Routing Errors =====
    /// Raw path could not be normalized into a RoutePath
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// Two routes in the table share the same path
    #[error("Duplicate route path: {path}")]
    DuplicateRoutePath { path: String },

    /// A view is reachable through more than one route
    #[error("View {view} is mapped by multiple routes")]
    DuplicateRouteView { view: String },

    /// A view has no route pointing at it (table must be bijective)
    #[error("View {view} has no route")]
    UnroutedView { view: String },

    // ===== Transition Errors =====
    /// ExitComplete was applied while no transition was in flight
    #[error("No transition in flight: exit-complete requires a switching state")]
    NotSwitching,

    // ===== Configuration Errors =====
    /// Site configuration could not be parsed
    #[error("Invalid site configuration: {message}")]
    Config { message: String },

    // ===== Generic Errors =====
    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Filesystem error (snapshot output)
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from serde_json::Error to FoxdenError
impl From<serde_json::Error> for FoxdenError {
    fn from(err: serde_json::Error) -> Self {
        FoxdenError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Conversion from std::io::Error to FoxdenError
impl From<std::io::Error> for FoxdenError {
    fn from(err: std::io::Error) -> Self {
        FoxdenError::Io {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_path() {
        let err = FoxdenError::InvalidPath {
            path: "menu".to_string(),
            reason: "must start with '/'".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("menu"));
        assert!(rendered.contains("must start with '/'"));
    }

    #[test]
    fn test_not_switching_is_comparable() {
        assert_eq!(FoxdenError::NotSwitching, FoxdenError::NotSwitching);
    }

    #[test]
    fn test_serde_json_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let err: FoxdenError = parse_err.into();
        assert!(matches!(err, FoxdenError::Serialization { .. }));
    }
}
