//! Breakpoint lookup and loading errors.

use std::path::PathBuf;

/// Error returned when a named breakpoint cannot be resolved or a set cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakpointError {
    /// No breakpoint is registered under this name
    Unknown { name: String },
    /// The YAML or JSON source could not be deserialized
    Parse { message: String },
    /// The file could not be read, or its extension is not recognized
    Io { path: PathBuf, message: String },
}

impl std::fmt::Display for BreakpointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BreakpointError::Unknown { name } => {
                write!(f, "unknown breakpoint '{}'", name)
            }
            BreakpointError::Parse { message } => {
                write!(f, "invalid breakpoint definitions: {}", message)
            }
            BreakpointError::Io { path, message } => {
                write!(f, "failed to load breakpoints from {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for BreakpointError {}

impl From<serde_yaml::Error> for BreakpointError {
    fn from(err: serde_yaml::Error) -> Self {
        BreakpointError::Parse {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BreakpointError {
    fn from(err: serde_json::Error) -> Self {
        BreakpointError::Parse {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_error_display() {
        let err = BreakpointError::Unknown {
            name: "huge".to_string(),
        };
        assert_eq!(err.to_string(), "unknown breakpoint 'huge'");
    }

    #[test]
    fn test_io_error_display() {
        let err = BreakpointError::Io {
            path: PathBuf::from("/tmp/bp.toml"),
            message: "unsupported extension".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/bp.toml"));
        assert!(msg.contains("unsupported extension"));
    }
}
