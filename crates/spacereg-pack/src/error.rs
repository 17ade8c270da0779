//! Reference-data error types.
//!
//! Structured errors for loading and validating the jurisdiction, guideline
//! and cross-reference tables. File errors carry the offending path;
//! validation errors carry every problem found, not just the first.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading reference data.
#[derive(Debug, Error)]
pub enum PackError {
    /// YAML parsing failed.
    #[error("failed to parse YAML at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// A required file was not found.
    #[error("required file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The parsed tables are inconsistent.
    #[error("reference data failed validation ({} problem(s)): {}", .problems.len(), .problems.join("; "))]
    Validation { problems: Vec<String> },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic serde_yaml error (not file-specific, e.g. bundled data).
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for reference-data operations.
pub type PackResult<T> = Result<T, PackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let err = PackError::FileNotFound {
            path: PathBuf::from("/tmp/jurisdictions.yaml"),
        };
        assert!(format!("{err}").contains("/tmp/jurisdictions.yaml"));
    }

    #[test]
    fn validation_display_lists_every_problem() {
        let err = PackError::Validation {
            problems: vec![
                "duplicate jurisdiction code FR".to_string(),
                "cross reference art-6 has no article".to_string(),
            ],
        };
        let msg = format!("{err}");
        assert!(msg.contains("2 problem(s)"));
        assert!(msg.contains("duplicate jurisdiction code FR"));
        assert!(msg.contains("art-6"));
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = PackError::from(io_err);
        assert!(format!("{err}").contains("access denied"));
    }

    #[test]
    fn pack_result_alias_works() {
        let ok: PackResult<i32> = Ok(42);
        assert_eq!(ok.unwrap(), 42);

        let err: PackResult<i32> = Err(PackError::Validation { problems: vec![] });
        assert!(err.is_err());
    }
}
