//! Error types and context management for pose generation and layer planning

use crate::hand::finger::Finger;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all pose operations
#[derive(Debug)]
pub enum PoseError {
    /// A layer export specification token names something outside the allowed set
    InvalidSpecification {
        /// The offending token as written
        token: String,
        /// Human-readable description of the allowed values or format
        expected: String,
        /// Manifest line the token was read from, when known
        line: Option<usize>,
    },

    /// A layer manifest line could not be interpreted
    InvalidManifestLine {
        /// 1-based line number in the manifest
        line: usize,
        /// Description of what's wrong with the line
        reason: String,
    },

    /// A pose references a finger that no layer is bound to
    UnboundFinger {
        /// Finger with no bound layers
        finger: Finger,
    },

    /// Rule tables are inconsistent
    ///
    /// Raised only while constructing custom rules; the generator itself
    /// never fails once it holds a validated rule set.
    InvalidRules {
        /// Description of the inconsistency
        reason: String,
    },

    /// Command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PoseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpecification {
                token,
                expected,
                line,
            } => {
                if let Some(line) = line {
                    write!(
                        f,
                        "Invalid specification '{token}' on line {line}: expected {expected}"
                    )
                } else {
                    write!(f, "Invalid specification '{token}': expected {expected}")
                }
            }
            Self::InvalidManifestLine { line, reason } => {
                write!(f, "Invalid manifest line {line}: {reason}")
            }
            Self::UnboundFinger { finger } => {
                write!(f, "No layer is bound to finger '{finger}'")
            }
            Self::InvalidRules { reason } => {
                write!(f, "Invalid pose rules: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PoseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pose results
pub type Result<T> = std::result::Result<T, PoseError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Manifest line being processed
    pub line: Option<usize>,
    /// File being read or written
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with manifest and file-system state
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the manifest line context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the line number applied
    fn with_line(self, line: usize) -> Result<T>;

    /// Add the path and operation context of a file-system access
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<PoseError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                PoseError::InvalidSpecification { line, .. } if context.line.is_some() => {
                    *line = context.line;
                }
                PoseError::FileSystem {
                    path, operation, ..
                } => {
                    if let Some(context_path) = context.path {
                        *path = context_path;
                    }
                    if let Some(context_operation) = context.operation {
                        *operation = context_operation;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_line(self, line: usize) -> Result<T> {
        self.with_context(ErrorContext {
            line: Some(line),
            ..Default::default()
        })
    }

    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.into()),
            operation: Some(operation),
            ..Default::default()
        })
    }
}

impl From<std::io::Error> for PoseError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid specification error without line information
pub fn invalid_specification(token: &impl ToString, expected: &impl ToString) -> PoseError {
    PoseError::InvalidSpecification {
        token: token.to_string(),
        expected: expected.to_string(),
        line: None,
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PoseError {
    PoseError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid rules error
pub fn invalid_rules(reason: &impl ToString) -> PoseError {
    PoseError::InvalidRules {
        reason: reason.to_string(),
    }
}
