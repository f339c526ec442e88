//! Error types for maze construction, parsing, and solving

use std::fmt;
use std::path::PathBuf;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Grid layout rows have inconsistent lengths
    RaggedLayout {
        /// Index of the offending row
        row: usize,
        /// Length every row must have (taken from the first row)
        expected: usize,
        /// Actual length of the offending row
        actual: usize,
    },

    /// Grid layout is unusable for reasons other than raggedness
    InvalidLayout {
        /// Description of what is wrong with the layout
        reason: String,
    },

    /// Maze text contains a character that is neither wall nor passage
    UnknownGlyph {
        /// Row of the offending character
        row: usize,
        /// Column of the offending character
        col: usize,
        /// The character itself
        glyph: char,
    },

    /// Parameter validation failed
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

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedLayout {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Ragged maze layout: row {row} has {actual} cells, expected {expected}"
                )
            }
            Self::InvalidLayout { reason } => {
                write!(f, "Invalid maze layout: {reason}")
            }
            Self::UnknownGlyph { row, col, glyph } => {
                write!(f, "Unknown maze glyph '{glyph}' at row {row}, column {col}")
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

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid layout error
pub fn invalid_layout(reason: &impl ToString) -> MazeError {
    MazeError::InvalidLayout {
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MazeError::RaggedLayout {
            row: 3,
            expected: 8,
            actual: 5,
        };
        assert_eq!(
            err.to_string(),
            "Ragged maze layout: row 3 has 5 cells, expected 8"
        );

        let err = invalid_parameter("fraction", &1.5, &"must lie in [0, 1]");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'fraction' = '1.5': must lie in [0, 1]"
        );
    }
}
