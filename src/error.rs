//! Error types for table processing.

use thiserror::Error;

/// Convenience result type used throughout the crate.
pub type Result<T> = std::result::Result<T, T2tError>;

/// Numeric family a cell was expected to coerce to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    /// Integer, falling back to float.
    Number,
    Int,
    Float,
}

impl std::fmt::Display for NumericKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericKind::Number => write!(f, "number"),
            NumericKind::Int => write!(f, "integer"),
            NumericKind::Float => write!(f, "float"),
        }
    }
}

/// A field value could not be converted to a number.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("'{raw}' is not a valid {expected}")]
pub struct CoercionError {
    pub raw: String,
    pub expected: NumericKind,
}

/// Data error for a single row. Always fatal to the run.
///
/// `column` is the zero-based index; messages show it 1-based.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CellError {
    #[error("column {}: value '{}' is not a valid {}", .column + 1, .raw, .expected)]
    MalformedNumericCell {
        column: usize,
        raw: String,
        expected: NumericKind,
    },

    #[error("column {} out of range (row has {} fields)", .column + 1, .len)]
    IndexOutOfRange { column: usize, len: usize },
}

impl CellError {
    pub(crate) fn malformed(column: usize, err: CoercionError) -> Self {
        CellError::MalformedNumericCell {
            column,
            raw: err.raw,
            expected: err.expected,
        }
    }
}

/// Top-level error returned by the library.
#[derive(Debug, Error)]
pub enum T2tError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed filter, column list, header action or delimiter.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("line {line}: {source}")]
    Row {
        line: usize,
        #[source]
        source: CellError,
    },
}

impl T2tError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        T2tError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_error_message_includes_line() {
        let err = T2tError::Row {
            line: 7,
            source: CellError::IndexOutOfRange { column: 3, len: 2 },
        };
        assert_eq!(
            err.to_string(),
            "line 7: column 4 out of range (row has 2 fields)"
        );
    }

    #[test]
    fn test_malformed_from_coercion() {
        let err = CellError::malformed(
            1,
            CoercionError {
                raw: "abc".to_string(),
                expected: NumericKind::Int,
            },
        );
        assert_eq!(err.to_string(), "column 2: value 'abc' is not a valid integer");
    }
}
