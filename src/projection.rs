//! Column selection and output formatting.

use crate::error::{CellError, Result, T2tError};
use crate::record::Row;

/// Ordered, non-empty list of zero-based column indices.
///
/// Duplicates are allowed; the list order is the output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec(Vec<usize>);

impl ColumnSpec {
    pub fn new(columns: Vec<usize>) -> Result<Self> {
        if columns.is_empty() {
            return Err(T2tError::config("at least one output column is required"));
        }
        Ok(Self(columns))
    }

    /// Identity projection over the first `n` columns.
    pub fn identity(n: usize) -> Result<Self> {
        Self::new((0..n).collect())
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest index referenced.
    pub fn max_index(&self) -> usize {
        self.0.iter().copied().max().unwrap_or(0)
    }
}

/// Select `columns` from `row`, join them with `out_delimiter` and append `\n`.
///
/// A row shorter than the largest index is an error, never truncated.
pub fn project(
    row: &Row<'_>,
    columns: &ColumnSpec,
    out_delimiter: &str,
) -> std::result::Result<String, CellError> {
    let mut out = String::new();
    for (i, &column) in columns.indices().iter().enumerate() {
        if i > 0 {
            out.push_str(out_delimiter);
        }
        out.push_str(row.field(column)?);
    }
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_line;

    #[test]
    fn test_column_spec_rejects_empty() {
        let err = ColumnSpec::new(vec![]).unwrap_err();
        assert!(matches!(err, T2tError::Config(_)));
    }

    #[test]
    fn test_project_reorders() {
        let row = parse_line("a\tb\tc\n", "\t");
        let cols = ColumnSpec::new(vec![2, 0]).unwrap();
        assert_eq!(project(&row, &cols, ",").unwrap(), "c,a\n");
    }

    #[test]
    fn test_project_duplicates() {
        let row = parse_line("a\tb\n", "\t");
        let cols = ColumnSpec::new(vec![1, 1, 0]).unwrap();
        assert_eq!(cols.max_index(), 1);
        assert_eq!(project(&row, &cols, " ").unwrap(), "b b a\n");
    }

    #[test]
    fn test_project_short_row_is_error() {
        let row = parse_line("a\tb\n", "\t");
        let cols = ColumnSpec::new(vec![0, 3]).unwrap();
        assert_eq!(
            project(&row, &cols, ","),
            Err(CellError::IndexOutOfRange { column: 3, len: 2 })
        );
    }

    #[test]
    fn test_identity_round_trip() {
        let line = "x\t\ty z\t4\n";
        let row = parse_line(line, "\t");
        let cols = ColumnSpec::identity(row.len()).unwrap();
        assert_eq!(project(&row, &cols, "\t").unwrap(), line);
    }

    #[test]
    fn test_identity_round_trip_normalises_crlf() {
        let row = parse_line("1,2\r\n", ",");
        let cols = ColumnSpec::identity(row.len()).unwrap();
        assert_eq!(project(&row, &cols, ",").unwrap(), "1,2\n");
    }
}
