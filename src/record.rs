//! Line parsing into delimited rows.
//!
//! A [`Row`] borrows its fields from the raw line it was parsed from and
//! lives only as long as that line is being processed.

use crate::error::CellError;

/// Strip one trailing line terminator (`\n`, `\r\n` or `\r`).
pub fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// One parsed line: the sequence of field values between delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Row<'a> {
    pub fn new(fields: Vec<&'a str>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at a zero-based column index.
    pub fn field(&self, column: usize) -> Result<&'a str, CellError> {
        self.fields
            .get(column)
            .copied()
            .ok_or(CellError::IndexOutOfRange {
                column,
                len: self.fields.len(),
            })
    }

    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }
}

/// Split a raw line on every literal occurrence of `delimiter`.
///
/// The trailing terminator is removed from the last field only; no other
/// whitespace is touched. An empty line yields a single empty field.
pub fn parse_line<'a>(raw_line: &'a str, delimiter: &str) -> Row<'a> {
    let line = strip_terminator(raw_line);
    if line.is_empty() || delimiter.is_empty() {
        return Row::new(vec![line]);
    }
    Row::new(line.split(delimiter).collect())
}
