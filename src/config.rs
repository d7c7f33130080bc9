//! Run configuration: delimiters, columns, filters and header actions.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, T2tError};
use crate::filter::FilterSet;
use crate::header::HeaderAction;
use crate::projection::ColumnSpec;

/// Field delimiter for input or output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Tab,
    Comma,
    Space,
}

impl Delimiter {
    pub fn as_str(self) -> &'static str {
        match self {
            Delimiter::Tab => "\t",
            Delimiter::Comma => ",",
            Delimiter::Space => " ",
        }
    }

    /// Infer from a `.tsv`, `.csv` or `.ssv` extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "tsv" => Some(Delimiter::Tab),
            "csv" => Some(Delimiter::Comma),
            "ssv" => Some(Delimiter::Space),
            _ => None,
        }
    }
}

impl FromStr for Delimiter {
    type Err = T2tError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "\t" | "\\t" => return Ok(Delimiter::Tab),
            "," => return Ok(Delimiter::Comma),
            " " => return Ok(Delimiter::Space),
            _ => {}
        }
        match s.to_ascii_lowercase().as_str() {
            "tab" | "tsv" => Ok(Delimiter::Tab),
            "comma" | "csv" => Ok(Delimiter::Comma),
            "space" | "ssv" => Ok(Delimiter::Space),
            _ => Err(T2tError::config(format!(
                "unknown delimiter '{s}' (expected tab, comma or space)"
            ))),
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Delimiter::Tab => "tab",
            Delimiter::Comma => "comma",
            Delimiter::Space => "space",
        };
        f.write_str(name)
    }
}

/// Everything a pipeline run needs, built once and passed by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input_delimiter: Delimiter,
    pub output_delimiter: Delimiter,
    pub columns: ColumnSpec,
    pub filters: FilterSet,
    pub header_actions: Vec<HeaderAction>,
}

impl RunConfig {
    /// Tab in, tab out, no filters, no header handling.
    pub fn new(columns: ColumnSpec) -> Self {
        Self {
            input_delimiter: Delimiter::Tab,
            output_delimiter: Delimiter::Tab,
            columns,
            filters: FilterSet::new(),
            header_actions: Vec::new(),
        }
    }

    pub fn with_delimiters(mut self, input: Delimiter, output: Delimiter) -> Self {
        self.input_delimiter = input;
        self.output_delimiter = output;
        self
    }

    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_header_actions(mut self, actions: Vec<HeaderAction>) -> Self {
        self.header_actions = actions;
        self
    }
}
