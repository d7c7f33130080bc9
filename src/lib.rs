//! # t2t
//!
//! Table-to-table conversion for delimited text files.
//!
//! A run reads a tab, comma or space separated file one line at a time,
//! keeps the rows that pass a set of per-column filters, and writes a chosen
//! subset of columns, in a chosen order, with a chosen output delimiter.
//! Leading header or comment lines can be kept, skipped or rearranged before
//! filtering starts.
//!
//! ## Overview
//!
//! - **Line parsing**: literal split on the input delimiter
//! - **Filtering**: inclusion criteria must all hold, exclusion criteria
//!   must all fail
//! - **Projection**: select and reorder columns, duplicates allowed
//! - **Header actions**: keep/skip/rearrange by line count or leading character
//!
//! ## Example
//!
//! ```
//! use t2t::{Delimiter, NoopObserver, RunConfig, parse_columns, parse_filters, run_str};
//!
//! let input = "1\tapple\t3\n2\tpear\t5\n3\tplum\t7\n";
//! let config = RunConfig::new(parse_columns("3,2").unwrap())
//!     .with_delimiters(Delimiter::Tab, Delimiter::Comma)
//!     .with_filters(parse_filters(["col1>1", "!col2:ear"]).unwrap());
//!
//! let (output, metrics) = run_str(input, &config, &mut NoopObserver).unwrap();
//!
//! assert_eq!(output, "7,plum\n");
//! assert_eq!(metrics.total_lines, 3);
//! assert_eq!(metrics.passed_lines, 1);
//! ```

pub mod config;
pub mod criterion;
pub mod dsl;
pub mod error;
pub mod executor;
pub mod filter;
pub mod header;
pub mod observer;
pub mod projection;
pub mod record;
pub mod source;
pub mod trace;

pub use config::{Delimiter, RunConfig};
pub use criterion::{FilterCriterion, Number, Polarity, Predicate, to_float, to_int, to_number};
pub use dsl::{parse_columns, parse_filter, parse_filters, parse_header_action, parse_header_actions};
pub use error::{CellError, CoercionError, NumericKind, Result, T2tError};
pub use executor::{Metrics, run, run_files, run_str};
pub use filter::FilterSet;
pub use header::{Extent, HeaderAction, HeaderVerb, preprocess};
pub use observer::{NoopObserver, RunObserver, TracingObserver};
pub use projection::{ColumnSpec, project};
pub use record::{Row, parse_line};
pub use source::LineSource;
pub use trace::{HeaderTrace, RowTrace, RunTrace};
