//! Leading header/comment line handling.
//!
//! Before the main filtering loop, an ordered list of [`HeaderAction`]s
//! claims lines from the start of the file. Each action consumes lines
//! until its extent is exhausted, then hands over to the next one:
//!
//! - `Count(n)` consumes exactly `n` lines (fewer if the file ends).
//! - `Prefix(c)` consumes lines while the next unread line starts with `c`.
//!   The first non-matching line is left unread.
//!
//! Every consumed line is kept verbatim, skipped, or rearranged through the
//! column projection.

use std::fmt;
use std::io::{BufRead, Write};
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::config::RunConfig;
use crate::error::{Result, T2tError};
use crate::observer::RunObserver;
use crate::projection::project;
use crate::record::parse_line;
use crate::source::LineSource;

/// What to do with each header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVerb {
    /// Copy the line to the output unchanged.
    Keep,
    /// Discard the line.
    Skip,
    /// Parse and project the line like a data row, without filtering.
    Rearrange,
}

impl FromStr for HeaderVerb {
    type Err = T2tError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "keep" | "k" => Ok(HeaderVerb::Keep),
            "skip" | "s" => Ok(HeaderVerb::Skip),
            "rearrange" | "r" => Ok(HeaderVerb::Rearrange),
            _ => Err(T2tError::config(format!(
                "unknown header verb '{s}' (expected keep, skip or rearrange)"
            ))),
        }
    }
}

impl fmt::Display for HeaderVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeaderVerb::Keep => "keep",
            HeaderVerb::Skip => "skip",
            HeaderVerb::Rearrange => "rearrange",
        };
        f.write_str(name)
    }
}

/// How many lines a header action claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    Count(NonZeroUsize),
    Prefix(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderAction {
    pub verb: HeaderVerb,
    pub extent: Extent,
}

impl HeaderAction {
    pub fn new(verb: HeaderVerb, extent: Extent) -> Self {
        Self { verb, extent }
    }

    /// Action over a fixed number of lines; `n` must be positive.
    pub fn count(verb: HeaderVerb, n: usize) -> Result<Self> {
        let n = NonZeroUsize::new(n)
            .ok_or_else(|| T2tError::config("header line count must be at least 1"))?;
        Ok(Self::new(verb, Extent::Count(n)))
    }

    pub fn prefix(verb: HeaderVerb, c: char) -> Self {
        Self::new(verb, Extent::Prefix(c))
    }
}

impl fmt::Display for HeaderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.extent {
            Extent::Count(n) => write!(f, "{}:{}", self.verb, n),
            Extent::Prefix(c) => write!(f, "{}:{}", self.verb, c),
        }
    }
}

fn apply_verb<W: Write>(
    verb: HeaderVerb,
    line: &str,
    line_no: usize,
    sink: &mut W,
    config: &RunConfig,
) -> Result<()> {
    match verb {
        HeaderVerb::Keep => sink.write_all(line.as_bytes())?,
        HeaderVerb::Skip => {}
        HeaderVerb::Rearrange => {
            let row = parse_line(line, config.input_delimiter.as_str());
            let out = project(&row, &config.columns, config.output_delimiter.as_str())
                .map_err(|source| T2tError::Row {
                    line: line_no,
                    source,
                })?;
            sink.write_all(out.as_bytes())?;
        }
    }
    Ok(())
}

/// Run every configured header action in order against `source`.
///
/// Returns the number of lines consumed. Stops early at end of input.
pub fn preprocess<R: BufRead, W: Write>(
    source: &mut LineSource<R>,
    sink: &mut W,
    config: &RunConfig,
    observer: &mut dyn RunObserver,
) -> Result<usize> {
    let mut consumed = 0;

    for action in &config.header_actions {
        match action.extent {
            Extent::Count(n) => {
                for _ in 0..n.get() {
                    let Some(line) = source.next_line()? else {
                        return Ok(consumed);
                    };
                    consumed += 1;
                    observer.on_header_line(source.line_no(), action.verb);
                    apply_verb(action.verb, &line, source.line_no(), sink, config)?;
                }
            }
            Extent::Prefix(c) => {
                while source.peek()?.is_some_and(|next| next.starts_with(c)) {
                    let Some(line) = source.next_line()? else {
                        break;
                    };
                    consumed += 1;
                    observer.on_header_line(source.line_no(), action.verb);
                    apply_verb(action.verb, &line, source.line_no(), sink, config)?;
                }
            }
        }
    }

    Ok(consumed)
}
