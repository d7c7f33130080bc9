//! Line-at-a-time table pipeline.
//!
//! Each input line is parsed, filtered and projected before the next line is
//! read, so memory use does not grow with the file. Header actions run first
//! against the same line source.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::config::RunConfig;
use crate::error::{Result, T2tError};
use crate::header::preprocess;
use crate::observer::RunObserver;
use crate::projection::project;
use crate::record::parse_line;
use crate::source::LineSource;

/// Line counters for one run. Header lines are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    pub total_lines: usize,
    pub passed_lines: usize,
}

/// Run the pipeline from `source` to `sink`.
///
/// A malformed numeric cell or a short row aborts the run; lines already
/// written stay written.
pub fn run<R: BufRead, W: Write>(
    source: R,
    sink: &mut W,
    config: &RunConfig,
    observer: &mut dyn RunObserver,
) -> Result<Metrics> {
    let mut lines = LineSource::new(source);
    let mut metrics = Metrics::default();

    preprocess(&mut lines, sink, config, observer)?;

    let in_delim = config.input_delimiter.as_str();
    let out_delim = config.output_delimiter.as_str();

    while let Some(line) = lines.next_line()? {
        let line_no = lines.line_no();
        metrics.total_lines += 1;

        let row = parse_line(&line, in_delim);
        let accepted = config
            .filters
            .accept(&row)
            .map_err(|source| T2tError::Row {
                line: line_no,
                source,
            })?;
        observer.on_row(line_no, accepted);
        if !accepted {
            continue;
        }

        metrics.passed_lines += 1;
        let out = project(&row, &config.columns, out_delim).map_err(|source| T2tError::Row {
            line: line_no,
            source,
        })?;
        sink.write_all(out.as_bytes())?;
    }

    observer.on_finish(&metrics);
    Ok(metrics)
}

/// Run the pipeline between two files.
///
/// The output is flushed whether or not the run succeeds, and both files are
/// closed before returning.
pub fn run_files(
    input: &Path,
    output: &Path,
    config: &RunConfig,
    observer: &mut dyn RunObserver,
) -> Result<Metrics> {
    let reader = BufReader::new(File::open(input)?);
    let mut writer = BufWriter::new(File::create(output)?);

    let result = run(reader, &mut writer, config, observer);
    let flushed = writer.flush();

    let metrics = result?;
    flushed?;
    Ok(metrics)
}

/// Run the pipeline over an in-memory string, returning the output text.
pub fn run_str(
    input: &str,
    config: &RunConfig,
    observer: &mut dyn RunObserver,
) -> Result<(String, Metrics)> {
    let mut out = Vec::new();
    let metrics = run(input.as_bytes(), &mut out, config, observer)?;
    let text = String::from_utf8(out)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok((text, metrics))
}
