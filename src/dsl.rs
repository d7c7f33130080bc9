//! Parsers for the command-line argument grammar.
//!
//! Columns:
//! ```text
//! 2,1,3        # 1-based, output order, duplicates allowed
//! ```
//!
//! Filters:
//! ```text
//! col3=ERROR   # include rows whose 3rd field is "ERROR"
//! +col1>=10    # same as no prefix
//! !col2:tmp    # exclude rows whose 2nd field contains "tmp"
//! -col4i!=0    # exclude rows whose 4th field is not the integer 0
//! ```
//!
//! Header actions:
//! ```text
//! keep:2       # copy the first 2 lines unchanged
//! skip:#       # drop leading lines starting with '#'
//! rearrange:1  # project the next line like a data row
//! ```

use crate::criterion::{FilterCriterion, Polarity, Predicate, to_float, to_int, to_number};
use crate::error::{Result, T2tError};
use crate::filter::FilterSet;
use crate::header::{HeaderAction, HeaderVerb};
use crate::projection::ColumnSpec;

/// Operators in match order: longer symbols before their prefixes.
const OPERATORS: [&str; 12] = [
    "i!=", "f!=", "i=", "f=", "!=", "!:", ">=", "<=", "=", ":", ">", "<",
];

/// Parse a 1-based column number into a zero-based index.
fn parse_column_number(s: &str, context: &str) -> Result<usize> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| T2tError::config(format!("invalid column number '{s}' in '{context}'")))?;
    if n == 0 {
        return Err(T2tError::config(format!(
            "column numbers start at 1 in '{context}'"
        )));
    }
    Ok(n - 1)
}

/// Parse a comma-separated list of 1-based column numbers.
pub fn parse_columns(text: &str) -> Result<ColumnSpec> {
    let mut columns = Vec::new();
    for part in text.split(',') {
        if part.trim().is_empty() {
            return Err(T2tError::config(format!("empty column number in '{text}'")));
        }
        columns.push(parse_column_number(part, text)?);
    }
    ColumnSpec::new(columns)
}

/// Build the typed predicate for an operator symbol and raw query text.
fn build_predicate(op: &str, query: &str, context: &str) -> Result<Predicate> {
    let bad_query = |e: crate::error::CoercionError| {
        T2tError::config(format!("{e} in filter '{context}'"))
    };
    let number = || to_number(query).map_err(bad_query);

    let predicate = match op {
        "=" => Predicate::StrEq(query.to_string()),
        "!=" => Predicate::StrNe(query.to_string()),
        ":" => Predicate::Contains(query.to_string()),
        "!:" => Predicate::NotContains(query.to_string()),
        ">" => Predicate::Gt(number()?),
        ">=" => Predicate::Ge(number()?),
        "<" => Predicate::Lt(number()?),
        "<=" => Predicate::Le(number()?),
        "i=" => Predicate::IntEq(to_int(query).map_err(bad_query)?),
        "i!=" => Predicate::IntNe(to_int(query).map_err(bad_query)?),
        "f=" => Predicate::FloatEq(to_float(query).map_err(bad_query)?),
        "f!=" => Predicate::FloatNe(to_float(query).map_err(bad_query)?),
        _ => {
            return Err(T2tError::config(format!(
                "unknown operator '{op}' in filter '{context}'"
            )));
        }
    };
    Ok(predicate)
}

/// Parse one filter of the form `[+|!|-]col<N><op><query>`.
pub fn parse_filter(text: &str) -> Result<FilterCriterion> {
    let (polarity, rest) = match text.chars().next() {
        Some('+') => (Polarity::Include, &text[1..]),
        Some('!') | Some('-') => (Polarity::Exclude, &text[1..]),
        _ => (Polarity::Include, text),
    };

    let rest = rest
        .strip_prefix("col")
        .ok_or_else(|| T2tError::config(format!("filter '{text}' must start with col<N>")))?;

    let digits = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if digits == 0 {
        return Err(T2tError::config(format!(
            "filter '{text}' is missing a column number"
        )));
    }
    let column = parse_column_number(&rest[..digits], text)?;
    let rest = &rest[digits..];

    let op = OPERATORS
        .iter()
        .find(|op| rest.starts_with(*op))
        .ok_or_else(|| T2tError::config(format!("filter '{text}' has no valid operator")))?;
    let query = &rest[op.len()..];

    let predicate = build_predicate(op, query, text)?;
    Ok(FilterCriterion {
        column,
        predicate,
        polarity,
    })
}

/// Parse every filter and split them into inclusion and exclusion sets.
pub fn parse_filters<I, S>(texts: I) -> Result<FilterSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .map(|t| parse_filter(t.as_ref()))
        .collect::<Result<Vec<_>>>()
        .map(FilterSet::from_iter)
}

/// Parse `<verb>:<extent>`. An all-digit extent is a line count, any other
/// single character is a prefix.
pub fn parse_header_action(text: &str) -> Result<HeaderAction> {
    let (verb, extent) = text.split_once(':').ok_or_else(|| {
        T2tError::config(format!(
            "header action '{text}' must look like <verb>:<count|char>"
        ))
    })?;
    let verb: HeaderVerb = verb.trim().parse()?;

    if !extent.is_empty() && extent.chars().all(|c| c.is_ascii_digit()) {
        let n: usize = extent
            .parse()
            .map_err(|_| T2tError::config(format!("invalid line count in '{text}'")))?;
        return HeaderAction::count(verb, n);
    }

    let mut chars = extent.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(HeaderAction::prefix(verb, c)),
        _ => Err(T2tError::config(format!(
            "header extent in '{text}' must be a line count or a single character"
        ))),
    }
}

/// Parse a list of header actions, keeping their order.
pub fn parse_header_actions<I, S>(texts: I) -> Result<Vec<HeaderAction>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .map(|t| parse_header_action(t.as_ref()))
        .collect()
}
