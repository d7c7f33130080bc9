//! Per-column predicates and numeric coercion.
//!
//! Each [`Predicate`] variant carries a query of the type its operator
//! family needs, so a string operator can never hold a number and vice
//! versa. Evaluation is a single exhaustive `match`.
//!
//! Filter grammar (as written on the command line):
//! ```text
//! [+|!|-]col<N><op><query>
//! ```
//!
//! | op    | meaning                          | query   |
//! |-------|----------------------------------|---------|
//! | `=`   | field equals query               | string  |
//! | `!=`  | field differs from query         | string  |
//! | `:`   | field contains query             | string  |
//! | `!:`  | field does not contain query     | string  |
//! | `>`   | field greater than query         | number  |
//! | `>=`  | field greater than or equal      | number  |
//! | `<`   | field less than query            | number  |
//! | `<=`  | field less than or equal         | number  |
//! | `i=`  | field equals query as integer    | integer |
//! | `i!=` | field differs from query as int  | integer |
//! | `f=`  | field equals query as float      | float   |
//! | `f!=` | field differs from query as float| float   |

use std::cmp::Ordering;
use std::fmt;

use crate::error::{CellError, CoercionError, NumericKind};
use crate::record::Row;

/// A numeric cell or query value.
///
/// Integers and floats compare with each other; an integer pair compares
/// exactly, any mixed pair compares as `f64`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}

/// Parse a field as an integer. Surrounding whitespace is ignored.
pub fn to_int(raw: &str) -> Result<i64, CoercionError> {
    raw.trim().parse().map_err(|_| CoercionError {
        raw: raw.to_string(),
        expected: NumericKind::Int,
    })
}

/// Parse a field as a float. Surrounding whitespace is ignored.
pub fn to_float(raw: &str) -> Result<f64, CoercionError> {
    raw.trim().parse().map_err(|_| CoercionError {
        raw: raw.to_string(),
        expected: NumericKind::Float,
    })
}

/// Parse a field as a number, preferring an integer when both parse.
pub fn to_number(raw: &str) -> Result<Number, CoercionError> {
    if let Ok(i) = to_int(raw) {
        return Ok(Number::Int(i));
    }
    to_float(raw).map(Number::Float).map_err(|_| CoercionError {
        raw: raw.to_string(),
        expected: NumericKind::Number,
    })
}

/// Operator together with its typed query.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    StrEq(String),
    StrNe(String),
    Contains(String),
    NotContains(String),
    Gt(Number),
    Ge(Number),
    Lt(Number),
    Le(Number),
    IntEq(i64),
    IntNe(i64),
    /// Exact IEEE-754 equality, no tolerance.
    FloatEq(f64),
    FloatNe(f64),
}

impl Predicate {
    /// The operator as written in the filter grammar.
    pub fn symbol(&self) -> &'static str {
        match self {
            Predicate::StrEq(_) => "=",
            Predicate::StrNe(_) => "!=",
            Predicate::Contains(_) => ":",
            Predicate::NotContains(_) => "!:",
            Predicate::Gt(_) => ">",
            Predicate::Ge(_) => ">=",
            Predicate::Lt(_) => "<",
            Predicate::Le(_) => "<=",
            Predicate::IntEq(_) => "i=",
            Predicate::IntNe(_) => "i!=",
            Predicate::FloatEq(_) => "f=",
            Predicate::FloatNe(_) => "f!=",
        }
    }

    /// Test a single field value.
    pub fn test(&self, value: &str) -> Result<bool, CoercionError> {
        let matched = match self {
            Predicate::StrEq(q) => value == q,
            Predicate::StrNe(q) => value != q,
            Predicate::Contains(q) => value.contains(q.as_str()),
            Predicate::NotContains(q) => !value.contains(q.as_str()),
            Predicate::Gt(q) => to_number(value)? > *q,
            Predicate::Ge(q) => to_number(value)? >= *q,
            Predicate::Lt(q) => to_number(value)? < *q,
            Predicate::Le(q) => to_number(value)? <= *q,
            Predicate::IntEq(q) => to_int(value)? == *q,
            Predicate::IntNe(q) => to_int(value)? != *q,
            Predicate::FloatEq(q) => to_float(value)? == *q,
            Predicate::FloatNe(q) => to_float(value)? != *q,
        };
        Ok(matched)
    }

    fn query(&self) -> String {
        match self {
            Predicate::StrEq(q)
            | Predicate::StrNe(q)
            | Predicate::Contains(q)
            | Predicate::NotContains(q) => q.clone(),
            Predicate::Gt(n) | Predicate::Ge(n) | Predicate::Lt(n) | Predicate::Le(n) => {
                n.to_string()
            }
            Predicate::IntEq(i) | Predicate::IntNe(i) => i.to_string(),
            Predicate::FloatEq(x) | Predicate::FloatNe(x) => format!("{x:?}"),
        }
    }
}

/// Whether a criterion keeps or drops the rows it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Include,
    Exclude,
}

/// One filter: a predicate applied to a zero-based column.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriterion {
    pub column: usize,
    pub predicate: Predicate,
    pub polarity: Polarity,
}

impl FilterCriterion {
    pub fn include(column: usize, predicate: Predicate) -> Self {
        Self {
            column,
            predicate,
            polarity: Polarity::Include,
        }
    }

    pub fn exclude(column: usize, predicate: Predicate) -> Self {
        Self {
            column,
            predicate,
            polarity: Polarity::Exclude,
        }
    }

    /// Evaluate the predicate against this criterion's column of `row`.
    ///
    /// Polarity is not applied here; see [`crate::filter::FilterSet::accept`].
    pub fn evaluate(&self, row: &Row<'_>) -> Result<bool, CellError> {
        let value = row.field(self.column)?;
        self.predicate
            .test(value)
            .map_err(|e| CellError::malformed(self.column, e))
    }
}

impl fmt::Display for FilterCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.polarity {
            Polarity::Include => '+',
            Polarity::Exclude => '!',
        };
        write!(
            f,
            "{prefix}col{}{}{}",
            self.column + 1,
            self.predicate.symbol(),
            self.predicate.query()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_line;

    fn eval(line: &str, column: usize, predicate: Predicate) -> Result<bool, CellError> {
        let row = parse_line(line, "\t");
        FilterCriterion::include(column, predicate).evaluate(&row)
    }

    #[test]
    fn test_to_number_prefers_int() {
        assert!(matches!(to_number("42"), Ok(Number::Int(42))));
        assert!(matches!(to_number("-7"), Ok(Number::Int(-7))));
        assert!(matches!(to_number("4.5"), Ok(Number::Float(x)) if x == 4.5));
        assert!(matches!(to_number("1e3"), Ok(Number::Float(x)) if x == 1000.0));
    }

    #[test]
    fn test_to_number_rejects_text() {
        let err = to_number("abc").unwrap_err();
        assert_eq!(err.raw, "abc");
        assert_eq!(err.expected, NumericKind::Number);
    }

    #[test]
    fn test_to_int_rejects_float_text() {
        assert!(to_int("3.0").is_err());
        assert_eq!(to_int(" 12 "), Ok(12));
    }

    #[test]
    fn test_number_cross_type_compare() {
        assert!(Number::Int(2) < Number::Float(2.5));
        assert!(Number::Float(3.0) == Number::Int(3));
        assert!(Number::Int(10) > Number::Int(9));
    }

    #[test]
    fn test_numeric_not_lexicographic() {
        assert_eq!(eval("10", 0, Predicate::Gt(Number::Int(9))), Ok(true));
        assert_eq!(eval("9", 0, Predicate::Lt(Number::Int(10))), Ok(true));
        assert_eq!(eval("10", 0, Predicate::Le(Number::Int(9))), Ok(false));
    }

    #[test]
    fn test_relational_with_float_query() {
        assert_eq!(eval("3", 0, Predicate::Ge(Number::Float(2.5))), Ok(true));
        assert_eq!(eval("2.5", 0, Predicate::Ge(Number::Float(2.5))), Ok(true));
        assert_eq!(eval("2.49", 0, Predicate::Gt(Number::Int(2))), Ok(true));
    }

    #[test]
    fn test_contains_is_substring() {
        assert_eq!(
            eval("apple pie", 0, Predicate::Contains("pie".to_string())),
            Ok(true)
        );
        assert_eq!(
            eval("apple pie", 0, Predicate::NotContains("pie".to_string())),
            Ok(false)
        );
        assert_eq!(
            eval("apple pie", 0, Predicate::StrEq("pie".to_string())),
            Ok(false)
        );
    }

    #[test]
    fn test_string_equality_is_literal() {
        assert_eq!(eval("a\tB", 1, Predicate::StrEq("B".to_string())), Ok(true));
        assert_eq!(eval("a\tB", 1, Predicate::StrEq("b".to_string())), Ok(false));
        assert_eq!(eval("a\tB", 1, Predicate::StrNe("b".to_string())), Ok(true));
    }

    #[test]
    fn test_int_equality() {
        assert_eq!(eval("4", 0, Predicate::IntEq(4)), Ok(true));
        assert_eq!(eval("04", 0, Predicate::IntEq(4)), Ok(true));
        assert_eq!(eval("4", 0, Predicate::IntNe(4)), Ok(false));
    }

    #[test]
    fn test_int_equality_rejects_float_cell() {
        assert_eq!(
            eval("4.0", 0, Predicate::IntEq(4)),
            Err(CellError::MalformedNumericCell {
                column: 0,
                raw: "4.0".to_string(),
                expected: NumericKind::Int,
            })
        );
    }

    #[test]
    fn test_float_equality_is_exact() {
        assert_eq!(eval("1.10", 0, Predicate::FloatEq(1.1)), Ok(true));
        assert_eq!(eval("1.1000001", 0, Predicate::FloatEq(1.1)), Ok(false));
        assert_eq!(eval("2", 0, Predicate::FloatNe(2.0)), Ok(false));
    }

    #[test]
    fn test_malformed_numeric_is_error_not_false() {
        let result = eval("n/a", 0, Predicate::Gt(Number::Int(0)));
        assert!(matches!(
            result,
            Err(CellError::MalformedNumericCell { column: 0, .. })
        ));
    }

    #[test]
    fn test_missing_column() {
        assert_eq!(
            eval("a\tb", 5, Predicate::StrEq("x".to_string())),
            Err(CellError::IndexOutOfRange { column: 5, len: 2 })
        );
    }

    #[test]
    fn test_display_uses_grammar() {
        let c = FilterCriterion::exclude(2, Predicate::Ge(Number::Float(1.5)));
        assert_eq!(c.to_string(), "!col3>=1.5");
        let c = FilterCriterion::include(0, Predicate::Contains("x y".to_string()));
        assert_eq!(c.to_string(), "+col1:x y");
    }
}
