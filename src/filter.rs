//! Combining inclusion and exclusion criteria into a row decision.

use crate::criterion::{FilterCriterion, Polarity};
use crate::error::CellError;
use crate::record::Row;

/// Inclusion criteria (all must hold) and exclusion criteria (none may hold).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    include: Vec<FilterCriterion>,
    exclude: Vec<FilterCriterion>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a criterion to the side its polarity selects.
    pub fn push(&mut self, criterion: FilterCriterion) {
        match criterion.polarity {
            Polarity::Include => self.include.push(criterion),
            Polarity::Exclude => self.exclude.push(criterion),
        }
    }

    pub fn include(&self) -> &[FilterCriterion] {
        &self.include
    }

    pub fn exclude(&self) -> &[FilterCriterion] {
        &self.exclude
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// True iff every inclusion criterion holds and no exclusion criterion does.
    ///
    /// Stops at the first failing inclusion or first matching exclusion, so
    /// a malformed cell in a later criterion is only reported when reached.
    pub fn accept(&self, row: &Row<'_>) -> Result<bool, CellError> {
        for criterion in &self.include {
            if !criterion.evaluate(row)? {
                return Ok(false);
            }
        }
        for criterion in &self.exclude {
            if criterion.evaluate(row)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl FromIterator<FilterCriterion> for FilterSet {
    fn from_iter<I: IntoIterator<Item = FilterCriterion>>(iter: I) -> Self {
        let mut set = FilterSet::new();
        for criterion in iter {
            set.push(criterion);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criterion::{Number, Predicate};
    use crate::record::parse_line;

    fn eq(value: &str) -> Predicate {
        Predicate::StrEq(value.to_string())
    }

    #[test]
    fn test_empty_set_accepts_everything() {
        let set = FilterSet::new();
        assert!(set.is_empty());
        assert_eq!(set.accept(&parse_line("a\tb\n", "\t")), Ok(true));
        assert_eq!(set.accept(&parse_line("", "\t")), Ok(true));
    }

    #[test]
    fn test_inclusion_is_and() {
        let set: FilterSet = vec![
            FilterCriterion::include(0, eq("a")),
            FilterCriterion::include(1, eq("x")),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.accept(&parse_line("a\tx", "\t")), Ok(true));
        assert_eq!(set.accept(&parse_line("a\tb", "\t")), Ok(false));
        assert_eq!(set.accept(&parse_line("z\tx", "\t")), Ok(false));
    }

    #[test]
    fn test_exclusion_is_or() {
        let set: FilterSet = vec![
            FilterCriterion::exclude(0, eq("a")),
            FilterCriterion::exclude(1, eq("x")),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.accept(&parse_line("a\tb", "\t")), Ok(false));
        assert_eq!(set.accept(&parse_line("z\tx", "\t")), Ok(false));
        assert_eq!(set.accept(&parse_line("z\ty", "\t")), Ok(true));
    }

    #[test]
    fn test_exclusion_overrides_inclusion() {
        let set: FilterSet = vec![
            FilterCriterion::include(0, Predicate::Gt(Number::Int(0))),
            FilterCriterion::exclude(1, Predicate::Contains("bad".to_string())),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.include().len(), 1);
        assert_eq!(set.exclude().len(), 1);
        assert_eq!(set.accept(&parse_line("5\tgood", "\t")), Ok(true));
        assert_eq!(set.accept(&parse_line("5\tbadly", "\t")), Ok(false));
        assert_eq!(set.accept(&parse_line("0\tgood", "\t")), Ok(false));
    }

    #[test]
    fn test_short_circuit_skips_later_errors() {
        let set: FilterSet = vec![
            FilterCriterion::include(0, eq("keep")),
            FilterCriterion::include(1, Predicate::IntEq(1)),
        ]
        .into_iter()
        .collect();
        // Second criterion would fail on "oops", but the first already rejects.
        assert_eq!(set.accept(&parse_line("drop\toops", "\t")), Ok(false));
        assert!(set.accept(&parse_line("keep\toops", "\t")).is_err());
    }
}
