use chrono::NaiveDate;
use thiserror::Error;

/// Comparison operator of an appended range predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    GreaterEq,
    LessEq,
    Less,
}

impl Comparison {
    pub fn sql(self) -> &'static str {
        match self {
            Comparison::GreaterEq => ">=",
            Comparison::LessEq => "<=",
            Comparison::Less => "<",
        }
    }
}

/// Anything that can accept a `column <op> value` predicate.
///
/// The filter depends only on this capability, never on a concrete query
/// type. Production code plugs in [`crate::filters::sql::QueryBuilderSink`];
/// tests use a recording sink.
pub trait PredicateSink {
    fn push_predicate(&mut self, column: &str, cmp: Comparison, value: &str);
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid end date '{0}': expected YYYY-MM-DD")]
    InvalidEndDate(String),
}

/// Bounds at most this long are treated as date-only (`YYYY-MM-DD`);
/// anything longer is assumed to carry a time component.
const DATE_ONLY_LEN: usize = 10;

/// Appends zero, one, or two range predicates over `column` to `sink`.
///
/// A start bound becomes `column >= start`, passed through literally. An end
/// bound with a time component becomes `column <= end`, also literal. A
/// date-only end bound is widened to cover the whole named day: it becomes
/// `column < end + 1 day`, so `endDate=2024-03-10` matches everything up to
/// and including 2024-03-10 despite the strict comparator.
///
/// A date-only end bound that does not parse as `YYYY-MM-DD` is rejected
/// rather than compared against garbage. Start bounds and timestamp end
/// bounds are never parsed here; callers own their validity.
///
/// Bounds are compared as given, with no timezone adjustment; callers must
/// pre-normalize to the storage timezone.
pub fn apply_date_range(
    sink: &mut impl PredicateSink,
    column: &str,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(), FilterError> {
    if let Some(start) = start {
        sink.push_predicate(column, Comparison::GreaterEq, start);
    }

    if let Some(end) = end {
        if end.len() > DATE_ONLY_LEN {
            sink.push_predicate(column, Comparison::LessEq, end);
        } else {
            let next_day = NaiveDate::parse_from_str(end, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.succ_opt())
                .ok_or_else(|| FilterError::InvalidEndDate(end.to_string()))?;
            let bound = next_day.format("%Y-%m-%d").to_string();
            sink.push_predicate(column, Comparison::Less, &bound);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        predicates: Vec<(String, Comparison, String)>,
    }

    impl PredicateSink for RecordingSink {
        fn push_predicate(&mut self, column: &str, cmp: Comparison, value: &str) {
            self.predicates
                .push((column.to_string(), cmp, value.to_string()));
        }
    }

    fn build(start: Option<&str>, end: Option<&str>) -> RecordingSink {
        let mut sink = RecordingSink::default();
        apply_date_range(&mut sink, "created_at", start, end).unwrap();
        sink
    }

    #[test]
    fn test_start_only_adds_single_gte_clause() {
        let sink = build(Some("2024-03-01"), None);
        assert_eq!(
            sink.predicates,
            vec![(
                "created_at".to_string(),
                Comparison::GreaterEq,
                "2024-03-01".to_string()
            )]
        );
    }

    #[test]
    fn test_start_is_passed_through_without_normalization() {
        // The contract leaves start bounds untouched, even odd ones.
        let sink = build(Some("2024-03-01T08:00:00Z"), None);
        assert_eq!(sink.predicates[0].2, "2024-03-01T08:00:00Z");
        assert_eq!(sink.predicates[0].1, Comparison::GreaterEq);
    }

    #[test]
    fn test_date_only_end_becomes_strict_less_than_next_day() {
        let sink = build(None, Some("2024-03-10"));
        assert_eq!(
            sink.predicates,
            vec![(
                "created_at".to_string(),
                Comparison::Less,
                "2024-03-11".to_string()
            )]
        );
    }

    #[test]
    fn test_date_only_end_never_uses_lte() {
        let sink = build(None, Some("2024-03-10"));
        assert!(sink
            .predicates
            .iter()
            .all(|(_, cmp, _)| *cmp != Comparison::LessEq));
    }

    #[test]
    fn test_timestamp_end_is_literal_lte() {
        let sink = build(None, Some("2024-03-10T15:30:00Z"));
        assert_eq!(
            sink.predicates,
            vec![(
                "created_at".to_string(),
                Comparison::LessEq,
                "2024-03-10T15:30:00Z".to_string()
            )]
        );
    }

    #[test]
    fn test_no_bounds_is_a_noop() {
        let sink = build(None, None);
        assert!(sink.predicates.is_empty());
    }

    #[test]
    fn test_both_bounds_appends_start_then_end() {
        let sink = build(Some("2024-01-01"), Some("2024-03-10"));
        assert_eq!(sink.predicates.len(), 2);
        assert_eq!(sink.predicates[0].1, Comparison::GreaterEq);
        assert_eq!(sink.predicates[1].1, Comparison::Less);
        assert_eq!(sink.predicates[1].2, "2024-03-11");
    }

    #[test]
    fn test_end_of_month_rolls_over() {
        let sink = build(None, Some("2024-01-31"));
        assert_eq!(sink.predicates[0].2, "2024-02-01");
    }

    #[test]
    fn test_end_of_year_rolls_over() {
        let sink = build(None, Some("2024-12-31"));
        assert_eq!(sink.predicates[0].2, "2025-01-01");
    }

    #[test]
    fn test_leap_day_rolls_to_march_first() {
        let sink = build(None, Some("2024-02-29"));
        assert_eq!(sink.predicates[0].2, "2024-03-01");
    }

    #[test]
    fn test_unparseable_date_only_end_is_rejected() {
        let mut sink = RecordingSink::default();
        let err =
            apply_date_range(&mut sink, "created_at", None, Some("not-a-date")).unwrap_err();
        assert_eq!(err, FilterError::InvalidEndDate("not-a-date".to_string()));
        assert!(sink.predicates.is_empty());
    }

    #[test]
    fn test_nonexistent_calendar_day_is_rejected() {
        let mut sink = RecordingSink::default();
        let err =
            apply_date_range(&mut sink, "created_at", None, Some("2023-02-29")).unwrap_err();
        assert_eq!(err, FilterError::InvalidEndDate("2023-02-29".to_string()));
    }

    #[test]
    fn test_valid_start_survives_invalid_end() {
        // The start predicate is appended before the end bound is examined;
        // callers discard the whole query on error, so this is harmless.
        let mut sink = RecordingSink::default();
        let result = apply_date_range(&mut sink, "created_at", Some("2024-01-01"), Some("junk"));
        assert!(result.is_err());
        assert_eq!(sink.predicates.len(), 1);
    }
}
