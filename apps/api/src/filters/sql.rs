use sqlx::{Postgres, QueryBuilder};

use crate::filters::date_range::{Comparison, PredicateSink};

/// Writes range predicates into a sqlx [`QueryBuilder`] as
/// ` AND <column> <op> $n::timestamptz`.
///
/// Column names are trusted identifiers chosen by call sites, never request
/// input; only the bound value comes from the client. Values are bound as
/// text and cast so they compare against timestamp columns server-side.
pub struct QueryBuilderSink<'a, 'args> {
    builder: &'a mut QueryBuilder<'args, Postgres>,
}

impl<'a, 'args> QueryBuilderSink<'a, 'args> {
    pub fn new(builder: &'a mut QueryBuilder<'args, Postgres>) -> Self {
        Self { builder }
    }
}

impl PredicateSink for QueryBuilderSink<'_, '_> {
    fn push_predicate(&mut self, column: &str, cmp: Comparison, value: &str) {
        self.builder
            .push(" AND ")
            .push(column)
            .push(" ")
            .push(cmp.sql())
            .push(" ");
        self.builder.push_bind(value.to_owned());
        self.builder.push("::timestamptz");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::date_range::apply_date_range;

    #[test]
    fn test_predicates_render_with_placeholders_and_cast() {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM comments WHERE 1=1");
        let mut sink = QueryBuilderSink::new(&mut qb);
        apply_date_range(
            &mut sink,
            "created_at",
            Some("2024-01-01"),
            Some("2024-03-10"),
        )
        .unwrap();

        assert_eq!(
            qb.sql(),
            "SELECT * FROM comments WHERE 1=1 \
             AND created_at >= $1::timestamptz AND created_at < $2::timestamptz"
        );
    }

    #[test]
    fn test_no_bounds_leaves_query_untouched() {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM comments WHERE 1=1");
        let mut sink = QueryBuilderSink::new(&mut qb);
        apply_date_range(&mut sink, "created_at", None, None).unwrap();

        assert_eq!(qb.sql(), "SELECT * FROM comments WHERE 1=1");
    }

    #[test]
    fn test_timestamp_end_renders_lte() {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM comments WHERE 1=1");
        let mut sink = QueryBuilderSink::new(&mut qb);
        apply_date_range(&mut sink, "created_at", None, Some("2024-03-10T15:30:00Z")).unwrap();

        assert!(qb.sql().contains("created_at <= $1::timestamptz"));
    }
}
