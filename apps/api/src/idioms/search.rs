use serde::Deserialize;
use sqlx::{Postgres, QueryBuilder};

use crate::filters::date_range::{apply_date_range, FilterError};
use crate::filters::sql::QueryBuilderSink;

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdiomSearchParams {
    /// Free-text search term, matched by trigram similarity against hanzi,
    /// pinyin and the Vietnamese gloss.
    pub q: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Builds the idiom search SELECT.
///
/// With a search term the `%` similarity operator does the matching (it is
/// what the trigram GIN indices accelerate) and rows are ordered by the best
/// of the three per-column similarities. Without one, newest idioms first.
pub fn build_search_query(
    params: &IdiomSearchParams,
) -> Result<QueryBuilder<'static, Postgres>, FilterError> {
    let mut qb: QueryBuilder<'static, Postgres> = QueryBuilder::new(
        "SELECT id, hanzi, pinyin, vietnamese_meaning, explanation, created_at \
         FROM idioms WHERE 1=1",
    );

    let term = params.q.as_deref().map(str::trim).filter(|t| !t.is_empty());

    if let Some(term) = term {
        qb.push(" AND (hanzi % ");
        qb.push_bind(term.to_owned());
        qb.push(" OR pinyin % ");
        qb.push_bind(term.to_owned());
        qb.push(" OR vietnamese_meaning % ");
        qb.push_bind(term.to_owned());
        qb.push(")");
    }

    {
        let mut sink = QueryBuilderSink::new(&mut qb);
        apply_date_range(
            &mut sink,
            "created_at",
            params.start_date.as_deref(),
            params.end_date.as_deref(),
        )?;
    }

    if let Some(term) = term {
        qb.push(" ORDER BY GREATEST(similarity(hanzi, ");
        qb.push_bind(term.to_owned());
        qb.push("), similarity(pinyin, ");
        qb.push_bind(term.to_owned());
        qb.push("), similarity(vietnamese_meaning, ");
        qb.push_bind(term.to_owned());
        qb.push(")) DESC");
    } else {
        qb.push(" ORDER BY created_at DESC");
    }

    qb.push(" LIMIT ");
    qb.push_bind(page_size(params.limit));
    qb.push(" OFFSET ");
    qb.push_bind(params.offset.unwrap_or(0).max(0));

    Ok(qb)
}

fn page_size(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}
