use serde::Deserialize;
use sqlx::{Postgres, QueryBuilder};

use crate::filters::date_range::{apply_date_range, FilterError};
use crate::filters::sql::QueryBuilderSink;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedCommentsParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Builds the moderation queue SELECT: reported, still-unprocessed comments,
/// optionally narrowed to a creation-date window, worst offenders first.
pub fn build_reported_queue_query(
    params: &ReportedCommentsParams,
) -> Result<QueryBuilder<'static, Postgres>, FilterError> {
    let mut qb: QueryBuilder<'static, Postgres> = QueryBuilder::new(
        "SELECT id, idiom_id, user_id, body, report_count, processed_at, created_at \
         FROM comments WHERE report_count > 0 AND processed_at IS NULL",
    );

    {
        let mut sink = QueryBuilderSink::new(&mut qb);
        apply_date_range(
            &mut sink,
            "created_at",
            params.start_date.as_deref(),
            params.end_date.as_deref(),
        )?;
    }

    qb.push(" ORDER BY report_count DESC, created_at ASC");
    Ok(qb)
}
