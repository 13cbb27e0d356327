use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::comments::queue::{build_reported_queue_query, ReportedCommentsParams};
use crate::errors::AppError;
use crate::models::comment::CommentRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub user_id: Uuid,
    pub body: String,
}

/// POST /api/v1/idioms/:id/comments
pub async fn handle_create_comment(
    State(state): State<AppState>,
    Path(idiom_id): Path<Uuid>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentRow>), AppError> {
    let body = req.body.trim();
    if body.is_empty() {
        return Err(AppError::Validation("body is required".to_string()));
    }

    let idiom_exists: Option<Uuid> = sqlx::query_scalar("SELECT id FROM idioms WHERE id = $1")
        .bind(idiom_id)
        .fetch_optional(&state.db)
        .await?;
    if idiom_exists.is_none() {
        return Err(AppError::NotFound(format!("Idiom {idiom_id} not found")));
    }

    let user_exists: Option<Uuid> = sqlx::query_scalar("SELECT id FROM users WHERE id = $1")
        .bind(req.user_id)
        .fetch_optional(&state.db)
        .await?;
    if user_exists.is_none() {
        return Err(AppError::NotFound(format!("User {} not found", req.user_id)));
    }

    let comment = sqlx::query_as::<_, CommentRow>(
        r#"
        INSERT INTO comments (id, idiom_id, user_id, body)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(idiom_id)
    .bind(req.user_id)
    .bind(body)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// GET /api/v1/idioms/:id/comments
pub async fn handle_list_comments(
    State(state): State<AppState>,
    Path(idiom_id): Path<Uuid>,
) -> Result<Json<Vec<CommentRow>>, AppError> {
    let comments: Vec<CommentRow> =
        sqlx::query_as("SELECT * FROM comments WHERE idiom_id = $1 ORDER BY created_at DESC")
            .bind(idiom_id)
            .fetch_all(&state.db)
            .await?;
    Ok(Json(comments))
}

/// POST /api/v1/comments/:id/report
pub async fn handle_report_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CommentRow>, AppError> {
    let comment: Option<CommentRow> = sqlx::query_as(
        "UPDATE comments SET report_count = report_count + 1 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .fetch_optional(&state.db)
    .await?;

    let comment = comment.ok_or_else(|| AppError::NotFound(format!("Comment {id} not found")))?;
    info!(
        "Comment {id} reported ({} reports total)",
        comment.report_count
    );
    Ok(Json(comment))
}

/// POST /api/v1/comments/:id/process
///
/// Marks moderation as complete. Idempotent: re-processing keeps the
/// original timestamp.
pub async fn handle_process_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CommentRow>, AppError> {
    let comment: Option<CommentRow> = sqlx::query_as(
        "UPDATE comments SET processed_at = COALESCE(processed_at, now()) \
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .fetch_optional(&state.db)
    .await?;

    let comment = comment.ok_or_else(|| AppError::NotFound(format!("Comment {id} not found")))?;
    Ok(Json(comment))
}

/// GET /api/v1/comments/reported
pub async fn handle_reported_comments(
    State(state): State<AppState>,
    Query(params): Query<ReportedCommentsParams>,
) -> Result<Json<Vec<CommentRow>>, AppError> {
    let mut query = build_reported_queue_query(&params)?;
    let comments = query
        .build_query_as::<CommentRow>()
        .fetch_all(&state.db)
        .await?;
    Ok(Json(comments))
}
