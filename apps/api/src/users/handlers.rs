use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::state::AppState;
use crate::users::level::level_for_xp;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub display_name: String,
}

/// POST /api/v1/users
pub async fn handle_create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserRow>), AppError> {
    let display_name = req.display_name.trim();
    if display_name.is_empty() {
        return Err(AppError::Validation("displayName is required".to_string()));
    }

    let user = sqlx::query_as::<_, UserRow>(
        "INSERT INTO users (id, display_name) VALUES ($1, $2) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(display_name)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users/:id
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserRow>, AppError> {
    let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?;

    let user = user.ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;
    Ok(Json(user))
}

#[derive(Debug, Deserialize)]
pub struct AwardXpRequest {
    pub amount: i32,
}

/// POST /api/v1/users/:id/xp
///
/// XP only ever grows through this path; the level is recomputed from the
/// post-award total inside the same transaction.
pub async fn handle_award_xp(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AwardXpRequest>,
) -> Result<Json<UserRow>, AppError> {
    if req.amount <= 0 {
        return Err(AppError::Validation("amount must be positive".to_string()));
    }

    let mut tx = state.db.begin().await?;

    let new_xp: Option<i32> =
        sqlx::query_scalar("UPDATE users SET xp = xp + $1 WHERE id = $2 RETURNING xp")
            .bind(req.amount)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

    let new_xp = new_xp.ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;
    let new_level = level_for_xp(new_xp);

    let user = sqlx::query_as::<_, UserRow>(
        "UPDATE users SET level = $1 WHERE id = $2 RETURNING *",
    )
    .bind(new_level)
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    info!(
        "Awarded {} XP to user {id} (total {new_xp}, level {new_level})",
        req.amount
    );
    Ok(Json(user))
}
