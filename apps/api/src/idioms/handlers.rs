use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::idioms::search::{build_search_query, IdiomSearchParams};
use crate::models::idiom::IdiomRow;
use crate::state::AppState;

/// GET /api/v1/idioms/search
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<IdiomSearchParams>,
) -> Result<Json<Vec<IdiomRow>>, AppError> {
    let mut query = build_search_query(&params)?;
    let idioms = query
        .build_query_as::<IdiomRow>()
        .fetch_all(&state.db)
        .await?;
    Ok(Json(idioms))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIdiomRequest {
    pub hanzi: String,
    pub pinyin: String,
    pub vietnamese_meaning: String,
    pub explanation: Option<String>,
}

/// POST /api/v1/idioms
pub async fn handle_create(
    State(state): State<AppState>,
    Json(req): Json<CreateIdiomRequest>,
) -> Result<(StatusCode, Json<IdiomRow>), AppError> {
    let hanzi = req.hanzi.trim();
    let pinyin = req.pinyin.trim();
    let meaning = req.vietnamese_meaning.trim();
    if hanzi.is_empty() || pinyin.is_empty() || meaning.is_empty() {
        return Err(AppError::Validation(
            "hanzi, pinyin and vietnameseMeaning are required".to_string(),
        ));
    }

    let idiom = sqlx::query_as::<_, IdiomRow>(
        r#"
        INSERT INTO idioms (id, hanzi, pinyin, vietnamese_meaning, explanation)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, hanzi, pinyin, vietnamese_meaning, explanation, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(hanzi)
    .bind(pinyin)
    .bind(meaning)
    .bind(req.explanation.as_deref())
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(idiom)))
}

/// GET /api/v1/idioms/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<IdiomRow>, AppError> {
    let idiom: Option<IdiomRow> = sqlx::query_as(
        "SELECT id, hanzi, pinyin, vietnamese_meaning, explanation, created_at \
         FROM idioms WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&state.db)
    .await?;

    let idiom = idiom.ok_or_else(|| AppError::NotFound(format!("Idiom {id} not found")))?;
    Ok(Json(idiom))
}
