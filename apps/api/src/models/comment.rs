use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A learner comment on an idiom. `report_count` accumulates abuse reports;
/// `processed_at` is set once a moderator has handled the comment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CommentRow {
    pub id: Uuid,
    pub idiom_id: Uuid,
    pub user_id: Uuid,
    pub body: String,
    pub report_count: i32,
    pub processed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
