use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A learner account. `xp` never decreases under normal operation and
/// `level` is recomputed from it on every award.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub display_name: String,
    pub xp: i32,
    pub level: i32,
    pub created_at: DateTime<Utc>,
}
