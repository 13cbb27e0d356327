use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A studied idiom. Identity (`id`) is immutable; the content fields may be
/// edited. All three text columns are trigram-indexed for fuzzy search.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct IdiomRow {
    pub id: Uuid,
    /// Source-script text, e.g. 画蛇添足.
    pub hanzi: String,
    /// Phonetic transcription, e.g. "huà shé tiān zú".
    pub pinyin: String,
    /// Vietnamese gloss, e.g. "vẽ rắn thêm chân".
    pub vietnamese_meaning: String,
    pub explanation: Option<String>,
    pub created_at: DateTime<Utc>,
}
