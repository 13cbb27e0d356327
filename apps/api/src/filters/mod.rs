// Query-construction helpers shared by the idiom search and the comment
// moderation queue. The date-range filter itself is ORM-agnostic; the sqlx
// binding lives in `sql`.

pub mod date_range;
pub mod sql;
