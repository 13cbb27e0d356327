use super::Migration;

/// Baseline schema: the idiom catalogue, learner accounts, and comments.
pub const CREATE_CORE_TABLES: Migration = Migration {
    id: 20240115120000,
    name: "20240115120000-create-core-tables",
    forward: &[
        "CREATE TABLE IF NOT EXISTS idioms (
            id UUID PRIMARY KEY,
            hanzi TEXT NOT NULL,
            pinyin TEXT NOT NULL,
            vietnamese_meaning TEXT NOT NULL,
            explanation TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
        "CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY,
            display_name TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
        "CREATE TABLE IF NOT EXISTS comments (
            id UUID PRIMARY KEY,
            idiom_id UUID NOT NULL REFERENCES idioms(id) ON DELETE CASCADE,
            user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            body TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    ],
    backward: &[
        "DROP TABLE IF EXISTS comments",
        "DROP TABLE IF EXISTS users",
        "DROP TABLE IF EXISTS idioms",
    ],
};
