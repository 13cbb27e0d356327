use super::Migration;

/// Trigram GIN indices backing fuzzy idiom search.
///
/// The backward list drops only the indices, never the pg_trgm extension:
/// the extension is shared and other schema objects may depend on it.
pub const ADD_TRIGRAM_SEARCH_INDICES: Migration = Migration {
    id: 20240302093000,
    name: "20240302093000-add-trigram-search-indices",
    forward: &[
        "CREATE EXTENSION IF NOT EXISTS pg_trgm",
        "CREATE INDEX IF NOT EXISTS idx_idioms_hanzi_trgm \
         ON idioms USING GIN (hanzi gin_trgm_ops)",
        "CREATE INDEX IF NOT EXISTS idx_idioms_pinyin_trgm \
         ON idioms USING GIN (pinyin gin_trgm_ops)",
        "CREATE INDEX IF NOT EXISTS idx_idioms_vietnamese_meaning_trgm \
         ON idioms USING GIN (vietnamese_meaning gin_trgm_ops)",
    ],
    backward: &[
        "DROP INDEX IF EXISTS idx_idioms_vietnamese_meaning_trgm",
        "DROP INDEX IF EXISTS idx_idioms_pinyin_trgm",
        "DROP INDEX IF EXISTS idx_idioms_hanzi_trgm",
    ],
};
