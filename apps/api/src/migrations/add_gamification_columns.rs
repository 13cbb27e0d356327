use super::Migration;

/// XP/level columns on users, plus the moderation columns on comments.
/// Every statement carries an existence guard so re-applying is a no-op.
pub const ADD_GAMIFICATION_COLUMNS: Migration = Migration {
    id: 20240418101500,
    name: "20240418101500-add-gamification-columns",
    forward: &[
        "ALTER TABLE users ADD COLUMN IF NOT EXISTS xp INTEGER NOT NULL DEFAULT 0",
        "ALTER TABLE users ADD COLUMN IF NOT EXISTS level INTEGER NOT NULL DEFAULT 1",
        "ALTER TABLE comments ADD COLUMN IF NOT EXISTS report_count INTEGER NOT NULL DEFAULT 0",
        "ALTER TABLE comments ADD COLUMN IF NOT EXISTS processed_at TIMESTAMPTZ",
    ],
    backward: &[
        "ALTER TABLE comments DROP COLUMN IF EXISTS processed_at",
        "ALTER TABLE comments DROP COLUMN IF EXISTS report_count",
        "ALTER TABLE users DROP COLUMN IF EXISTS level",
        "ALTER TABLE users DROP COLUMN IF EXISTS xp",
    ],
};
