//! SQLite schema for the history store

/// Schema version for migrations
pub const SCHEMA_VERSION: u32 = 1;

/// SQLite schema definition
pub struct Schema;

impl Schema {
    /// Get the complete schema SQL
    pub fn create_tables() -> &'static str {
        r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Accounts mirrored from the backend (no credentials stored locally)
CREATE TABLE IF NOT EXISTS accounts (
    id INTEGER PRIMARY KEY,
    email TEXT UNIQUE NOT NULL,
    is_admin INTEGER NOT NULL DEFAULT 0,
    profile_picture_url TEXT,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_accounts_created_at ON accounts(created_at);

-- Completed predictions
CREATE TABLE IF NOT EXISTS prediction_history (
    id TEXT PRIMARY KEY,
    account_id INTEGER NOT NULL,
    account_email TEXT NOT NULL,
    prediction TEXT NOT NULL,
    confidence REAL NOT NULL,
    probabilities TEXT NOT NULL,
    model_name TEXT NOT NULL,
    image_type TEXT NOT NULL,
    cropped_image TEXT,
    created_at TEXT NOT NULL,
    FOREIGN KEY (account_id) REFERENCES accounts(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_history_account_id ON prediction_history(account_id);
CREATE INDEX IF NOT EXISTS idx_history_created_at ON prediction_history(created_at);
"#
    }

    /// Get migration SQL between two schema versions
    pub fn migration(from: u32, to: u32) -> Option<&'static str> {
        match (from, to) {
            // Add migrations here as the schema evolves
            // (1, 2) => Some("ALTER TABLE ..."),
            _ => None,
        }
    }
}
