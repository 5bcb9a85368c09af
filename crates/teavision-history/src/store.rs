//! SQLite repository for predictions and account bookkeeping

use std::path::Path;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use teavision_domain::Account;

use crate::error::StoreResult;
use crate::record::HistoryRecord;
use crate::schema::{Schema, SCHEMA_VERSION};
use crate::stats::{RecentSignup, UsageStats};

/// Repository for prediction history and mirrored accounts.
pub struct HistoryStore {
    conn: rusqlite::Connection,
}

impl HistoryStore {
    /// Open (or create) a store at the given database path.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = rusqlite::Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Create an in-memory store (for testing).
    pub fn in_memory() -> StoreResult<Self> {
        let conn = rusqlite::Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize(&self) -> StoreResult<()> {
        let current_version = self.get_schema_version().unwrap_or(0);

        if current_version == 0 {
            self.conn.execute_batch(Schema::create_tables())?;
            self.set_schema_version(SCHEMA_VERSION)?;
        } else if current_version < SCHEMA_VERSION {
            for version in current_version..SCHEMA_VERSION {
                if let Some(migration) = Schema::migration(version, version + 1) {
                    self.conn.execute_batch(migration)?;
                }
            }
            self.set_schema_version(SCHEMA_VERSION)?;
        }

        Ok(())
    }

    fn get_schema_version(&self) -> Option<u32> {
        self.conn
            .query_row(
                "SELECT version FROM schema_version ORDER BY applied_at DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .ok()
    }

    fn set_schema_version(&self, version: u32) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [version],
        )?;
        Ok(())
    }

    // ==================== History Operations ====================

    /// Save a prediction record.
    pub fn record(&self, record: &HistoryRecord) -> StoreResult<()> {
        let probabilities_json = serde_json::to_string(&record.probabilities)?;

        self.conn.execute(
            r#"
            INSERT OR REPLACE INTO prediction_history
            (id, account_id, account_email, prediction, confidence, probabilities, model_name, image_type, cropped_image, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            rusqlite::params![
                record.id,
                record.account_id,
                record.account_email,
                record.prediction,
                record.confidence,
                probabilities_json,
                record.model_name,
                record.image_type,
                record.cropped_image,
                record.created_at,
            ],
        )?;

        Ok(())
    }

    /// All records for one account, newest first.
    pub fn for_account(&self, account_id: i64) -> StoreResult<Vec<HistoryRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, account_id, account_email, prediction, confidence, probabilities, model_name, image_type, cropped_image, created_at FROM prediction_history WHERE account_id = ?1 ORDER BY created_at DESC",
        )?;

        let records = stmt
            .query_map([account_id], Self::row_to_record)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Every stored record, newest first.
    pub fn all(&self) -> StoreResult<Vec<HistoryRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, account_id, account_email, prediction, confidence, probabilities, model_name, image_type, cropped_image, created_at FROM prediction_history ORDER BY created_at DESC",
        )?;

        let records = stmt
            .query_map([], Self::row_to_record)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Delete one record; returns whether a row existed.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM prediction_history WHERE id = ?1", [id])?;
        Ok(affected > 0)
    }

    /// Delete every record; returns how many rows were removed.
    pub fn clear_all(&self) -> StoreResult<usize> {
        let affected = self.conn.execute("DELETE FROM prediction_history", [])?;
        Ok(affected)
    }

    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<HistoryRecord> {
        let probabilities_json: String = row.get(5)?;

        Ok(HistoryRecord {
            id: row.get(0)?,
            account_id: row.get(1)?,
            account_email: row.get(2)?,
            prediction: row.get(3)?,
            confidence: row.get(4)?,
            // tolerate rows with a corrupt probabilities column
            probabilities: serde_json::from_str(&probabilities_json).unwrap_or_default(),
            model_name: row.get(6)?,
            image_type: row.get(7)?,
            cropped_image: row.get(8)?,
            created_at: row.get(9)?,
        })
    }

    // ==================== Account Operations ====================

    /// Insert or update a mirrored account. The original `created_at`
    /// survives updates; the usage statistics depend on it.
    pub fn upsert_account(&self, account: &Account) -> StoreResult<()> {
        let created_at = account
            .created_at
            .clone()
            .unwrap_or_else(|| Utc::now().to_rfc3339());

        self.conn.execute(
            r#"
            INSERT INTO accounts (id, email, is_admin, profile_picture_url, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id) DO UPDATE SET
                email = excluded.email,
                is_admin = excluded.is_admin,
                profile_picture_url = excluded.profile_picture_url
            "#,
            rusqlite::params![
                account.id,
                account.email,
                account.is_admin as i64,
                account.profile_picture_url,
                created_at,
            ],
        )?;

        Ok(())
    }

    /// All mirrored accounts, newest first.
    pub fn accounts(&self) -> StoreResult<Vec<Account>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, email, is_admin, profile_picture_url, created_at FROM accounts ORDER BY created_at DESC",
        )?;

        let accounts = stmt
            .query_map([], Self::row_to_account)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(accounts)
    }

    fn row_to_account(row: &rusqlite::Row) -> rusqlite::Result<Account> {
        let is_admin: i64 = row.get(2)?;
        Ok(Account {
            id: row.get(0)?,
            email: row.get(1)?,
            is_admin: is_admin != 0,
            profile_picture_url: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    // ==================== Usage Statistics ====================

    /// Aggregate account statistics as of `now`.
    ///
    /// Timestamps are RFC 3339 at a fixed UTC offset, so the windows
    /// compare as strings: today matches the date prefix, week and month
    /// compare against their midnight boundaries.
    pub fn usage_stats(&self, now: DateTime<Utc>) -> StoreResult<UsageStats> {
        let total_accounts: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM accounts", [], |row| row.get(0))?;
        let admin_accounts: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM accounts WHERE is_admin = 1",
            [],
            |row| row.get(0),
        )?;

        let today = now.date_naive();
        let accounts_today: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM accounts WHERE created_at LIKE ?1",
            [format!("{today}%")],
            |row| row.get(0),
        )?;

        let week_boundary = day_start(today - chrono::Duration::days(7));
        let accounts_week: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM accounts WHERE created_at >= ?1",
            [week_boundary.to_rfc3339()],
            |row| row.get(0),
        )?;

        let month_boundary = day_start(today.with_day0(0).unwrap_or(today));
        let accounts_month: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM accounts WHERE created_at >= ?1",
            [month_boundary.to_rfc3339()],
            |row| row.get(0),
        )?;

        let mut stmt = self.conn.prepare(
            "SELECT email, created_at FROM accounts ORDER BY created_at DESC LIMIT 10",
        )?;
        let recent_signups = stmt
            .query_map([], |row| {
                Ok(RecentSignup {
                    email: row.get(0)?,
                    created_at: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(UsageStats {
            total_accounts,
            admin_accounts,
            regular_accounts: total_accounts - admin_accounts,
            accounts_today,
            accounts_week,
            accounts_month,
            recent_signups,
        })
    }
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
