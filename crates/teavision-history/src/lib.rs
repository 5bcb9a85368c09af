//! Prediction history persistence
//!
//! SQLite-backed storage for completed predictions plus the account
//! bookkeeping the admin dashboard's usage statistics need:
//! - HistoryRecord: one stored prediction
//! - HistoryStore: versioned-schema repository with per-account and
//!   admin queries
//! - UsageStats: account counts by tier and sign-up window

pub mod error;
pub mod record;
pub mod schema;
pub mod stats;
pub mod store;

pub use error::*;
pub use record::*;
pub use schema::*;
pub use stats::*;
pub use store::*;
