//! Usage statistics for the admin dashboard

use serde::{Deserialize, Serialize};

/// One entry of the recent sign-up list.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentSignup {
    pub email: String,
    pub created_at: String,
}

/// Account counts by tier and sign-up window.
///
/// Windows are UTC civil dates: `today` is the current date, `week` is
/// the 7 days before today's midnight, `month` starts at the first of
/// the current month. `recent_signups` holds at most the 10 newest
/// accounts, newest first.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsageStats {
    pub total_accounts: i64,
    pub admin_accounts: i64,
    pub regular_accounts: i64,
    pub accounts_today: i64,
    pub accounts_week: i64,
    pub accounts_month: i64,
    pub recent_signups: Vec<RecentSignup>,
}
