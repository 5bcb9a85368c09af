//! Role bitflags derived from the account at sign-in

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Bitflag-based roles controlling which areas a session may enter.
    ///
    /// Roles are derived from the signed-in account and can be combined
    /// with bitwise operations; the canned sets below cover the two
    /// account tiers the backend knows.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RoleFlags: u32 {
        /// View the signed-in dashboard
        const VIEW_DASHBOARD = 0b00000001;
        /// Run single and batch predictions
        const RUN_PREDICTIONS = 0b00000010;
        /// View own prediction history
        const VIEW_HISTORY = 0b00000100;
        /// Manage user accounts
        const MANAGE_USERS = 0b00001000;
        /// View all-user history and usage reports
        const VIEW_ADMIN_REPORTS = 0b00010000;
    }
}

impl Serialize for RoleFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RoleFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        RoleFlags::from_bits(bits)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid role bits: {}", bits)))
    }
}

impl RoleFlags {
    /// Regular member: dashboard, predictions, own history.
    pub const MEMBER: RoleFlags = RoleFlags::VIEW_DASHBOARD
        .union(RoleFlags::RUN_PREDICTIONS)
        .union(RoleFlags::VIEW_HISTORY);

    /// Administrator: everything a member has plus user management and
    /// all-user reports.
    pub const ADMINISTRATOR: RoleFlags = RoleFlags::MEMBER
        .union(RoleFlags::MANAGE_USERS)
        .union(RoleFlags::VIEW_ADMIN_REPORTS);

    /// The role set for an account tier.
    pub fn for_account(is_admin: bool) -> RoleFlags {
        if is_admin {
            RoleFlags::ADMINISTRATOR
        } else {
            RoleFlags::MEMBER
        }
    }

    #[inline]
    pub fn can_view_dashboard(&self) -> bool {
        self.contains(RoleFlags::VIEW_DASHBOARD)
    }

    #[inline]
    pub fn can_run_predictions(&self) -> bool {
        self.contains(RoleFlags::RUN_PREDICTIONS)
    }

    #[inline]
    pub fn can_view_history(&self) -> bool {
        self.contains(RoleFlags::VIEW_HISTORY)
    }

    #[inline]
    pub fn can_manage_users(&self) -> bool {
        self.contains(RoleFlags::MANAGE_USERS)
    }

    #[inline]
    pub fn can_view_admin_reports(&self) -> bool {
        self.contains(RoleFlags::VIEW_ADMIN_REPORTS)
    }
}

impl Default for RoleFlags {
    fn default() -> Self {
        RoleFlags::MEMBER
    }
}
