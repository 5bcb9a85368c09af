//! Route guards over protected areas

use crate::context::SessionContext;
use crate::roles::RoleFlags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A protected area of the application.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RouteGuard {
    Dashboard,
    Predictions,
    History,
    AdminHistory,
    AdminPanel,
}

impl RouteGuard {
    /// Roles a session must hold to pass this guard.
    pub fn required_roles(&self) -> RoleFlags {
        match self {
            RouteGuard::Dashboard => RoleFlags::VIEW_DASHBOARD,
            RouteGuard::Predictions => RoleFlags::RUN_PREDICTIONS,
            RouteGuard::History => RoleFlags::VIEW_HISTORY,
            RouteGuard::AdminHistory => RoleFlags::VIEW_ADMIN_REPORTS,
            RouteGuard::AdminPanel => RoleFlags::MANAGE_USERS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RouteGuard::Dashboard => "dashboard",
            RouteGuard::Predictions => "predictions",
            RouteGuard::History => "history",
            RouteGuard::AdminHistory => "admin history",
            RouteGuard::AdminPanel => "admin panel",
        }
    }
}

/// Why a guard refused entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    /// No session exists
    #[error("Signed-in session required")]
    SignedOut,

    /// Session exists but lacks a required role
    #[error("Access to the {area} requires a role the session does not have")]
    MissingRole { area: &'static str },
}

/// Guard check over an optional session, for hosts that keep
/// `Option<SessionContext>` between sign-ins.
pub fn authorize(session: Option<&SessionContext>, guard: RouteGuard) -> Result<(), GuardError> {
    match session {
        None => Err(GuardError::SignedOut),
        Some(context) => context.authorize(guard),
    }
}
