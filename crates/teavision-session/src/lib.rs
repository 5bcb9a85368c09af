//! Session state for teavision hosts
//!
//! Sign-in state is an explicit value, never a global: a host creates a
//! [`SessionContext`] when the backend accepts a sign-in, passes it (or a
//! reference) to whatever needs identity, and consumes it on sign-out.
//! Route guards check the session's [`RoleFlags`] before entering
//! protected areas.

pub mod context;
pub mod guard;
pub mod roles;

pub use context::*;
pub use guard::*;
pub use roles::*;
