//! Current-user state for role-aware rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in happens elsewhere; this only mirrors `/api/auth/me` so trip cards
//! can tell the driver apart from everyone else.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    #[must_use]
    pub fn user_id(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.id.clone())
    }
}
