//! Role and action gating for a trip as seen by the current user.
//!
//! The server's explicit role field wins. A driver-id match only decides
//! ownership when the server sent no role at all, so there is exactly one
//! place where ownership is derived.

#[cfg(test)]
#[path = "trip_role_test.rs"]
mod trip_role_test;

use crate::net::types::{Trip, UserRole};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TripRole {
    Owner,
    Passenger,
    Stranger,
}

impl TripRole {
    #[must_use]
    pub fn derive(trip: &Trip, current_user_id: Option<&str>) -> Self {
        match trip.user_role {
            Some(UserRole::Driver) => Self::Owner,
            Some(UserRole::Passenger) => Self::Passenger,
            None if current_user_id.is_some_and(|id| id == trip.driver_id) => Self::Owner,
            None => Self::Stranger,
        }
    }

    #[must_use]
    pub fn badge(self) -> Option<&'static str> {
        match self {
            Self::Owner => Some("Your trip"),
            Self::Passenger => Some("Joined"),
            Self::Stranger => None,
        }
    }
}

/// Everything the card needs to decide which controls to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TripAccess {
    pub role: TripRole,
    pub is_full: bool,
    pub can_join: bool,
    /// Owner with at least one passenger to reach.
    pub can_contact: bool,
}

impl TripAccess {
    #[must_use]
    pub fn derive(trip: &Trip, current_user_id: Option<&str>) -> Self {
        let role = TripRole::derive(trip, current_user_id);
        let is_full = trip.is_full();
        Self {
            role,
            is_full,
            can_join: role == TripRole::Stranger && !is_full,
            can_contact: role == TripRole::Owner && !trip.passengers.is_empty(),
        }
    }

    #[must_use]
    pub fn is_owner(self) -> bool {
        self.role == TripRole::Owner
    }

    #[must_use]
    pub fn is_passenger(self) -> bool {
        self.role == TripRole::Passenger
    }
}

/// How an accepted join click is carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinPath {
    /// A parent callback makes the request; the seat is counted locally right away.
    Delegated,
    /// The card calls the API and counts the seat once the server accepts.
    Direct,
}

/// Decide how to join `trip`, counting the seat up front on the delegated path.
///
/// Returns `None` when the current user may not join.
pub fn begin_join(trip: &mut Trip, current_user_id: Option<&str>, has_callback: bool) -> Option<JoinPath> {
    if !TripAccess::derive(trip, current_user_id).can_join {
        return None;
    }
    if has_callback {
        trip.record_join();
        return Some(JoinPath::Delegated);
    }
    Some(JoinPath::Direct)
}
