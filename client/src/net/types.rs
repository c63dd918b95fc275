//! Wire DTOs exchanged with the trips API.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON so serde round-trips stay
//! lossless. Timestamps are RFC 3339 strings on the wire and `OffsetDateTime`
//! in memory.

#[cfg(test)]
#[path = "types_test.rs"]
pub(crate) mod types_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The caller's relationship to a trip as reported by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Driver,
    Passenger,
}

/// Driver contact summary embedded in a trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A rider who has joined a trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A published trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub from: String,
    pub to: String,
    #[serde(with = "time::serde::rfc3339")]
    pub departure_time: OffsetDateTime,
    pub max_passengers: u32,
    pub current_passengers: u32,
    pub price_per_person: f64,
    #[serde(default)]
    pub description: String,
    pub driver_id: String,
    pub driver: Driver,
    /// Absent when the caller is neither driver nor passenger.
    #[serde(default)]
    pub user_role: Option<UserRole>,
    #[serde(default)]
    pub passengers: Vec<Passenger>,
}

impl Trip {
    /// Occupancy has reached capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.current_passengers >= self.max_passengers
    }

    /// Seats still open, zero when full or overbooked.
    #[must_use]
    pub fn seats_left(&self) -> u32 {
        self.max_passengers.saturating_sub(self.current_passengers)
    }

    /// Apply a confirmed join by the current user: one more seat taken and the
    /// caller is now a passenger.
    pub fn record_join(&mut self) {
        self.current_passengers = self.current_passengers.saturating_add(1);
        self.user_role = Some(UserRole::Passenger);
    }
}

/// Editable trip fields sent to `PUT /api/trips/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripUpdate {
    pub from: String,
    pub to: String,
    #[serde(with = "time::serde::rfc3339")]
    pub departure_time: OffsetDateTime,
    pub max_passengers: u32,
    pub price_per_person: f64,
    pub description: String,
}

/// The signed-in user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Error body convention of the trips API.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
