//! Editable copy of a trip backing the edit dialog.

#[cfg(test)]
#[path = "trip_edit_test.rs"]
mod trip_edit_test;

use time::UtcOffset;

use crate::net::types::{Trip, TripUpdate};
use crate::util::dates;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Pickup and destination are required")]
    MissingPlace,
    #[error("Enter a valid departure date and time")]
    InvalidDeparture,
    #[error("Seats must be a whole number of at least 1")]
    InvalidSeats,
    #[error("Price must be a number of zero or more")]
    InvalidPrice,
}

/// Raw input values, pre-filled from the trip being edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TripDraft {
    pub from: String,
    pub to: String,
    /// `datetime-local` value in the trip's own offset.
    pub departure_time: String,
    pub max_passengers: String,
    pub price_per_person: String,
    pub description: String,
}

impl TripDraft {
    #[must_use]
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            from: trip.from.clone(),
            to: trip.to.clone(),
            departure_time: dates::datetime_local_value(trip.departure_time),
            max_passengers: trip.max_passengers.to_string(),
            price_per_person: price_input_value(trip.price_per_person),
            description: trip.description.clone(),
        }
    }

    /// Build the update payload, pinning the departure to `offset`.
    ///
    /// # Errors
    ///
    /// Returns the first input that cannot be turned into a valid field.
    pub fn to_update(&self, offset: UtcOffset) -> Result<TripUpdate, DraftError> {
        let from = self.from.trim();
        let to = self.to.trim();
        if from.is_empty() || to.is_empty() {
            return Err(DraftError::MissingPlace);
        }
        let departure_time =
            dates::parse_datetime_local(&self.departure_time, offset).ok_or(DraftError::InvalidDeparture)?;
        let max_passengers = self
            .max_passengers
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|seats| *seats >= 1)
            .ok_or(DraftError::InvalidSeats)?;
        let price_per_person = self
            .price_per_person
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price >= 0.0)
            .ok_or(DraftError::InvalidPrice)?;

        Ok(TripUpdate {
            from: from.to_owned(),
            to: to.to_owned(),
            departure_time,
            max_passengers,
            price_per_person,
            description: self.description.trim().to_owned(),
        })
    }
}

/// Whole prices without a fraction, everything else to two places.
#[must_use]
pub fn price_input_value(price: f64) -> String {
    if price.fract().abs() < f64::EPSILON { format!("{price:.0}") } else { format!("{price:.2}") }
}
