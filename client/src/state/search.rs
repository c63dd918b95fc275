//! Search form state, submit validation, and search intents.
//!
//! DESIGN
//! ======
//! The form emits two kinds of intent. `Live` carries an unvalidated snapshot
//! taken while the user types; `Submit` carries criteria that passed
//! validation. Parents can treat them differently without guessing which
//! path produced a call.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::collections::BTreeMap;

use time::Date;

use crate::util::dates;

/// Max-price ceiling sent on submit when the user leaves the field at zero.
pub const MAX_PRICE_FALLBACK: u32 = 10_000;

/// Minimum length of a typed place name before live search kicks in.
pub const LIVE_SEARCH_MIN_CHARS: usize = 2;

/// Criteria handed to the trips list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub from: String,
    pub to: String,
    pub departure_date: Option<Date>,
    /// Zero means no ceiling.
    pub max_price: u32,
}

/// What the form is asking its parent to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchIntent {
    /// Best-effort search while typing.
    Live(SearchCriteria),
    /// Explicit, validated submit.
    Submit(SearchCriteria),
}

impl SearchIntent {
    #[must_use]
    pub fn criteria(&self) -> &SearchCriteria {
        match self {
            Self::Live(criteria) | Self::Submit(criteria) => criteria,
        }
    }
}

/// Inputs that can carry a validation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SearchField {
    From,
    To,
    DepartureDate,
}

/// Field-scoped validation failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchFieldError {
    #[error("Enter a pickup location")]
    MissingFrom,
    #[error("Enter a destination")]
    MissingTo,
    #[error("Pickup and destination cannot be the same")]
    SameAsOrigin,
    #[error("Enter a valid date")]
    InvalidDate,
    #[error("Departure date cannot be in the past")]
    PastDate,
}

pub type FieldErrors = BTreeMap<SearchField, SearchFieldError>;

/// Raw form contents, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFields {
    pub from: String,
    pub to: String,
    /// `YYYY-MM-DD` from the date input, empty when unset.
    pub departure_date: String,
    pub max_price: u32,
}

impl SearchFields {
    /// Unvalidated view of the current form, used for live search.
    #[must_use]
    pub fn snapshot(&self) -> SearchCriteria {
        SearchCriteria {
            from: self.from.clone(),
            to: self.to.clone(),
            departure_date: dates::parse_input_date(&self.departure_date),
            max_price: self.max_price,
        }
    }

    /// Validate for submit.
    ///
    /// On success the criteria have trimmed place names and a non-zero max
    /// price (the fallback ceiling replaces zero).
    ///
    /// # Errors
    ///
    /// Returns every failing field with its message.
    pub fn validate(&self, today: Date) -> Result<SearchCriteria, FieldErrors> {
        let mut errors = FieldErrors::new();
        let from = self.from.trim();
        let to = self.to.trim();

        if from.is_empty() {
            errors.insert(SearchField::From, SearchFieldError::MissingFrom);
        }
        if to.is_empty() {
            errors.insert(SearchField::To, SearchFieldError::MissingTo);
        }
        if !from.is_empty() && !to.is_empty() && normalize_place(from) == normalize_place(to) {
            errors.insert(SearchField::To, SearchFieldError::SameAsOrigin);
        }

        let raw_date = self.departure_date.trim();
        let departure_date = if raw_date.is_empty() {
            None
        } else {
            match dates::parse_input_date(raw_date) {
                Some(date) if date < today => {
                    errors.insert(SearchField::DepartureDate, SearchFieldError::PastDate);
                    None
                }
                Some(date) => Some(date),
                None => {
                    errors.insert(SearchField::DepartureDate, SearchFieldError::InvalidDate);
                    None
                }
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        let max_price = if self.max_price == 0 { MAX_PRICE_FALLBACK } else { self.max_price };
        Ok(SearchCriteria { from: from.to_owned(), to: to.to_owned(), departure_date, max_price })
    }
}

/// Canonical form of a place name for origin/destination comparison:
/// lowercase, without commas or periods, trimmed.
#[must_use]
pub fn normalize_place(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ',' | '.'))
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Coerce the max-price input to a non-negative integer; empty or garbage is 0.
#[must_use]
pub fn parse_max_price(raw: &str) -> u32 {
    let Ok(value) = raw.trim().parse::<f64>() else {
        return 0;
    };
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let clamped = value.floor().min(f64::from(u32::MAX)) as u32;
    clamped
}

/// Whether an edit to a place field should schedule a live search.
#[must_use]
pub fn triggers_live_search(value: &str) -> bool {
    value.chars().count() >= LIVE_SEARCH_MIN_CHARS
}
