//! `tel:`, `sms:` and `mailto:` deep links for contacting trip passengers.
//!
//! Message bodies mention the route and departure so the recipient knows
//! which ride the driver is writing about.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use url::form_urlencoded;

use crate::net::types::{Passenger, Trip};
use crate::util::dates::{clock_label, day_label};
use crate::util::phone::dial_string;

/// `tel:` link for a phone number.
#[must_use]
pub fn tel_href(phone: &str) -> String {
    format!("tel:{}", dial_string(phone))
}

/// `sms:` link addressing one or more numbers with a pre-filled body.
#[must_use]
pub fn sms_href<'a>(phones: impl IntoIterator<Item = &'a str>, body: &str) -> String {
    let targets = phones.into_iter().map(dial_string).collect::<Vec<_>>().join(",");
    format!("sms:{targets}?body={}", encode_component(body))
}

/// `mailto:` link with subject and body.
#[must_use]
pub fn mailto_href(email: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        encode_address(email.trim()),
        encode_component(subject),
        encode_component(body)
    )
}

fn ride_reference(trip: &Trip) -> String {
    format!(
        "our ride from {} to {} on {} at {}",
        trip.from,
        trip.to,
        day_label(trip.departure_time),
        clock_label(trip.departure_time)
    )
}

/// Body for a message to a single passenger.
#[must_use]
pub fn passenger_message(trip: &Trip, passenger: &Passenger) -> String {
    format!("Hi {}, this is {} about {}.", passenger.name, trip.driver.name, ride_reference(trip))
}

/// Body for a message to every passenger at once.
#[must_use]
pub fn group_message(trip: &Trip) -> String {
    format!("Hi everyone, this is {} about {}.", trip.driver.name, ride_reference(trip))
}

#[must_use]
pub fn email_subject(trip: &Trip) -> String {
    format!("Ride from {} to {} on {}", trip.from, trip.to, day_label(trip.departure_time))
}

#[must_use]
pub fn passenger_sms_href(trip: &Trip, passenger: &Passenger) -> Option<String> {
    let phone = passenger.phone.as_deref().filter(|p| !p.trim().is_empty())?;
    Some(sms_href([phone], &passenger_message(trip, passenger)))
}

#[must_use]
pub fn passenger_tel_href(passenger: &Passenger) -> Option<String> {
    let phone = passenger.phone.as_deref().filter(|p| !p.trim().is_empty())?;
    Some(tel_href(phone))
}

#[must_use]
pub fn passenger_mailto_href(trip: &Trip, passenger: &Passenger) -> Option<String> {
    let email = passenger.email.as_deref().filter(|e| !e.trim().is_empty())?;
    Some(mailto_href(email, &email_subject(trip), &passenger_message(trip, passenger)))
}

/// One SMS link addressed to every passenger with a phone number.
/// `None` when nobody has one.
#[must_use]
pub fn group_sms_href(trip: &Trip) -> Option<String> {
    let phones = trip
        .passengers
        .iter()
        .filter_map(|p| p.phone.as_deref())
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>();
    if phones.is_empty() {
        return None;
    }
    Some(sms_href(phones, &group_message(trip)))
}

/// Percent-encode a URI component with spaces as `%20`.
///
/// `form_urlencoded` writes spaces as `+` and encodes a literal `+` as `%2B`,
/// so swapping every remaining `+` is lossless.
/// Percent-encode a mail address, leaving the `@` readable.
fn encode_address(raw: &str) -> String {
    encode_component(raw).replace("%40", "@")
}

fn encode_component(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
