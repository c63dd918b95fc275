use super::*;
use crate::net::types::types_test::sample_trip;
use time::macros::{datetime, offset};

#[test]
fn from_trip_prefills_every_field() {
    let draft = TripDraft::from_trip(&sample_trip());
    assert_eq!(draft.from, "Mumbai");
    assert_eq!(draft.to, "Pune");
    assert_eq!(draft.departure_time, "2026-10-20T09:30");
    assert_eq!(draft.max_passengers, "3");
    assert_eq!(draft.price_per_person, "450");
    assert_eq!(draft.description, "AC sedan, one bag each");
}

#[test]
fn unchanged_draft_reproduces_trip_fields() {
    let trip = sample_trip();
    let update = TripDraft::from_trip(&trip).to_update(trip.departure_time.offset()).unwrap();
    assert_eq!(update.from, trip.from);
    assert_eq!(update.to, trip.to);
    assert_eq!(update.departure_time, trip.departure_time);
    assert_eq!(update.max_passengers, trip.max_passengers);
    assert!((update.price_per_person - trip.price_per_person).abs() < f64::EPSILON);
}

#[test]
fn edited_values_are_trimmed_and_parsed() {
    let draft = TripDraft {
        from: " Pune ".to_owned(),
        to: "Goa".to_owned(),
        departure_time: "2026-11-01T06:15".to_owned(),
        max_passengers: " 4 ".to_owned(),
        price_per_person: "999.50".to_owned(),
        description: "  leaving early ".to_owned(),
    };
    let update = draft.to_update(offset!(+05:30)).unwrap();
    assert_eq!(update.from, "Pune");
    assert_eq!(update.departure_time, datetime!(2026-11-01 06:15 +05:30));
    assert_eq!(update.max_passengers, 4);
    assert!((update.price_per_person - 999.5).abs() < f64::EPSILON);
    assert_eq!(update.description, "leaving early");
}

#[test]
fn invalid_inputs_are_rejected() {
    let valid = TripDraft::from_trip(&sample_trip());
    let utc = offset!(UTC);

    let draft = TripDraft { to: " ".to_owned(), ..valid.clone() };
    assert_eq!(draft.to_update(utc), Err(DraftError::MissingPlace));

    let draft = TripDraft { departure_time: "soon".to_owned(), ..valid.clone() };
    assert_eq!(draft.to_update(utc), Err(DraftError::InvalidDeparture));

    let draft = TripDraft { max_passengers: "0".to_owned(), ..valid.clone() };
    assert_eq!(draft.to_update(utc), Err(DraftError::InvalidSeats));

    let draft = TripDraft { price_per_person: "-1".to_owned(), ..valid };
    assert_eq!(draft.to_update(utc), Err(DraftError::InvalidPrice));
}

#[test]
fn price_input_value_drops_zero_fraction() {
    assert_eq!(price_input_value(450.0), "450");
    assert_eq!(price_input_value(99.5), "99.50");
}
