use super::*;
use crate::net::types::types_test::sample_trip;

#[test]
fn price_label_uses_rupees() {
    assert_eq!(price_label(450.0), "₹450");
    assert_eq!(price_label(99.5), "₹99.50");
}

#[test]
fn seats_label_counts_open_seats() {
    let mut trip = sample_trip();
    assert_eq!(seats_label(&trip), "2 of 3 left");
    trip.current_passengers = 3;
    assert_eq!(seats_label(&trip), "Full");
}

#[test]
fn passenger_count_label_pluralizes() {
    assert_eq!(passenger_count_label(1), "1 passenger");
    assert_eq!(passenger_count_label(3), "3 passengers");
}
