use super::*;

pub(crate) fn sample_trip_json() -> serde_json::Value {
    serde_json::json!({
        "id": "t-1",
        "from": "Mumbai",
        "to": "Pune",
        "departureTime": "2026-10-20T09:30:00+05:30",
        "maxPassengers": 3,
        "currentPassengers": 1,
        "pricePerPerson": 450.0,
        "description": "AC sedan, one bag each",
        "driverId": "u-driver",
        "driver": { "name": "Asha", "phone": "9876543210" },
        "userRole": "driver",
        "passengers": [{
            "id": "u-2",
            "name": "Ravi",
            "phone": "919812345678",
            "email": "ravi@example.com",
            "createdAt": "2026-10-18T08:00:00Z"
        }]
    })
}

pub(crate) fn sample_trip() -> Trip {
    serde_json::from_value(sample_trip_json()).unwrap()
}

#[test]
fn trip_deserializes_camel_case_payload() {
    let trip: Trip = serde_json::from_value(sample_trip_json()).unwrap();
    assert_eq!(trip.id, "t-1");
    assert_eq!(trip.max_passengers, 3);
    assert_eq!(trip.current_passengers, 1);
    assert_eq!(trip.driver_id, "u-driver");
    assert_eq!(trip.user_role, Some(UserRole::Driver));
    assert_eq!(trip.passengers.len(), 1);
    assert_eq!(trip.passengers[0].phone.as_deref(), Some("919812345678"));
    assert_eq!(trip.departure_time.hour(), 9);
    assert_eq!(trip.departure_time.minute(), 30);
}

#[test]
fn trip_tolerates_missing_role_and_passengers() {
    let mut raw = sample_trip_json();
    let obj = raw.as_object_mut().unwrap();
    obj.remove("userRole");
    obj.remove("passengers");
    obj.remove("description");
    let trip: Trip = serde_json::from_value(raw).unwrap();
    assert_eq!(trip.user_role, None);
    assert!(trip.passengers.is_empty());
    assert!(trip.description.is_empty());
}

#[test]
fn null_role_means_no_relationship() {
    let mut raw = sample_trip_json();
    raw["userRole"] = serde_json::Value::Null;
    let trip: Trip = serde_json::from_value(raw).unwrap();
    assert_eq!(trip.user_role, None);
}

#[test]
fn record_join_takes_exactly_one_seat() {
    let mut trip: Trip = serde_json::from_value(sample_trip_json()).unwrap();
    trip.user_role = None;
    trip.record_join();
    assert_eq!(trip.current_passengers, 2);
    assert_eq!(trip.user_role, Some(UserRole::Passenger));
    assert_eq!(trip.seats_left(), 1);
}

#[test]
fn is_full_when_occupancy_reaches_capacity() {
    let mut trip: Trip = serde_json::from_value(sample_trip_json()).unwrap();
    assert!(!trip.is_full());
    trip.current_passengers = 3;
    assert!(trip.is_full());
    trip.current_passengers = 4;
    assert!(trip.is_full());
    assert_eq!(trip.seats_left(), 0);
}

#[test]
fn trip_update_serializes_camel_case() {
    let trip: Trip = serde_json::from_value(sample_trip_json()).unwrap();
    let update = TripUpdate {
        from: trip.from.clone(),
        to: trip.to.clone(),
        departure_time: trip.departure_time,
        max_passengers: 4,
        price_per_person: 500.0,
        description: String::new(),
    };
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value["maxPassengers"], 4);
    assert_eq!(value["pricePerPerson"], 500.0);
    assert_eq!(value["departureTime"], "2026-10-20T09:30:00+05:30");
}
