use super::*;
use crate::net::types::types_test::sample_trip;

fn criteria(from: &str) -> SearchCriteria {
    SearchCriteria { from: from.to_owned(), ..SearchCriteria::default() }
}

#[test]
fn begin_search_marks_loading_and_clears_error() {
    let mut state = TripsState { error: Some("boom".to_owned()), ..TripsState::default() };
    let seq = state.begin_search(criteria("Mu"));
    assert_eq!(seq, 1);
    assert!(state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.criteria, Some(criteria("Mu")));
}

#[test]
fn finish_search_stores_latest_results() {
    let mut state = TripsState::default();
    let seq = state.begin_search(criteria("Mu"));
    assert!(state.finish_search(seq, Ok(vec![sample_trip()])));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn stale_results_are_dropped() {
    let mut state = TripsState::default();
    let first = state.begin_search(criteria("Mu"));
    let second = state.begin_search(criteria("Mum"));

    assert!(!state.finish_search(first, Ok(vec![sample_trip()])));
    assert!(state.items.is_empty());
    assert!(state.loading);

    assert!(state.finish_search(second, Ok(Vec::new())));
    assert!(!state.loading);
}

#[test]
fn failed_search_keeps_previous_items() {
    let mut state = TripsState::default();
    let seq = state.begin_search(criteria("Mu"));
    state.finish_search(seq, Ok(vec![sample_trip()]));

    let seq = state.begin_search(criteria("Mum"));
    state.finish_search(seq, Err("list trips failed: 500".to_owned()));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("list trips failed: 500"));
}

#[test]
fn abandon_search_only_clears_loading_for_latest() {
    let mut state = TripsState::default();
    let first = state.begin_search(criteria("Mu"));
    let second = state.begin_search(criteria("Mum"));
    state.abandon_search(first);
    assert!(state.loading);
    state.abandon_search(second);
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn replace_and_remove_target_by_id() {
    let mut state = TripsState { items: vec![sample_trip()], ..TripsState::default() };

    let mut edited = sample_trip();
    edited.to = "Nashik".to_owned();
    state.replace(edited);
    assert_eq!(state.items[0].to, "Nashik");

    let mut unknown = sample_trip();
    unknown.id = "t-404".to_owned();
    state.replace(unknown);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "t-1");

    state.remove("t-1");
    assert!(state.items.is_empty());
}

#[test]
fn live_search_leaves_loading_and_error_alone() {
    let mut state = TripsState { error: Some("boom".to_owned()), ..TripsState::default() };
    let seq = state.begin_live_search(criteria("De"));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("boom"));
    assert_eq!(state.criteria, Some(criteria("De")));

    assert!(state.finish_search(seq, Ok(vec![sample_trip()])));
    assert_eq!(state.error, None);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn live_search_supersedes_pending_submit() {
    let mut state = TripsState::default();
    let submit = state.begin_search(criteria("Mu"));
    let live = state.begin_live_search(criteria("Mum"));
    assert!(state.loading);

    assert!(!state.finish_search(submit, Ok(Vec::new())));
    assert!(state.finish_search(live, Ok(vec![sample_trip()])));
    assert!(!state.loading);
}

#[test]
fn refreshed_results_update_trip_by_id() {
    let mut state = TripsState::default();
    let seq = state.begin_search(criteria("Mu"));
    state.finish_search(seq, Ok(vec![sample_trip()]));
    assert_eq!(state.get("t-1").map(|t| t.current_passengers), Some(1));

    let mut refreshed = sample_trip();
    refreshed.current_passengers = 3;
    refreshed.price_per_person = 500.0;
    let seq = state.begin_live_search(criteria("Mum"));
    state.finish_search(seq, Ok(vec![refreshed.clone()]));
    assert_eq!(state.get("t-1"), Some(&refreshed));
    assert_eq!(state.get("t-404"), None);
}
