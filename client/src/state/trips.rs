//! Trip-list state for the search results page.
//!
//! DESIGN
//! ======
//! Each search is tagged with a sequence number. Live searches fire while the
//! user types, so an older response can land after a newer one; results for
//! anything but the latest search are dropped.

#[cfg(test)]
#[path = "trips_test.rs"]
mod trips_test;

use crate::net::types::Trip;
use crate::state::search::SearchCriteria;

#[derive(Clone, Debug, Default)]
pub struct TripsState {
    pub items: Vec<Trip>,
    pub loading: bool,
    pub error: Option<String>,
    /// Criteria of the latest search, `None` before the first one.
    pub criteria: Option<SearchCriteria>,
    search_seq: u64,
}

impl TripsState {
    /// Start a submitted search and return its sequence number.
    pub fn begin_search(&mut self, criteria: SearchCriteria) -> u64 {
        self.loading = true;
        self.error = None;
        self.next_search(criteria)
    }

    /// Start a live search. The loading flag and error banner stay as they are.
    pub fn begin_live_search(&mut self, criteria: SearchCriteria) -> u64 {
        self.next_search(criteria)
    }

    fn next_search(&mut self, criteria: SearchCriteria) -> u64 {
        self.search_seq = self.search_seq.wrapping_add(1);
        self.criteria = Some(criteria);
        self.search_seq
    }

    /// Store results for `seq`. Returns `false` when the search was superseded.
    pub fn finish_search(&mut self, seq: u64, result: Result<Vec<Trip>, String>) -> bool {
        if seq != self.search_seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Stop waiting on `seq` without touching results or errors.
    pub fn abandon_search(&mut self, seq: u64) {
        if seq == self.search_seq {
            self.loading = false;
        }
    }

    #[must_use]
    pub fn get(&self, trip_id: &str) -> Option<&Trip> {
        self.items.iter().find(|t| t.id == trip_id)
    }

    /// Swap in the server's copy of a trip after an edit or join.
    pub fn replace(&mut self, trip: Trip) {
        if let Some(slot) = self.items.iter_mut().find(|t| t.id == trip.id) {
            *slot = trip;
        }
    }

    pub fn remove(&mut self, trip_id: &str) {
        self.items.retain(|t| t.id != trip_id);
    }
}
