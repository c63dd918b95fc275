//! Trip search page: the search form above a list of trip cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It lists every trip on first load, re-queries
//! the list endpoint for each search intent, and keeps `TripsState` in step
//! with the cards as they report confirmed edits, joins and deletions. Cards
//! read their trip from `TripsState` by id, so a refreshed search reaches
//! cards that are already on screen.

#[cfg(test)]
#[path = "trips_test.rs"]
mod trips_test;

use leptos::prelude::*;

use crate::components::search_form::SearchForm;
use crate::components::trip_card::TripCard;
use crate::net::types::Trip;
use crate::state::auth::AuthState;
use crate::state::search::{SearchCriteria, SearchIntent};
use crate::state::trips::TripsState;

#[component]
pub fn TripsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let trips = expect_context::<RwSignal<TripsState>>();
    let current_user_id = Signal::derive(move || auth.with(AuthState::user_id));

    let run_search = move |criteria: SearchCriteria, live: bool| {
        let mut seq = 0;
        trips.update(|s| {
            seq = if live { s.begin_live_search(criteria.clone()) } else { s.begin_search(criteria.clone()) };
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::search_trips(&criteria).await;
            trips.update(|s| match result {
                Ok(items) => {
                    s.finish_search(seq, Ok(items));
                }
                Err(err) if live => {
                    log::warn!("live search failed: {err}");
                    s.abandon_search(seq);
                }
                Err(err) => {
                    s.finish_search(seq, Err(err.to_string()));
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (seq, live);
    };

    #[cfg(feature = "hydrate")]
    Effect::new(move || run_search(SearchCriteria::default(), false));

    let on_search = Callback::new(move |intent: SearchIntent| match intent {
        SearchIntent::Live(criteria) => run_search(criteria, true),
        SearchIntent::Submit(criteria) => run_search(criteria, false),
    });
    let on_removed = Callback::new(move |trip_id: String| trips.update(|s| s.remove(&trip_id)));
    let on_updated = Callback::new(move |trip: Trip| trips.update(|s| s.replace(trip)));

    view! {
        <div class="trips-page">
            <header class="trips-page__header">
                <h1 class="trips-page__title">"Find a ride"</h1>
                <span class="trips-page__user">
                    {move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()))}
                </span>
            </header>

            <SearchForm on_search=on_search is_loading=Signal::derive(move || trips.with(|s| s.loading))/>

            <Show when=move || trips.with(|s| s.error.is_some())>
                <p class="trips-page__error">{move || trips.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>

            <p class="trips-page__summary">{move || trips.with(results_summary)}</p>

            <div class="trips-page__list">
                <For
                    each=move || trips.with(|s| s.items.clone())
                    key=|trip| trip.id.clone()
                    children=move |trip: Trip| {
                        let id = trip.id.clone();
                        let latest = Memo::new(move |_| {
                            trips.with(|s| s.get(&id).cloned()).unwrap_or_else(|| trip.clone())
                        });
                        view! {
                            <TripCard
                                trip=latest
                                current_user_id=current_user_id
                                on_removed=on_removed
                                on_updated=on_updated
                            />
                        }
                    }
                />
            </div>
        </div>
    }
}

fn results_summary(state: &TripsState) -> String {
    if state.loading {
        return "Searching for trips...".to_owned();
    }
    let count = state.items.len();
    let route = state
        .criteria
        .as_ref()
        .filter(|c| !c.from.trim().is_empty() && !c.to.trim().is_empty())
        .map(|c| format!(" from {} to {}", c.from.trim(), c.to.trim()))
        .unwrap_or_default();
    match count {
        0 => format!("No trips found{route}."),
        1 => format!("1 trip{route}"),
        n => format!("{n} trips{route}"),
    }
}
