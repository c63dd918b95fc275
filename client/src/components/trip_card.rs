//! Card for a single trip with role-gated join, edit, delete and contact
//! actions.
//!
//! DESIGN
//! ======
//! The card keeps a local copy of the trip. It follows the list's copy
//! whenever a search or a parent reconciliation changes it, and otherwise
//! applies what the server confirms: the returned trip after an edit, one
//! more seat after a join. A join handed to the parent's callback counts the
//! seat immediately. Nothing changes locally when a call fails; the user gets
//! an alert. Role and join eligibility are derived once per change of trip or
//! user.

#[cfg(test)]
#[path = "trip_card_test.rs"]
mod trip_card_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::components::passenger_list_dialog::PassengerListDialog;
use crate::components::trip_delete_dialog::TripDeleteDialog;
use crate::components::trip_edit_dialog::TripEditDialog;
use crate::net::types::{Trip, TripUpdate};
use crate::util::browser;
use crate::util::contact;
use crate::util::dates::{clock_label, day_label};
use crate::util::phone::format_phone;
use crate::util::trip_role::{JoinPath, TripAccess, TripRole, begin_join};

/// How long the "just updated" highlight stays on.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const HIGHLIGHT_DURATION: Duration = Duration::from_millis(600);
/// Exit animation length between a confirmed delete and removal.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const REMOVE_DELAY: Duration = Duration::from_millis(300);

#[component]
pub fn TripCard(
    /// The list's current copy of this trip.
    #[prop(into)]
    trip: Signal<Trip>,
    #[prop(into)] current_user_id: Signal<Option<String>>,
    on_removed: Callback<String>,
    /// Replaces the built-in join call. The seat is still counted locally.
    #[prop(optional)]
    on_join: Option<Callback<String>>,
    /// Told about every server-confirmed change to the trip.
    #[prop(optional)]
    on_updated: Option<Callback<Trip>>,
) -> impl IntoView {
    let source = trip;
    let trip = RwSignal::new(source.get_untracked());
    Effect::new(move |_| {
        let latest = source.get();
        trip.set(latest);
    });
    let access = Memo::new(move |_| trip.with(|t| current_user_id.with(|id| TripAccess::derive(t, id.as_deref()))));

    let busy = RwSignal::new(false);
    let show_edit = RwSignal::new(false);
    let show_delete = RwSignal::new(false);
    let show_passengers = RwSignal::new(false);
    let passengers_expanded = RwSignal::new(false);
    let highlight = RwSignal::new(false);
    let removing = RwSignal::new(false);

    let join = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let user_id = current_user_id.get_untracked();
        let mut path = None;
        trip.update(|t| path = begin_join(t, user_id.as_deref(), on_join.is_some()));
        let trip_id = trip.with_untracked(|t| t.id.clone());
        match (path, on_join) {
            (Some(JoinPath::Delegated), Some(on_join)) => on_join.run(trip_id),
            (Some(JoinPath::Direct), _) => join_direct(trip, trip_id, busy, highlight, on_updated),
            _ => {}
        }
    });

    let save_edit = Callback::new(move |update: TripUpdate| {
        busy.set(true);
        let trip_id = trip.with_untracked(|t| t.id.clone());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_trip(&trip_id, &update).await {
                Ok(saved) => {
                    trip.set(saved.clone());
                    show_edit.set(false);
                    flash(highlight);
                    if let Some(on_updated) = on_updated {
                        on_updated.run(saved);
                    }
                }
                Err(err) => browser::report_failure("update trip", &err.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (trip_id, update);
            busy.set(false);
        }
    });

    let confirm_delete = Callback::new(move |()| {
        busy.set(true);
        let trip_id = trip.with_untracked(|t| t.id.clone());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_trip(&trip_id).await {
                Ok(()) => {
                    show_delete.set(false);
                    removing.set(true);
                    gloo_timers::future::sleep(REMOVE_DELAY).await;
                    on_removed.run(trip_id);
                }
                Err(err) => {
                    browser::report_failure("delete trip", &err.to_string());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (trip_id, on_removed);
            busy.set(false);
        }
    });

    let contact_all = move |_| {
        if let Some(href) = trip.with_untracked(contact::group_sms_href) {
            browser::open_external(&href);
        }
    };

    view! {
        <article
            class="trip-card"
            class:trip-card--highlight=move || highlight.get()
            class:trip-card--removing=move || removing.get()
            class:trip-card--full=move || access.get().is_full
        >
            <header class="trip-card__header">
                <h3 class="trip-card__route">
                    <span class="trip-card__place">{move || trip.with(|t| t.from.clone())}</span>
                    <span class="trip-card__arrow" aria-hidden="true">"→"</span>
                    <span class="trip-card__place">{move || trip.with(|t| t.to.clone())}</span>
                </h3>
                {move || {
                    let role = access.get().role;
                    role.badge()
                        .map(|label| {
                            view! {
                                <span
                                    class="trip-card__badge"
                                    class:trip-card__badge--owner={role == TripRole::Owner}
                                >
                                    {label}
                                </span>
                            }
                        })
                }}
            </header>

            <dl class="trip-card__meta">
                <div class="trip-card__meta-item">
                    <dt>"Departs"</dt>
                    <dd>
                        {move || trip.with(|t| format!("{} at {}", day_label(t.departure_time), clock_label(t.departure_time)))}
                    </dd>
                </div>
                <div class="trip-card__meta-item">
                    <dt>"Price"</dt>
                    <dd>{move || trip.with(|t| price_label(t.price_per_person))}</dd>
                </div>
                <div class="trip-card__meta-item">
                    <dt>"Seats"</dt>
                    <dd class="trip-card__seats">{move || trip.with(seats_label)}</dd>
                </div>
            </dl>

            <Show when=move || trip.with(|t| !t.description.trim().is_empty())>
                <p class="trip-card__description">{move || trip.with(|t| t.description.clone())}</p>
            </Show>

            <p class="trip-card__driver">
                <span class="trip-card__driver-name">{move || trip.with(|t| t.driver.name.clone())}</span>
                {move || {
                    trip.with(|t| t.driver.phone.as_deref().map(format_phone))
                        .map(|phone| view! { <span class="trip-card__driver-phone">{phone}</span> })
                }}
            </p>

            <Show when=move || access.get().can_contact>
                <section class="trip-card__passengers">
                    <div class="trip-card__passengers-bar">
                        <button
                            class="btn btn--link"
                            on:click=move |_| passengers_expanded.update(|open| *open = !*open)
                        >
                            {move || {
                                let count = trip.with(|t| t.passengers.len());
                                if passengers_expanded.get() {
                                    "Hide passengers".to_owned()
                                } else {
                                    passenger_count_label(count)
                                }
                            }}
                        </button>
                        <button class="btn" on:click=move |_| show_passengers.set(true)>
                            "Contact details"
                        </button>
                        <button
                            class="btn"
                            disabled=move || trip.with(contact::group_sms_href).is_none()
                            on:click=contact_all
                        >
                            "Message all"
                        </button>
                    </div>
                    <Show when=move || passengers_expanded.get()>
                        <ul class="trip-card__passenger-list">
                            {move || {
                                trip.get()
                                    .passengers
                                    .into_iter()
                                    .map(|p| {
                                        let phone = p.phone.as_deref().map(format_phone).unwrap_or_default();
                                        view! {
                                            <li class="trip-card__passenger">
                                                <span>{p.name}</span>
                                                <span class="trip-card__passenger-phone">{phone}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </section>
            </Show>

            <footer class="trip-card__actions">
                <Show when=move || access.get().role == TripRole::Stranger>
                    <button
                        class="btn btn--primary trip-card__join"
                        disabled=move || !access.get().can_join || busy.get()
                        on:click=move |_| join.run(())
                    >
                        {move || {
                            if access.get().is_full {
                                "Trip full"
                            } else if busy.get() {
                                "Joining..."
                            } else {
                                "Join trip"
                            }
                        }}
                    </button>
                </Show>
                <Show when=move || access.get().is_passenger()>
                    <span class="trip-card__joined">"You're on this trip"</span>
                </Show>
                <Show when=move || access.get().is_owner()>
                    <button class="btn" disabled=move || busy.get() on:click=move |_| show_edit.set(true)>
                        "Edit"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=move |_| show_delete.set(true)
                    >
                        "Delete"
                    </button>
                </Show>
            </footer>

            <Show when=move || show_edit.get()>
                <TripEditDialog
                    trip=trip.get_untracked()
                    busy=busy
                    on_save=save_edit
                    on_cancel=Callback::new(move |()| show_edit.set(false))
                />
            </Show>
            <Show when=move || show_delete.get()>
                <TripDeleteDialog
                    route=trip.with_untracked(|t| format!("{} → {}", t.from, t.to))
                    busy=busy
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |()| show_delete.set(false))
                />
            </Show>
            <Show when=move || show_passengers.get()>
                <PassengerListDialog trip=trip on_close=Callback::new(move |()| show_passengers.set(false))/>
            </Show>
        </article>
    }
}

/// Join through the API and count the seat once the server accepts.
fn join_direct(
    trip: RwSignal<Trip>,
    trip_id: String,
    busy: RwSignal<bool>,
    highlight: RwSignal<bool>,
    on_updated: Option<Callback<Trip>>,
) {
    busy.set(true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::join_trip(&trip_id).await {
            Ok(()) => {
                trip.update(Trip::record_join);
                flash(highlight);
                if let Some(on_updated) = on_updated {
                    on_updated.run(trip.get_untracked());
                }
            }
            Err(err) => browser::report_failure("join trip", &err.to_string()),
        }
        busy.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (trip, trip_id, highlight, on_updated);
        busy.set(false);
    }
}

#[cfg(feature = "hydrate")]
fn flash(flag: RwSignal<bool>) {
    flag.set(true);
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(HIGHLIGHT_DURATION).await;
        let _ = flag.try_set(false);
    });
}

/// Price per seat in rupees.
fn price_label(price: f64) -> String {
    if price.fract().abs() < f64::EPSILON { format!("₹{price:.0}") } else { format!("₹{price:.2}") }
}

fn seats_label(trip: &Trip) -> String {
    if trip.is_full() {
        return "Full".to_owned();
    }
    format!("{} of {} left", trip.seats_left(), trip.max_passengers)
}

fn passenger_count_label(count: usize) -> String {
    match count {
        1 => "1 passenger".to_owned(),
        n => format!("{n} passengers"),
    }
}
