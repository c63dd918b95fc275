//! Modal dialog for editing a trip the current user drives.

use leptos::prelude::*;

use crate::net::types::{Trip, TripUpdate};
use crate::state::trip_edit::{DraftError, TripDraft};

#[component]
pub fn TripEditDialog(
    trip: Trip,
    #[prop(into)] busy: Signal<bool>,
    on_save: Callback<TripUpdate>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let offset = trip.departure_time.offset();
    let draft = RwSignal::new(TripDraft::from_trip(&trip));
    let error = RwSignal::new(None::<DraftError>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match draft.with_untracked(|d| d.to_update(offset)) {
            Ok(update) => {
                error.set(None);
                on_save.run(update);
            }
            Err(err) => error.set(Some(err)),
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog trip-edit" on:click=move |ev| ev.stop_propagation() on:submit=submit>
                <h2>"Edit Trip"</h2>
                <label class="dialog__label">
                    "From"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.with(|d| d.from.clone())
                        on:input=move |ev| draft.update(|d| d.from = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "To"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.with(|d| d.to.clone())
                        on:input=move |ev| draft.update(|d| d.to = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Departure"
                    <input
                        class="dialog__input"
                        type="datetime-local"
                        prop:value=move || draft.with(|d| d.departure_time.clone())
                        on:input=move |ev| draft.update(|d| d.departure_time = event_target_value(&ev))
                    />
                </label>
                <div class="dialog__row">
                    <label class="dialog__label">
                        "Seats"
                        <input
                            class="dialog__input"
                            type="number"
                            min="1"
                            step="1"
                            prop:value=move || draft.with(|d| d.max_passengers.clone())
                            on:input=move |ev| draft.update(|d| d.max_passengers = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Price per seat"
                        <input
                            class="dialog__input"
                            type="number"
                            min="0"
                            step="any"
                            prop:value=move || draft.with(|d| d.price_per_person.clone())
                            on:input=move |ev| draft.update(|d| d.price_per_person = event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input dialog__textarea"
                        rows="3"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </label>
                {move || error.get().map(|err| view! { <p class="dialog__error">{err.to_string()}</p> })}
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
