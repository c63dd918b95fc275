//! Trip search form with live search while typing and a validated submit.
//!
//! DESIGN
//! ======
//! Typing two or more characters into a place field schedules a debounced
//! `SearchIntent::Live` with the form snapshot taken at that keystroke.
//! Pressing Search runs validation and emits `SearchIntent::Submit`. Submit and reset cancel any
//! pending live search so a late timer cannot overwrite their result.

use leptos::prelude::*;

use crate::state::search::{
    FieldErrors, SearchCriteria, SearchField, SearchFields, SearchIntent, parse_max_price, triggers_live_search,
};
use crate::util::dates;
use crate::util::debounce::Debounce;
#[cfg(feature = "hydrate")]
use crate::util::debounce::LIVE_SEARCH_DELAY;

#[component]
pub fn SearchForm(on_search: Callback<SearchIntent>, #[prop(into)] is_loading: Signal<bool>) -> impl IntoView {
    let fields = RwSignal::new(SearchFields::default());
    let errors = RwSignal::new(FieldErrors::new());
    let debounce = StoredValue::new(Debounce::<SearchCriteria>::default());

    let schedule_live_search = move || {
        let mut ticket = 0;
        let criteria = fields.with_untracked(SearchFields::snapshot);
        debounce.update_value(|d| ticket = d.schedule(criteria));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(LIVE_SEARCH_DELAY).await;
            if let Some(criteria) = debounce.try_update_value(|d| d.fire(ticket)).flatten() {
                on_search.run(SearchIntent::Live(criteria));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = ticket;
    };

    let clear_error = move |field: SearchField| {
        errors.update(|e| {
            e.remove(&field);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match fields.get_untracked().validate(dates::today()) {
            Ok(criteria) => {
                errors.set(FieldErrors::new());
                debounce.update_value(Debounce::cancel);
                on_search.run(SearchIntent::Submit(criteria));
            }
            Err(found) => errors.set(found),
        }
    };

    let on_reset = move |_| {
        debounce.update_value(Debounce::cancel);
        fields.set(SearchFields::default());
        errors.set(FieldErrors::new());
    };

    let error_for = move |field: SearchField| errors.with(|e| e.get(&field).map(ToString::to_string));
    let min_date = dates::format_input_date(dates::today());

    view! {
        <form class="search-form" on:submit=on_submit novalidate=true>
            <div class="search-form__row">
                <label class="search-form__field">
                    <span class="search-form__label">"From"</span>
                    <input
                        class="search-form__input"
                        class:search-form__input--invalid=move || error_for(SearchField::From).is_some()
                        type="text"
                        placeholder="Pickup city"
                        autocomplete="off"
                        prop:value=move || fields.with(|f| f.from.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            let live = triggers_live_search(&value);
                            fields.update(|f| f.from = value);
                            clear_error(SearchField::From);
                            if live {
                                schedule_live_search();
                            }
                        }
                    />
                    {move || error_for(SearchField::From).map(|msg| view! { <p class="search-form__error">{msg}</p> })}
                </label>
                <label class="search-form__field">
                    <span class="search-form__label">"To"</span>
                    <input
                        class="search-form__input"
                        class:search-form__input--invalid=move || error_for(SearchField::To).is_some()
                        type="text"
                        placeholder="Destination city"
                        autocomplete="off"
                        prop:value=move || fields.with(|f| f.to.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            let live = triggers_live_search(&value);
                            fields.update(|f| f.to = value);
                            clear_error(SearchField::To);
                            if live {
                                schedule_live_search();
                            }
                        }
                    />
                    {move || error_for(SearchField::To).map(|msg| view! { <p class="search-form__error">{msg}</p> })}
                </label>
            </div>
            <div class="search-form__row">
                <label class="search-form__field">
                    <span class="search-form__label">"Date (optional)"</span>
                    <input
                        class="search-form__input"
                        class:search-form__input--invalid=move || error_for(SearchField::DepartureDate).is_some()
                        type="date"
                        min=min_date
                        prop:value=move || fields.with(|f| f.departure_date.clone())
                        on:input=move |ev| {
                            fields.update(|f| f.departure_date = event_target_value(&ev));
                            clear_error(SearchField::DepartureDate);
                        }
                    />
                    {move || {
                        error_for(SearchField::DepartureDate)
                            .map(|msg| view! { <p class="search-form__error">{msg}</p> })
                    }}
                </label>
                <label class="search-form__field">
                    <span class="search-form__label">"Max price (optional)"</span>
                    <input
                        class="search-form__input"
                        type="number"
                        min="0"
                        step="1"
                        placeholder="Any"
                        prop:value=move || {
                            let price = fields.with(|f| f.max_price);
                            if price == 0 { String::new() } else { price.to_string() }
                        }
                        on:input=move |ev| {
                            let price = parse_max_price(&event_target_value(&ev));
                            fields.update(|f| f.max_price = price);
                        }
                    />
                </label>
            </div>
            <div class="search-form__actions">
                <button class="btn" type="button" on:click=on_reset>
                    "Reset"
                </button>
                <button class="btn btn--primary" type="submit" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Searching..." } else { "Search" }}
                </button>
            </div>
        </form>
    }
}
