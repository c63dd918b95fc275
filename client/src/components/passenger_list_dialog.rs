//! Roster of everyone on a trip with call, SMS and email shortcuts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the driver sees this. Each shortcut hands a pre-filled `tel:`, `sms:`
//! or `mailto:` link to the platform; nothing is sent from the app itself.

use leptos::prelude::*;

use crate::net::types::Trip;
use crate::util::browser;
use crate::util::contact;
use crate::util::dates::day_label;
use crate::util::phone::format_phone;

#[component]
pub fn PassengerListDialog(#[prop(into)] trip: Signal<Trip>, on_close: Callback<()>) -> impl IntoView {
    let message_all = move |_| {
        if let Some(href) = trip.with_untracked(contact::group_sms_href) {
            browser::open_external(&href);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog passenger-list" on:click=move |ev| ev.stop_propagation()>
                <h2>"Passengers"</h2>
                <p class="dialog__route">
                    {move || trip.with(|t| format!("{} → {}, {}", t.from, t.to, day_label(t.departure_time)))}
                </p>
                <ul class="passenger-list__items">
                    {move || {
                        let current = trip.get();
                        current
                            .passengers
                            .iter()
                            .map(|p| {
                                let tel = contact::passenger_tel_href(p);
                                let sms = contact::passenger_sms_href(&current, p);
                                let mailto = contact::passenger_mailto_href(&current, p);
                                let phone = p.phone.as_deref().map(format_phone);
                                let joined = format!("Joined {}", day_label(p.created_at));
                                view! {
                                    <li class="passenger-list__item">
                                        <div class="passenger-list__who">
                                            <span class="passenger-list__name">{p.name.clone()}</span>
                                            <span class="passenger-list__detail">
                                                {phone.unwrap_or_else(|| "No phone".to_owned())}
                                            </span>
                                            {p.email.clone().map(|email| view! { <span class="passenger-list__detail">{email}</span> })}
                                            <span class="passenger-list__joined">{joined}</span>
                                        </div>
                                        <div class="passenger-list__actions">
                                            <ContactButton label="Call" href=tel/>
                                            <ContactButton label="SMS" href=sms/>
                                            <ContactButton label="Email" href=mailto/>
                                        </div>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <div class="dialog__actions">
                    <button
                        class="btn"
                        disabled=move || trip.with(contact::group_sms_href).is_none()
                        on:click=message_all
                    >
                        "Message all"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Button that opens `href` externally, disabled when there is no link.
#[component]
fn ContactButton(label: &'static str, href: Option<String>) -> impl IntoView {
    let disabled = href.is_none();
    view! {
        <button
            class="btn btn--small"
            disabled=disabled
            on:click=move |_| {
                if let Some(href) = href.as_deref() {
                    browser::open_external(href);
                }
            }
        >
            {label}
        </button>
    }
}
