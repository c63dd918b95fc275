//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the search form, trip cards and their dialogs. They talk
//! to parents through callback props and to the API through `net::api`.

pub mod passenger_list_dialog;
pub mod search_form;
pub mod trip_card;
pub mod trip_delete_dialog;
pub mod trip_edit_dialog;
