//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep browser effects and pure formatting/derivation logic
//! out of components so the logic stays testable without a DOM.

pub mod browser;
pub mod contact;
pub mod dates;
pub mod debounce;
pub mod phone;
pub mod trip_role;
