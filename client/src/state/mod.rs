//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `search`, `trips`) so components depend
//! on small focused models.

pub mod auth;
pub mod search;
pub mod trip_edit;
pub mod trips;
