//! Core domain types
//!
//! These types are the external (API-facing) shapes of the entities stored
//! by the server. Storage-specific representations live next to the
//! repository that persists them.

pub mod job_listing;
