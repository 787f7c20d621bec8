//! Menu collection ownership.
//!
//! # Responsibility
//! - Hold the ordered collection and enforce creation invariants.
//! - Share one live collection between the list and filter views.
//!
//! # Invariants
//! - Every write goes through `MenuStore::add` validation.

pub mod menu_store;
pub mod shared;
