//! Menu domain model.
//!
//! # Responsibility
//! - Define the canonical record shared by list and filter views.
//! - Own the validation rules for raw form input.
//!
//! # Invariants
//! - A `MenuItem` is immutable once created.
//! - There is no delete; items leave only when the whole collection is dropped.

pub mod menu_item;
