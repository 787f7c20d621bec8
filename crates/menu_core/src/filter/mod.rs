//! Filtered views over the menu collection.
//!
//! # Responsibility
//! - Compute read-only subsequences for the filter screen.

pub mod course_filter;
