//! Flutter bridge surface for the menu core.

pub mod api;
