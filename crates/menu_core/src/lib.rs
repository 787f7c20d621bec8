//! Core domain logic for the menu app.
//! This crate is the single source of truth for menu invariants.

pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod store;

pub use config::{IdScheme, MenuStoreConfig};
pub use filter::course_filter::{apply, CourseFilter, FilteredView, NO_RESULTS_MESSAGE};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::menu_item::{
    parse_price, MenuField, MenuItem, MenuItemDraft, MenuItemId, MenuRecordError,
    MenuValidationError, ValidatedDraft, INVALID_PRICE_MESSAGE, MISSING_FIELD_MESSAGE,
};
pub use store::menu_store::{MenuStore, MenuStoreError, StoreResult};
pub use store::shared::{MenuListener, SharedMenuStore, SubscriptionId};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
