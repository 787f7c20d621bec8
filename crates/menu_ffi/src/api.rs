//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose menu list/add/filter use-cases to Dart via FRB.
//! - Own the process-wide session store shared by all screens.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Validation failures come back as envelopes, never as thrown errors.

use log::warn;
use menu_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    IdScheme, MenuItem, MenuItemDraft, MenuStore, MenuStoreConfig, SharedMenuStore,
    NO_RESULTS_MESSAGE,
};
use std::sync::OnceLock;

const ID_SCHEME_ENV: &str = "MENU_ID_SCHEME";
static SESSION_STORE: OnceLock<SharedMenuStore> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Menu item as rendered by list cards.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub course: String,
}

/// List response for home and filter screens.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuListResponse {
    pub items: Vec<MenuItemView>,
    /// Human-readable status, e.g. the no-results notice.
    pub message: String,
}

/// Response for the add-item form.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuAddResponse {
    pub ok: bool,
    /// Created item on success.
    pub item: Option<MenuItemView>,
    /// Stable error code (`missing_field|invalid_price`) on failure.
    pub error_code: Option<String>,
    pub message: String,
}

/// Returns the session menu in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn menu_items() -> MenuListResponse {
    let items = session_store()
        .items()
        .iter()
        .map(to_item_view)
        .collect::<Vec<_>>();
    let message = format!("{} item(s) on the menu.", items.len());
    MenuListResponse { items, message }
}

/// Number of items currently on the menu.
#[flutter_rust_bridge::frb(sync)]
pub fn menu_count() -> u32 {
    u32::try_from(session_store().len()).unwrap_or(u32::MAX)
}

/// Validates raw form input and appends one item to the session menu.
///
/// # FFI contract
/// - Fields are passed exactly as typed; trimming happens in core.
/// - On failure the menu is unchanged and `error_code` is set.
#[flutter_rust_bridge::frb(sync)]
pub fn menu_add(
    name: String,
    description: String,
    price: String,
    course: String,
) -> MenuAddResponse {
    let draft = MenuItemDraft {
        name,
        description,
        price,
        course,
    };
    match session_store().add(&draft) {
        Ok(item) => MenuAddResponse {
            ok: true,
            item: Some(to_item_view(&item)),
            error_code: None,
            message: "Menu item added.".to_string(),
        },
        Err(err) => MenuAddResponse {
            ok: false,
            item: None,
            error_code: Some(err.code().to_string()),
            message: err.to_string(),
        },
    }
}

/// Filters the session menu by course name, ignoring case.
#[flutter_rust_bridge::frb(sync)]
pub fn menu_filter(query: String) -> MenuListResponse {
    let items = session_store()
        .filter(&query)
        .iter()
        .map(to_item_view)
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        NO_RESULTS_MESSAGE.to_string()
    } else {
        format!("Found {} item(s).", items.len())
    };
    MenuListResponse { items, message }
}

fn session_store() -> &'static SharedMenuStore {
    SESSION_STORE.get_or_init(|| {
        let config = MenuStoreConfig {
            id_scheme: resolve_id_scheme(),
        };
        SharedMenuStore::new(MenuStore::with_sample_menu(config))
    })
}

fn resolve_id_scheme() -> IdScheme {
    let Ok(raw) = std::env::var(ID_SCHEME_ENV) else {
        return IdScheme::default();
    };
    IdScheme::parse(&raw).unwrap_or_else(|| {
        warn!("event=config_load module=ffi status=fallback key={ID_SCHEME_ENV}");
        IdScheme::default()
    })
}

fn to_item_view(item: &MenuItem) -> MenuItemView {
    MenuItemView {
        id: item.id().to_string(),
        name: item.name().to_string(),
        description: item.description().to_string(),
        price: item.price(),
        course: item.course().to_string(),
    }
}
