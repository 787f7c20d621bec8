//! In-memory menu store.
//!
//! # Responsibility
//! - Own the ordered menu collection for one presentation session.
//! - Validate form input and assign identifiers on append.
//!
//! # Invariants
//! - Insertion order is display order and is never rearranged.
//! - No two items share an `id`.
//! - A rejected `add` leaves the collection untouched.

use crate::config::{IdScheme, MenuStoreConfig};
use crate::model::menu_item::{MenuItem, MenuItemDraft, MenuItemId, MenuValidationError};
use log::{info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, MenuStoreError>;

/// Errors raised when seeding a store from an existing collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuStoreError {
    DuplicateId(MenuItemId),
}

impl Display for MenuStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate menu item id: {id}"),
        }
    }
}

impl Error for MenuStoreError {}

/// Ordered, append-only menu collection.
#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
    ids: HashSet<MenuItemId>,
    config: MenuStoreConfig,
}

impl MenuStore {
    /// Creates an empty store with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MenuStoreConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Creates a store seeded with an existing collection, keeping its order.
    ///
    /// Items are already validated by construction; only id clashes fail.
    pub fn with_items(
        items: impl IntoIterator<Item = MenuItem>,
        config: MenuStoreConfig,
    ) -> StoreResult<Self> {
        let mut store = Self::with_config(config);
        for item in items {
            if !store.ids.insert(item.id().to_string()) {
                return Err(MenuStoreError::DuplicateId(item.id().to_string()));
            }
            store.items.push(item);
        }
        Ok(store)
    }

    /// Creates a store holding the app's starter menu.
    pub fn with_sample_menu(config: MenuStoreConfig) -> Self {
        let mut store = Self::with_config(config);
        for item in sample_menu() {
            store.ids.insert(item.id().to_string());
            store.items.push(item);
        }
        store
    }

    /// Validates `draft`, assigns a fresh id and appends the new item.
    ///
    /// Returns a copy of the created item.
    pub fn add(&mut self, draft: &MenuItemDraft) -> Result<MenuItem, MenuValidationError> {
        let validated = match draft.validate() {
            Ok(validated) => validated,
            Err(err) => {
                warn!(
                    "event=menu_add module=store status=rejected error_code={} count={}",
                    err.code(),
                    self.items.len()
                );
                return Err(err);
            }
        };

        let id = self.next_id();
        let item = MenuItem::from_validated(id.clone(), validated);
        self.ids.insert(id);
        self.items.push(item.clone());

        info!(
            "event=menu_add module=store status=ok item_id={} count={}",
            item.id(),
            self.items.len()
        );
        Ok(item)
    }

    /// Current collection in insertion order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn config(&self) -> &MenuStoreConfig {
        &self.config
    }

    fn next_id(&self) -> MenuItemId {
        match self.config.id_scheme {
            IdScheme::Sequential => {
                let mut candidate = self.items.len() as u64 + 1;
                while self.ids.contains(&candidate.to_string()) {
                    candidate += 1;
                }
                candidate.to_string()
            }
            IdScheme::Uuid => loop {
                let candidate = Uuid::new_v4().to_string();
                if !self.ids.contains(&candidate) {
                    break candidate;
                }
            },
        }
    }
}

fn sample_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::from_parts(
            "1",
            "Chicken Salad",
            "Fresh greens with grilled chicken",
            80.0,
            "Starters",
        ),
        MenuItem::from_parts("2", "Beef Steak", "Juicy and tender", 150.0, "Mains"),
    ]
}

#[cfg(test)]
mod tests {
    use super::MenuStore;
    use crate::config::MenuStoreConfig;
    use crate::model::menu_item::MenuItemDraft;

    #[test]
    fn sequential_ids_skip_taken_values() {
        let mut store = MenuStore::with_sample_menu(MenuStoreConfig::default());
        let first = store
            .add(&MenuItemDraft::new("Soup", "Tomato soup", "40", "Starters"))
            .expect("valid draft");
        assert_eq!(first.id(), "3");
        assert_eq!(store.get("3"), Some(&first));
    }
}
