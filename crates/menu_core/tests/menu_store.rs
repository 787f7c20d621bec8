use menu_core::{
    IdScheme, MenuField, MenuItem, MenuItemDraft, MenuStore, MenuStoreConfig, MenuStoreError,
    MenuValidationError,
};
use std::collections::HashSet;

fn starter_store() -> MenuStore {
    let items = vec![
        MenuItem::with_id(
            "1",
            "Chicken Salad",
            "Fresh greens with grilled chicken",
            80.0,
            "Starters",
        )
        .unwrap(),
        MenuItem::with_id("2", "Beef Steak", "Juicy and tender", 150.0, "Mains").unwrap(),
    ];
    MenuStore::with_items(items, MenuStoreConfig::default()).unwrap()
}

#[test]
fn add_appends_trimmed_item_with_parsed_price() {
    let mut store = starter_store();

    let item = store
        .add(&MenuItemDraft::new(" Soup ", "Tomato soup", "40", "Starters "))
        .unwrap();

    assert_eq!(item.name(), "Soup");
    assert_eq!(item.description(), "Tomato soup");
    assert_eq!(item.price(), 40.0);
    assert_eq!(item.course(), "Starters");
    assert_eq!(store.len(), 3);
    assert_eq!(store.items().last(), Some(&item));
}

#[test]
fn add_preserves_insertion_order() {
    let mut store = MenuStore::new();
    for name in ["Soup", "Steak", "Cake"] {
        store
            .add(&MenuItemDraft::new(name, "desc", "10", "Any"))
            .unwrap();
    }

    let names = store.items().iter().map(MenuItem::name).collect::<Vec<_>>();
    assert_eq!(names, vec!["Soup", "Steak", "Cake"]);
}

#[test]
fn add_with_all_fields_empty_fails_and_leaves_store_unchanged() {
    let mut store = starter_store();
    let before = store.items().to_vec();

    let err = store.add(&MenuItemDraft::new("", "", "", "")).unwrap_err();

    assert_eq!(
        err,
        MenuValidationError::MissingField(vec![
            MenuField::Name,
            MenuField::Description,
            MenuField::Price,
            MenuField::Course,
        ])
    );
    assert_eq!(store.items(), before.as_slice());
    assert_eq!(err.to_string(), "Please fill in all fields.");
}

#[test]
fn add_with_negative_price_fails_and_leaves_store_unchanged() {
    let mut store = starter_store();

    let err = store
        .add(&MenuItemDraft::new("Tea", "Hot tea", "-5", "Drinks"))
        .unwrap_err();

    assert_eq!(err, MenuValidationError::InvalidPrice("-5".to_string()));
    assert_eq!(err.to_string(), "Please enter a valid price greater than 0.");
    assert_eq!(store.len(), 2);
}

#[test]
fn add_with_non_numeric_price_fails() {
    let mut store = MenuStore::new();

    let err = store
        .add(&MenuItemDraft::new("Tea", "Hot tea", "ten", "Drinks"))
        .unwrap_err();

    assert!(matches!(err, MenuValidationError::InvalidPrice(_)));
    assert!(store.is_empty());
}

#[test]
fn sequential_ids_are_pairwise_distinct() {
    let mut store = starter_store();
    let mut ids = HashSet::new();
    for index in 0..50 {
        let item = store
            .add(&MenuItemDraft::new(
                format!("Dish {index}"),
                "desc",
                "12.5",
                "Mains",
            ))
            .unwrap();
        ids.insert(item.id().to_string());
    }

    assert_eq!(ids.len(), 50);
    assert!(!ids.contains("1"));
    assert!(!ids.contains("2"));
}

#[test]
fn sequential_ids_stay_unique_for_sparse_seeded_ids() {
    let items = vec![
        MenuItem::with_id("2", "Beef Steak", "Juicy", 150.0, "Mains").unwrap(),
        MenuItem::with_id("3", "Cake", "Chocolate", 60.0, "Desserts").unwrap(),
    ];
    let mut store = MenuStore::with_items(items, MenuStoreConfig::default()).unwrap();

    let first = store
        .add(&MenuItemDraft::new("Tea", "Hot tea", "15", "Drinks"))
        .unwrap();
    let second = store
        .add(&MenuItemDraft::new("Coffee", "Black", "20", "Drinks"))
        .unwrap();

    assert_eq!(first.id(), "4");
    assert_eq!(second.id(), "5");
}

#[test]
fn uuid_scheme_assigns_distinct_uuid_ids() {
    let config = MenuStoreConfig {
        id_scheme: IdScheme::Uuid,
    };
    let mut store = MenuStore::with_config(config);
    let mut ids = HashSet::new();
    for _ in 0..20 {
        let item = store
            .add(&MenuItemDraft::new("Tea", "Hot tea", "15", "Drinks"))
            .unwrap();
        assert!(uuid::Uuid::parse_str(item.id()).is_ok());
        ids.insert(item.id().to_string());
    }
    assert_eq!(ids.len(), 20);
}

#[test]
fn with_items_rejects_duplicate_ids() {
    let items = vec![
        MenuItem::with_id("1", "Soup", "Tomato", 40.0, "Starters").unwrap(),
        MenuItem::with_id("1", "Tea", "Hot", 15.0, "Drinks").unwrap(),
    ];

    let err = MenuStore::with_items(items, MenuStoreConfig::default()).unwrap_err();
    assert_eq!(err, MenuStoreError::DuplicateId("1".to_string()));
}

#[test]
fn sample_menu_matches_starter_items() {
    let store = MenuStore::with_sample_menu(MenuStoreConfig::default());

    assert_eq!(store.len(), 2);
    let steak = store.get("2").unwrap();
    assert_eq!(steak.name(), "Beef Steak");
    assert_eq!(steak.price(), 150.0);
    assert_eq!(steak.course(), "Mains");
    assert_eq!(store.items()[0].name(), "Chicken Salad");
}
