use menu_core::{apply, CourseFilter, MenuItem, MenuItemDraft, MenuStore, MenuStoreConfig};

fn menu() -> Vec<MenuItem> {
    let mut store = MenuStore::with_sample_menu(MenuStoreConfig::default());
    store
        .add(&MenuItemDraft::new("Soup", "Tomato soup", "40", "Starters"))
        .unwrap();
    store
        .add(&MenuItemDraft::new("Cake", "Chocolate cake", "60", "Desserts"))
        .unwrap();
    store
        .add(&MenuItemDraft::new("Lamb", "Slow roasted", "180", "Main Course"))
        .unwrap();
    store.items().to_vec()
}

fn ids(items: &[MenuItem]) -> Vec<&str> {
    items.iter().map(MenuItem::id).collect()
}

#[test]
fn empty_query_returns_full_collection_in_order() {
    let items = menu();
    assert_eq!(apply(&items, ""), items);
}

#[test]
fn substring_match_ignores_case_and_keeps_order() {
    let items = menu();

    let mains = apply(&items, "MAIN");
    assert_eq!(ids(&mains), vec!["2", "5"]);
    assert_eq!(apply(&items, "mains"), apply(&items, "MAINS"));
}

#[test]
fn scenario_from_starter_menu() {
    let mut store = MenuStore::with_sample_menu(MenuStoreConfig::default());
    let soup = store
        .add(&MenuItemDraft::new("Soup", "Tomato soup", "40", "Starters"))
        .unwrap();
    assert_eq!(soup.price(), 40.0);
    assert_eq!(store.len(), 3);

    let mains = apply(store.items(), "main");
    assert_eq!(ids(&mains), vec!["2"]);
    assert!(apply(store.items(), "dessert").is_empty());
}

#[test]
fn filtering_is_idempotent_and_does_not_mutate_source() {
    let items = menu();
    let snapshot = items.clone();

    let once = apply(&items, "s");
    let twice = apply(&once, "s");

    assert_eq!(once, twice);
    assert_eq!(items, snapshot);
}

#[test]
fn query_whitespace_is_significant() {
    let items = menu();

    assert_eq!(ids(&apply(&items, "n c")), vec!["5"]);
    assert!(apply(&items, " mains").is_empty());
}

#[test]
fn view_flags_empty_results() {
    let items = menu();

    let none = CourseFilter::new("Drinks").view(&items);
    assert!(none.is_empty_result());
    assert_eq!(none.query, "Drinks");

    let some = CourseFilter::new("start").view(&items);
    assert!(!some.is_empty_result());
    assert_eq!(ids(&some.items), vec!["1", "3"]);
}

#[test]
fn matches_handles_non_ascii_case_folding() {
    let mut store = MenuStore::new();
    let item = store
        .add(&MenuItemDraft::new("Crème", "Brûlée", "55", "DÉSSERTS"))
        .unwrap();

    assert!(CourseFilter::new("déss").matches(&item));
}
