//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `menu_core` linkage without the Flutter runtime.
//! - Print the starter menu, optionally filtered by the first argument.

use menu_core::{CourseFilter, MenuStore, MenuStoreConfig, NO_RESULTS_MESSAGE};

fn main() {
    println!("menu_core ping={}", menu_core::ping());
    println!("menu_core version={}", menu_core::core_version());

    let store = MenuStore::with_sample_menu(MenuStoreConfig::default());
    let query = std::env::args().nth(1).unwrap_or_default();
    let view = CourseFilter::new(&query).view(store.items());

    if view.is_empty_result() {
        println!("{NO_RESULTS_MESSAGE}");
        return;
    }
    for item in &view.items {
        println!(
            "{} | {} | {} | R{} | {}",
            item.id(),
            item.name(),
            item.description(),
            item.price(),
            item.course()
        );
    }
}
