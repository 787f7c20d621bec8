//! Course filter over the menu collection.
//!
//! # Responsibility
//! - Select items whose course contains a query, ignoring case.
//!
//! # Invariants
//! - An empty query is the identity filter.
//! - Output keeps the source's relative order.
//! - The source slice is never modified.

use crate::model::menu_item::MenuItem;

/// Message shown by list views when a filter matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No items found for this course.";

/// Returns items whose course contains `query`, case-insensitively.
///
/// Returns every item when `query` is empty. No match yields an empty Vec.
pub fn apply(items: &[MenuItem], query: &str) -> Vec<MenuItem> {
    CourseFilter::new(query).apply(items)
}

/// Prepared course query with its lowercased needle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseFilter {
    query: String,
    needle: Option<String>,
}

impl CourseFilter {
    /// The query is kept verbatim; surrounding spaces are significant.
    pub fn new(query: &str) -> Self {
        let needle = (!query.is_empty()).then(|| query.to_lowercase());
        Self {
            query: query.to_string(),
            needle,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether this filter passes every item through.
    pub fn is_identity(&self) -> bool {
        self.needle.is_none()
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => item.course().to_lowercase().contains(needle.as_str()),
        }
    }

    pub fn apply(&self, items: &[MenuItem]) -> Vec<MenuItem> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }

    /// Applies the filter and wraps the result for rendering.
    pub fn view(&self, items: &[MenuItem]) -> FilteredView {
        FilteredView {
            query: self.query.clone(),
            items: self.apply(items),
        }
    }
}

/// Filter result plus the query that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    pub query: String,
    pub items: Vec<MenuItem>,
}

impl FilteredView {
    /// True when nothing matched; views render [`NO_RESULTS_MESSAGE`].
    pub fn is_empty_result(&self) -> bool {
        self.items.is_empty()
    }
}
