//! Product list filtering for the dashboard grid.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::types::{Category, Product};

/// Search box and category dropdown values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub query: String,
    /// Category name; `None` shows every category.
    pub category: Option<String>,
}

/// Category name for `product`, preferring the name the backend sent and
/// falling back to a lookup by id.
#[must_use]
pub fn category_name<'a>(product: &'a Product, categories: &'a [Category]) -> Option<&'a str> {
    product
        .category_name
        .as_deref()
        .filter(|n| !n.is_empty())
        .or_else(|| {
            let id = product.category_id?;
            categories.iter().find(|c| c.category_id == id).map(|c| c.name.as_str())
        })
}

/// Products whose name contains the query (case-insensitive) and whose
/// category matches the selected one.
#[must_use]
pub fn filter_products(products: &[Product], categories: &[Category], filter: &ProductFilter) -> Vec<Product> {
    let query = filter.query.trim().to_lowercase();
    products
        .iter()
        .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&query))
        .filter(|p| match filter.category.as_deref() {
            Some(selected) => category_name(p, categories) == Some(selected),
            None => true,
        })
        .cloned()
        .collect()
}
