//! Create/edit product form model.
//!
//! DESIGN
//! ======
//! Inputs are kept as raw strings so the form can show exactly what was typed;
//! `validate` turns them into a typed `ProductSubmission` only on submit.

#[cfg(test)]
#[path = "product_form_test.rs"]
mod product_form_test;

use crate::net::types::Product;

pub const MISSING_FIELDS: &str = "Please fill in all required fields.";
pub const NOT_A_NUMBER: &str = "Price and quantity must be numbers.";
pub const NEGATIVE_VALUES: &str = "Price and quantity must be non-negative.";
pub const NOT_AN_IMAGE: &str = "Please upload a valid image file.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
    pub category_id: String,
    pub is_available: bool,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            quantity: String::new(),
            category_id: String::new(),
            is_available: true,
        }
    }
}

impl ProductDraft {
    /// Pre-fill the form for editing `product`.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
            category_id: product.category_id.map(|id| id.to_string()).unwrap_or_default(),
            is_available: product.is_available,
        }
    }

    /// Check required fields and numeric ranges.
    ///
    /// # Errors
    ///
    /// Returns the message to show when a field is missing, not a number, or
    /// negative.
    pub fn validate(&self) -> Result<ProductSubmission, &'static str> {
        let name = self.name.trim();
        let price = self.price.trim();
        let quantity = self.quantity.trim();
        let category = self.category_id.trim();
        if name.is_empty() || price.is_empty() || quantity.is_empty() || category.is_empty() {
            return Err(MISSING_FIELDS);
        }
        let (Ok(price), Ok(quantity)) = (price.parse::<f64>(), quantity.parse::<i64>()) else {
            return Err(NOT_A_NUMBER);
        };
        if !price.is_finite() {
            return Err(NOT_A_NUMBER);
        }
        if price < 0.0 || quantity < 0 {
            return Err(NEGATIVE_VALUES);
        }
        let category_id = category.parse::<i64>().map_err(|_| MISSING_FIELDS)?;
        Ok(ProductSubmission {
            name: name.to_owned(),
            description: self.description.trim().to_owned(),
            price,
            quantity,
            category_id,
            is_available: self.is_available,
        })
    }
}

/// Validated product fields, sent as multipart form data.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductSubmission {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    pub category_id: i64,
    pub is_available: bool,
}

impl ProductSubmission {
    /// Multipart field names and values, in the order the backend binds them.
    /// Updates pass the product id so the body matches the route.
    #[must_use]
    pub fn fields(&self, product_id: Option<i64>) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Name", self.name.clone()),
            ("Description", self.description.clone()),
            ("Price", self.price.to_string()),
            ("Quantity", self.quantity.to_string()),
            ("CategoryID", self.category_id.to_string()),
            ("IsAvailable", self.is_available.to_string()),
        ];
        if let Some(id) = product_id {
            fields.push(("ProductID", id.to_string()));
        }
        fields
    }
}

/// Only `image/*` uploads are accepted.
#[must_use]
pub fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}
