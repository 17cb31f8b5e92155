//! REST DTOs mirrored from the kiosk backend.
//!
//! DESIGN
//! ======
//! The backend serializes ASP.NET-style camelCase with `…ID`/`…URL` suffixes,
//! but earlier revisions of the API used `id`/`Id` spellings. Aliases accept
//! both so a field rename on the server does not blank out the UI.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Role name that unlocks product and user management in the UI.
pub const SUPERUSER_ROLE: &str = "Superuser";

/// Role id the backend assigns to superusers.
pub const SUPERUSER_ROLE_ID: i64 = 2;

// =============================================================
// Auth
// =============================================================

/// The user object returned alongside a token by login/register.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(rename = "userID", alias = "userId", alias = "UserID", deserialize_with = "deserialize_id")]
    pub user_id: i64,
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Role")]
    pub role: String,
    #[serde(
        rename = "roleID",
        alias = "roleId",
        alias = "RoleID",
        default,
        deserialize_with = "deserialize_opt_id"
    )]
    pub role_id: Option<i64>,
}

impl AuthUser {
    /// Whether the UI should expose superuser-only controls for this user.
    #[must_use]
    pub fn is_superuser(&self) -> bool {
        self.role.eq_ignore_ascii_case(SUPERUSER_ROLE) || self.role_id == Some(SUPERUSER_ROLE_ID)
    }
}

/// Response body of `POST /api/Auth/login` and `POST /api/Auth/register`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub contact_number: String,
    pub password: String,
}

// =============================================================
// Catalog
// =============================================================

/// A product as listed by `GET /api/Product`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "productID", alias = "productId", alias = "id", deserialize_with = "deserialize_id")]
    pub product_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(
        rename = "categoryID",
        alias = "categoryId",
        default,
        deserialize_with = "deserialize_opt_id"
    )]
    pub category_id: Option<i64>,
    #[serde(rename = "categoryName", default)]
    pub category_name: Option<String>,
    #[serde(rename = "imageURL", alias = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(rename = "isAvailable", default = "default_true")]
    pub is_available: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "categoryID", alias = "categoryId", alias = "id", deserialize_with = "deserialize_id")]
    pub category_id: i64,
    pub name: String,
}

// =============================================================
// Cart
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(rename = "cartID", alias = "cartId", default, deserialize_with = "deserialize_opt_id")]
    pub cart_id: Option<i64>,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(rename = "totalAmount", default)]
    pub total_amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "cartItemID", alias = "cartItemId", deserialize_with = "deserialize_id")]
    pub cart_item_id: i64,
    #[serde(rename = "productID", alias = "productId", default, deserialize_with = "deserialize_opt_id")]
    pub product_id: Option<i64>,
    #[serde(rename = "productName", alias = "name", default)]
    pub product_name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(rename = "imageURL", alias = "imageUrl", default)]
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AddToCartRequest {
    #[serde(rename = "userID")]
    pub user_id: i64,
    #[serde(rename = "productID")]
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateCartItemRequest {
    pub quantity: i64,
}

// =============================================================
// Wallet
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct WalletBalance {
    #[serde(default)]
    pub balance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AddFundsRequest {
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AddFundsResponse {
    #[serde(rename = "newBalance", alias = "balance")]
    pub new_balance: f64,
}

// =============================================================
// Transactions
// =============================================================

/// A completed purchase or wallet movement from `GET /api/Transaction/user/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "transactionID", alias = "transactionId", alias = "id", deserialize_with = "deserialize_id")]
    pub transaction_id: i64,
    /// ISO-8601 timestamp as sent by the backend, with or without an offset.
    #[serde(rename = "transactionDate", alias = "date", default)]
    pub transaction_date: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(rename = "transactionType", alias = "type", default)]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Wallet balance right after this transaction, when the backend reports it.
    #[serde(rename = "resultingBalance", default)]
    pub resulting_balance: Option<f64>,
    #[serde(default, alias = "transactionItems")]
    pub items: Vec<TransactionItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionItem {
    #[serde(rename = "productName", alias = "name", default)]
    pub product_name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub price: f64,
}

// =============================================================
// Users
// =============================================================

/// A user record from `GET /api/Users` and `GET /api/Users/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "userId", alias = "userID", alias = "id", deserialize_with = "deserialize_id")]
    pub user_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "contactNumber", default)]
    pub contact_number: String,
    #[serde(rename = "accountStatus", default)]
    pub account_status: String,
    #[serde(default)]
    pub role: String,
}

/// Body of `PUT /api/Users/{id}`. A blank password is left out so the backend
/// keeps the current one.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub user_id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub contact_number: String,
    pub account_status: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UpdateUserRequest {
    /// Build an update body from an edited profile and an optional new password.
    #[must_use]
    pub fn from_profile(profile: &UserProfile, password: &str) -> Self {
        let password = password.trim();
        Self {
            user_id: profile.user_id,
            name: profile.name.clone(),
            surname: profile.surname.clone(),
            email: profile.email.clone(),
            contact_number: profile.contact_number.clone(),
            account_status: profile.account_status.clone(),
            role: profile.role.clone(),
            password: (!password.is_empty()).then(|| password.to_owned()),
        }
    }
}

// =============================================================
// Helpers
// =============================================================

fn default_true() -> bool {
    true
}

/// Accept ids sent either as JSON numbers or as numeric strings.
fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    id_from_value(&value).ok_or_else(|| D::Error::custom(format!("expected numeric id, got {value}")))
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match id_from_value(&value) {
        Some(id) => Ok(Some(id)),
        None if value.as_str().is_some_and(str::is_empty) => Ok(None),
        None => Err(D::Error::custom(format!("expected numeric id, got {value}"))),
    }
}

fn id_from_value(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
