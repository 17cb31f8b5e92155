//! REST helpers for the kiosk backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, relative to `/api`
//! so they go through the kiosk server's forwarder.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`; pages turn the error into a
//! single message string with `ApiError::user_message`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    AuthResponse, Cart, Category, LoginRequest, Product, RegisterRequest, Transaction, UpdateUserRequest, UserProfile,
};
use crate::state::product_form::ProductSubmission;

#[cfg(feature = "hydrate")]
use gloo_net::http::{Request, RequestBuilder, Response};

/// Image picked in a file input, attached to product create/update.
#[cfg(feature = "hydrate")]
pub type ImageFile = web_sys::File;

/// Off the browser no file can be picked, so `Option<ImageFile>` is always `None`.
#[cfg(not(feature = "hydrate"))]
#[derive(Clone, Debug)]
pub enum ImageFile {}

#[cfg(any(test, feature = "hydrate"))]
const API_BASE: &str = "/api";

#[cfg(any(test, feature = "hydrate"))]
fn auth_endpoint(action: &str) -> String {
    format!("{API_BASE}/Auth/{action}")
}

#[cfg(any(test, feature = "hydrate"))]
fn products_endpoint() -> String {
    format!("{API_BASE}/Product")
}

#[cfg(any(test, feature = "hydrate"))]
fn product_endpoint(product_id: i64) -> String {
    format!("{API_BASE}/Product/{product_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn product_availability_endpoint(product_id: i64) -> String {
    format!("{API_BASE}/Product/{product_id}/availability")
}

#[cfg(any(test, feature = "hydrate"))]
fn categories_endpoint() -> String {
    format!("{API_BASE}/Category")
}

#[cfg(any(test, feature = "hydrate"))]
fn cart_endpoint(user_id: i64) -> String {
    format!("{API_BASE}/Cart/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn cart_add_endpoint() -> String {
    format!("{API_BASE}/Cart/add")
}

#[cfg(any(test, feature = "hydrate"))]
fn cart_update_endpoint(cart_item_id: i64) -> String {
    format!("{API_BASE}/Cart/update/{cart_item_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn cart_remove_endpoint(cart_item_id: i64) -> String {
    format!("{API_BASE}/Cart/remove/{cart_item_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn cart_checkout_endpoint(user_id: i64) -> String {
    format!("{API_BASE}/Cart/checkout/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn wallet_balance_endpoint(user_id: i64) -> String {
    format!("{API_BASE}/Wallet/{user_id}/Balance")
}

#[cfg(any(test, feature = "hydrate"))]
fn wallet_add_funds_endpoint(user_id: i64) -> String {
    format!("{API_BASE}/Wallet/{user_id}/AddFunds")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_transactions_endpoint(user_id: i64) -> String {
    format!("{API_BASE}/Transaction/user/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn users_endpoint() -> String {
    format!("{API_BASE}/Users")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(user_id: i64) -> String {
    format!("{API_BASE}/Users/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

// =============================================================
// Transport
// =============================================================

/// Attach the stored bearer token, if any.
#[cfg(feature = "hydrate")]
fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match crate::util::session::load_token() {
        Some(token) => builder.header("Authorization", &bearer(&token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
fn encode_error(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Send a request and turn non-2xx responses into `ApiError::Status`.
#[cfg(feature = "hydrate")]
async fn execute(request: Request) -> Result<Response, ApiError> {
    let method = request.method();
    let url = request.url();
    let resp = request.send().await.map_err(|e| {
        log::warn!("{method:?} {url} failed: {e}");
        ApiError::Network(e.to_string())
    })?;
    if resp.ok() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let err = ApiError::from_status(resp.status(), &body);
    log::warn!("{method:?} {url} -> {err}");
    Err(err)
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn product_form_data(
    submission: &ProductSubmission,
    product_id: Option<i64>,
    image: Option<&ImageFile>,
) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Decode("FormData unavailable".to_owned()))?;
    for (name, value) in submission.fields(product_id) {
        form.append_with_str(name, &value)
            .map_err(|_| ApiError::Decode(format!("could not append {name}")))?;
    }
    if let Some(file) = image {
        form.append_with_blob_and_filename("Image", file, &file.name())
            .map_err(|_| ApiError::Decode("could not attach image".to_owned()))?;
    }
    Ok(form)
}

// =============================================================
// Auth
// =============================================================

/// Log in via `POST /api/Auth/login`. Persists the session on success.
///
/// # Errors
///
/// Returns an error if the request fails or the credentials are rejected.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = Request::post(&auth_endpoint("login"))
            .json(request)
            .map_err(encode_error)?;
        let body: AuthResponse = decode(execute(req).await?).await?;
        if let Some(session) = crate::util::session::Session::from_response(&body) {
            log::info!("logged in as {} (user {}, role {})", session.user.name, session.user.user_id, session.user.role);
            crate::util::session::save_session(&session);
        }
        Ok(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Register via `POST /api/Auth/register`. Persists the session when the
/// backend logs the new account straight in.
///
/// # Errors
///
/// Returns an error if the request fails or registration is rejected.
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = Request::post(&auth_endpoint("register"))
            .json(request)
            .map_err(encode_error)?;
        let body: AuthResponse = decode(execute(req).await?).await?;
        if let Some(session) = crate::util::session::Session::from_response(&body) {
            log::info!("registered {} (user {})", session.user.name, session.user.user_id);
            crate::util::session::save_session(&session);
        }
        Ok(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Products / categories
// =============================================================

/// Fetch all products from `GET /api/Product`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a product list.
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = with_auth(Request::get(&products_endpoint())).build().map_err(encode_error)?;
        decode(execute(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create a product via multipart `POST /api/Product`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the product.
pub async fn create_product(submission: &ProductSubmission, image: Option<ImageFile>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = product_form_data(submission, None, image.as_ref())?;
        let req = with_auth(Request::post(&products_endpoint())).body(form).map_err(encode_error)?;
        execute(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (submission, image);
        Err(ApiError::Unavailable)
    }
}

/// Update a product via multipart `PUT /api/Product/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the update.
pub async fn update_product(
    product_id: i64,
    submission: &ProductSubmission,
    image: Option<ImageFile>,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = product_form_data(submission, Some(product_id), image.as_ref())?;
        let req = with_auth(Request::put(&product_endpoint(product_id)))
            .body(form)
            .map_err(encode_error)?;
        execute(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (product_id, submission, image);
        Err(ApiError::Unavailable)
    }
}

/// Delete a product via `DELETE /api/Product/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend refuses the delete.
pub async fn delete_product(product_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = with_auth(Request::delete(&product_endpoint(product_id)))
            .build()
            .map_err(encode_error)?;
        execute(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = product_id;
        Err(ApiError::Unavailable)
    }
}

/// Toggle availability via `PUT /api/Product/{id}/availability`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the change.
pub async fn set_product_availability(product_id: i64, is_available: bool) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "isAvailable": is_available });
        let req = with_auth(Request::put(&product_availability_endpoint(product_id)))
            .json(&payload)
            .map_err(encode_error)?;
        execute(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (product_id, is_available);
        Err(ApiError::Unavailable)
    }
}

/// Fetch all categories from `GET /api/Category`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a category list.
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = with_auth(Request::get(&categories_endpoint())).build().map_err(encode_error)?;
        decode(execute(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Cart
// =============================================================

/// Fetch a user's cart from `GET /api/Cart/{user_id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a cart.
pub async fn fetch_cart(user_id: i64) -> Result<Cart, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = with_auth(Request::get(&cart_endpoint(user_id))).build().map_err(encode_error)?;
        decode(execute(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(ApiError::Unavailable)
    }
}

/// Add a product to the cart via `POST /api/Cart/add`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the item.
pub async fn add_to_cart(request: &super::types::AddToCartRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = with_auth(Request::post(&cart_add_endpoint()))
            .json(request)
            .map_err(encode_error)?;
        execute(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Change a cart line's quantity via `PUT /api/Cart/update/{item_id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the quantity.
pub async fn update_cart_item(cart_item_id: i64, quantity: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::UpdateCartItemRequest { quantity };
        let req = with_auth(Request::put(&cart_update_endpoint(cart_item_id)))
            .json(&payload)
            .map_err(encode_error)?;
        execute(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cart_item_id, quantity);
        Err(ApiError::Unavailable)
    }
}

/// Remove a cart line via `DELETE /api/Cart/remove/{item_id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn remove_cart_item(cart_item_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = with_auth(Request::delete(&cart_remove_endpoint(cart_item_id)))
            .build()
            .map_err(encode_error)?;
        execute(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = cart_item_id;
        Err(ApiError::Unavailable)
    }
}

/// Check out the cart via `POST /api/Cart/checkout/{user_id}`.
///
/// # Errors
///
/// Returns an error if the request fails or checkout is refused (for example
/// insufficient wallet balance).
pub async fn checkout_cart(user_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = with_auth(Request::post(&cart_checkout_endpoint(user_id)))
            .build()
            .map_err(encode_error)?;
        execute(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Wallet
// =============================================================

/// Fetch the wallet balance from `GET /api/Wallet/{user_id}/Balance`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a balance.
pub async fn fetch_wallet_balance(user_id: i64) -> Result<f64, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = with_auth(Request::get(&wallet_balance_endpoint(user_id)))
            .build()
            .map_err(encode_error)?;
        let body: super::types::WalletBalance = decode(execute(req).await?).await?;
        Ok(body.balance)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(ApiError::Unavailable)
    }
}

/// New balance from an `AddFunds` reply: `{"newBalance": n}`, `{"balance": n}`
/// or a bare number. `None` for anything else, including an empty body.
#[cfg(any(test, feature = "hydrate"))]
fn new_balance_from_body(body: &str) -> Option<f64> {
    let value: serde_json::Value = serde_json::from_str(body.trim()).ok()?;
    if let Some(balance) = value.as_f64() {
        return Some(balance);
    }
    serde_json::from_value::<super::types::AddFundsResponse>(value)
        .ok()
        .map(|r| r.new_balance)
}

/// Top up a wallet via `POST /api/Wallet/{user_id}/AddFunds`; returns the new balance.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the amount.
/// A success reply without a readable balance falls back to
/// `fetch_wallet_balance`.
pub async fn add_funds(user_id: i64, amount: f64) -> Result<f64, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::AddFundsRequest { amount };
        let req = with_auth(Request::post(&wallet_add_funds_endpoint(user_id)))
            .json(&payload)
            .map_err(encode_error)?;
        let resp = execute(req).await?;
        let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        match new_balance_from_body(&text) {
            Some(balance) => Ok(balance),
            None => {
                log::warn!("unexpected AddFunds reply for user {user_id}: {text:?}; refetching balance");
                fetch_wallet_balance(user_id).await
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, amount);
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Transactions
// =============================================================

/// Fetch a user's transactions from `GET /api/Transaction/user/{user_id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a transaction list.
pub async fn fetch_user_transactions(user_id: i64) -> Result<Vec<Transaction>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = with_auth(Request::get(&user_transactions_endpoint(user_id)))
            .build()
            .map_err(encode_error)?;
        decode(execute(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Users
// =============================================================

/// Fetch one user from `GET /api/Users/{user_id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a user.
pub async fn fetch_user(user_id: i64) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = with_auth(Request::get(&user_endpoint(user_id))).build().map_err(encode_error)?;
        decode(execute(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch every user from `GET /api/Users` (superuser only on the backend).
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a user list.
pub async fn fetch_users() -> Result<Vec<UserProfile>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = with_auth(Request::get(&users_endpoint())).build().map_err(encode_error)?;
        decode(execute(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Update a user via `PUT /api/Users/{user_id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the update.
pub async fn update_user(user_id: i64, request: &UpdateUserRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = with_auth(Request::put(&user_endpoint(user_id)))
            .json(request)
            .map_err(encode_error)?;
        execute(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, request);
        Err(ApiError::Unavailable)
    }
}

/// Delete a user via `DELETE /api/Users/{user_id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend refuses the delete.
pub async fn delete_user(user_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = with_auth(Request::delete(&user_endpoint(user_id)))
            .build()
            .map_err(encode_error)?;
        execute(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(ApiError::Unavailable)
    }
}
