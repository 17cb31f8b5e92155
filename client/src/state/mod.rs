//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` and `toast` live in context for the whole app; the rest are small
//! view models and pure helpers owned by the page or dialog that uses them.

pub mod auth;
pub mod cart;
pub mod product_form;
pub mod products;
pub mod toast;
pub mod transactions;
pub mod users;
pub mod wallet;
