//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome and its dialogs while reading and
//! writing shared state from Leptos context providers.

pub mod cart_modal;
pub mod product_card;
pub mod product_form_dialog;
pub mod profile_modal;
pub mod protected_route;
pub mod sidebar;
pub mod toast;
pub mod transaction_modal;
pub mod wallet_modal;
