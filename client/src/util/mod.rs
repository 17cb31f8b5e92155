//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser storage, token decoding and display
//! formatting from page and component logic.

pub mod auth;
pub mod browser;
pub mod claims;
pub mod format;
pub mod session;
