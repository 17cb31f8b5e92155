//! Networking modules for the kiosk REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` mirrors the backend DTOs, and
//! `error` reduces failures to something a page can show.

pub mod api;
pub mod error;
pub mod types;
