//! Wallet top-up input handling.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use leptos::prelude::*;

pub const INVALID_AMOUNT: &str = "Please enter a valid amount greater than zero.";

/// Parse the "amount to add" field.
///
/// # Errors
///
/// Returns `INVALID_AMOUNT` for blank, non-numeric, non-finite, zero or
/// negative input.
pub fn parse_amount(raw: &str) -> Result<f64, &'static str> {
    match raw.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(INVALID_AMOUNT),
    }
}

/// Whether the dialog that owns `success` is still open and showing its
/// success message. Its delayed auto-close runs only then, so a later
/// dialog in the same slot is left alone.
pub fn success_still_shown(success: RwSignal<Option<String>>) -> bool {
    success.try_get_untracked().flatten().is_some()
}
