//! Display formatting for money and backend timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Format an amount in rand: `R1 234.50`, `-R12.00`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}R{}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Parse a backend timestamp.
///
/// RFC 3339 values keep their offset; naive values (`2025-05-01T10:20:30`,
/// optionally with fractional seconds) are read in `local_offset`.
#[must_use]
pub fn parse_timestamp(raw: &str, local_offset: UtcOffset) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(dt);
    }
    let naive = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
    PrimitiveDateTime::parse(raw, naive)
        .ok()
        .map(|dt| dt.assume_offset(local_offset))
}

/// Format a backend timestamp as `1 May 2025, 10:20` in `local_offset`.
/// Unparseable input is returned unchanged.
#[must_use]
pub fn format_timestamp(raw: &str, local_offset: UtcOffset) -> String {
    let display = format_description!("[day padding:none] [month repr:long] [year], [hour]:[minute]");
    parse_timestamp(raw, local_offset)
        .and_then(|dt| dt.to_offset(local_offset).format(display).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// The browser's current UTC offset; UTC off the browser.
pub fn local_offset() -> UtcOffset {
    #[cfg(feature = "hydrate")]
    {
        // getTimezoneOffset is minutes *behind* UTC.
        #[allow(clippy::cast_possible_truncation)]
        let minutes = -(js_sys::Date::new_0().get_timezone_offset() as i32);
        UtcOffset::from_whole_seconds(minutes * 60).unwrap_or(UtcOffset::UTC)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        UtcOffset::UTC
    }
}

/// Current time in the browser's offset; the Unix epoch off the browser.
pub fn now_local() -> OffsetDateTime {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let millis = js_sys::Date::now() as i128;
        OffsetDateTime::from_unix_timestamp_nanos(millis * 1_000_000)
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
            .to_offset(local_offset())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::UNIX_EPOCH
    }
}
