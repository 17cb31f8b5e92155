use time::macros::{datetime, offset};

use super::*;

#[test]
fn format_currency_two_decimals_with_grouping() {
    assert_eq!(format_currency(0.0), "R0.00");
    assert_eq!(format_currency(32.5), "R32.50");
    assert_eq!(format_currency(1234.5), "R1 234.50");
    assert_eq!(format_currency(1_000_000.0), "R1 000 000.00");
}

#[test]
fn format_currency_negative_and_rounding() {
    assert_eq!(format_currency(-12.0), "-R12.00");
    assert_eq!(format_currency(9.999), "R10.00");
    assert_eq!(format_currency(-0.001), "R0.00");
}

#[test]
fn format_currency_non_finite_is_zero() {
    assert_eq!(format_currency(f64::NAN), "R0.00");
    assert_eq!(format_currency(f64::INFINITY), "R0.00");
}

#[test]
fn parse_timestamp_reads_naive_in_local_offset() {
    let parsed = parse_timestamp("2025-05-01T10:20:30", offset!(+2)).unwrap();
    assert_eq!(parsed, datetime!(2025-05-01 10:20:30 +2));
}

#[test]
fn parse_timestamp_reads_fractional_seconds() {
    let parsed = parse_timestamp("2025-05-01T10:20:30.1234567", UtcOffset::UTC).unwrap();
    assert_eq!(parsed.date(), datetime!(2025-05-01 0:00 UTC).date());
    assert_eq!(parsed.second(), 30);
}

#[test]
fn parse_timestamp_keeps_explicit_offset() {
    let parsed = parse_timestamp("2025-05-01T08:20:30Z", offset!(+2)).unwrap();
    assert_eq!(parsed, datetime!(2025-05-01 10:20:30 +2));
}

#[test]
fn parse_timestamp_rejects_garbage() {
    assert_eq!(parse_timestamp("yesterday", UtcOffset::UTC), None);
    assert_eq!(parse_timestamp("", UtcOffset::UTC), None);
}

#[test]
fn format_timestamp_renders_long_month() {
    assert_eq!(format_timestamp("2025-05-01T10:20:30", UtcOffset::UTC), "1 May 2025, 10:20");
    assert_eq!(format_timestamp("2025-12-31T22:05:00Z", offset!(+2)), "1 January 2026, 00:05");
}

#[test]
fn format_timestamp_passes_through_unparseable() {
    assert_eq!(format_timestamp("n/a", UtcOffset::UTC), "n/a");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn clock_helpers_are_fixed_off_browser() {
    assert_eq!(local_offset(), UtcOffset::UTC);
    assert_eq!(now_local(), OffsetDateTime::UNIX_EPOCH);
}
