use super::*;
use time::macros::{date, datetime};

fn tx(id: i64, at: &str) -> Transaction {
    Transaction {
        transaction_id: id,
        transaction_date: at.to_owned(),
        amount: 10.0,
        transaction_type: Some("Purchase".to_owned()),
        description: None,
        resulting_balance: None,
        items: Vec::new(),
    }
}

fn history() -> Vec<Transaction> {
    vec![
        tx(1, "2025-03-31T08:00:00"),
        tx(2, "2025-03-30T23:59:00"),
        tx(3, "2025-03-25T09:00:00"),
        tx(4, "2025-02-28T12:00:00"),
        tx(5, "2024-12-01T10:00:00"),
        tx(6, "2024-03-31T12:00:00"),
        tx(7, "2023-01-01T00:00:00"),
        tx(8, "not a date"),
    ]
}

fn ids(filter: &TransactionFilter) -> Vec<i64> {
    let now = datetime!(2025-03-31 12:00 UTC);
    filter_transactions(&history(), filter, now).iter().map(|t| t.transaction_id).collect()
}

fn period(period: TransactionPeriod) -> TransactionFilter {
    TransactionFilter { period, ..TransactionFilter::default() }
}

#[test]
fn all_keeps_everything_including_unparseable() {
    assert_eq!(ids(&period(TransactionPeriod::All)), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn today_starts_at_local_midnight() {
    assert_eq!(ids(&period(TransactionPeriod::Today)), vec![1]);
}

#[test]
fn week_covers_last_seven_days() {
    assert_eq!(ids(&period(TransactionPeriod::Week)), vec![1, 2, 3]);
}

#[test]
fn month_clamps_to_end_of_shorter_month() {
    // 31 March minus one month is 28 February at the same time of day.
    assert_eq!(ids(&period(TransactionPeriod::Month)), vec![1, 2, 3, 4]);
}

#[test]
fn year_is_one_calendar_year_back() {
    assert_eq!(ids(&period(TransactionPeriod::Year)), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn custom_range_is_inclusive_of_whole_days() {
    let filter = TransactionFilter {
        period: TransactionPeriod::Custom,
        start_date: Some(date!(2025 - 03 - 25)),
        end_date: Some(date!(2025 - 03 - 30)),
    };
    assert_eq!(ids(&filter), vec![2, 3]);
}

#[test]
fn custom_range_bounds_are_optional() {
    let open_end = TransactionFilter {
        period: TransactionPeriod::Custom,
        start_date: Some(date!(2025 - 01 - 01)),
        end_date: None,
    };
    assert_eq!(ids(&open_end), vec![1, 2, 3, 4]);

    let open_start = TransactionFilter {
        period: TransactionPeriod::Custom,
        start_date: None,
        end_date: Some(date!(2024 - 12 - 31)),
    };
    assert_eq!(ids(&open_start), vec![5, 6, 7]);
}

#[test]
fn offset_timestamps_are_compared_as_instants() {
    let now = datetime!(2025-03-31 12:00 +2);
    let rows = vec![tx(1, "2025-03-30T23:00:00Z"), tx(2, "2025-03-30T21:00:00Z")];
    let kept: Vec<i64> = filter_transactions(&rows, &period(TransactionPeriod::Today), now)
        .iter()
        .map(|t| t.transaction_id)
        .collect();
    // Local midnight at +02:00 is 22:00 UTC the previous day.
    assert_eq!(kept, vec![1]);
}

#[test]
fn leaving_custom_clears_dates() {
    let mut filter = TransactionFilter {
        period: TransactionPeriod::Custom,
        start_date: Some(date!(2025 - 01 - 01)),
        end_date: Some(date!(2025 - 01 - 31)),
    };
    filter.set_period(TransactionPeriod::Custom);
    assert!(filter.start_date.is_some());
    filter.set_period(TransactionPeriod::Week);
    assert_eq!(filter, period(TransactionPeriod::Week));
}

#[test]
fn period_select_values_round_trip() {
    for p in TransactionPeriod::ALL {
        assert_eq!(TransactionPeriod::parse(p.as_str()), p);
    }
    assert_eq!(TransactionPeriod::parse("bogus"), TransactionPeriod::All);
}

#[test]
fn parses_date_inputs() {
    assert_eq!(parse_date_input("2025-03-09"), Some(date!(2025 - 03 - 09)));
    assert_eq!(parse_date_input(""), None);
    assert_eq!(parse_date_input("09/03/2025"), None);
}
