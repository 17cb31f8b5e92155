//! Transaction history filtering.
//!
//! DESIGN
//! ======
//! Relative periods are measured back from `now` in the viewer's local
//! offset. Calendar arithmetic clamps to the last valid day, so "one month
//! before 31 March" is 28/29 February rather than rolling into March.
//! Rows whose timestamp cannot be parsed are hidden by every period except
//! `All`.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use time::macros::{format_description, time};
use time::{Date, Duration, Month, OffsetDateTime, Time};

use crate::net::types::Transaction;
use crate::util::format::parse_timestamp;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransactionPeriod {
    #[default]
    All,
    Today,
    Week,
    Month,
    Year,
    Custom,
}

impl TransactionPeriod {
    pub const ALL: [Self; 6] = [Self::All, Self::Today, Self::Week, Self::Month, Self::Year, Self::Custom];

    /// Value used in the period `<select>`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::Custom => "custom",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Time",
            Self::Today => "Today",
            Self::Week => "Last 7 Days",
            Self::Month => "Last Month",
            Self::Year => "Last Year",
            Self::Custom => "Custom Range",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self::ALL.into_iter().find(|p| p.as_str() == value).unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub period: TransactionPeriod,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

impl TransactionFilter {
    /// Switch period; leaving `Custom` discards the custom range.
    pub fn set_period(&mut self, period: TransactionPeriod) {
        self.period = period;
        if period != TransactionPeriod::Custom {
            self.start_date = None;
            self.end_date = None;
        }
    }
}

/// Parse a `<input type="date">` value (`YYYY-MM-DD`).
#[must_use]
pub fn parse_date_input(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Transactions inside the filter's window, in their original order.
#[must_use]
pub fn filter_transactions(transactions: &[Transaction], filter: &TransactionFilter, now: OffsetDateTime) -> Vec<Transaction> {
    if filter.period == TransactionPeriod::All {
        return transactions.to_vec();
    }
    let offset = now.offset();
    let (from, until) = window(filter, now);
    transactions
        .iter()
        .filter(|tx| {
            let Some(at) = parse_timestamp(&tx.transaction_date, offset) else {
                return false;
            };
            from.is_none_or(|f| at >= f) && until.is_none_or(|u| at <= u)
        })
        .cloned()
        .collect()
}

fn window(filter: &TransactionFilter, now: OffsetDateTime) -> (Option<OffsetDateTime>, Option<OffsetDateTime>) {
    let offset = now.offset();
    match filter.period {
        TransactionPeriod::All => (None, None),
        TransactionPeriod::Today => (Some(now.replace_time(Time::MIDNIGHT)), None),
        TransactionPeriod::Week => (Some(now - Duration::days(7)), None),
        TransactionPeriod::Month => (Some(now.replace_date(months_before(now.date(), 1))), None),
        TransactionPeriod::Year => (Some(now.replace_date(months_before(now.date(), 12))), None),
        TransactionPeriod::Custom => (
            filter.start_date.map(|d| d.with_time(Time::MIDNIGHT).assume_offset(offset)),
            filter.end_date.map(|d| d.with_time(time!(23:59:59.999)).assume_offset(offset)),
        ),
    }
}

fn months_before(date: Date, months: u8) -> Date {
    let mut year = date.year();
    let mut month = date.month();
    for _ in 0..months {
        if month == Month::January {
            year -= 1;
        }
        month = month.previous();
    }
    (1..=date.day())
        .rev()
        .find_map(|day| Date::from_calendar_date(year, month, day).ok())
        .unwrap_or(date)
}
