//! Spending list rows
//!
//! The home screen shows a short list of recent activity. The list starts
//! with a fixed set of sample rows; entries added during the session are
//! pushed to the top.

use chrono::{NaiveDate, NaiveDateTime};

use super::entry::EntryKind;
use super::money::Money;

/// Accent used for an activity row's icon chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityAccent {
    Entertainment,
    Groceries,
    Phone,
    Other,
    Income,
    Expense,
}

/// One row in the spending list
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub label: String,
    pub occurred_at: NaiveDateTime,
    /// Signed amount: negative for spending
    pub amount: Money,
    pub accent: ActivityAccent,
}

impl Activity {
    pub fn new(
        label: impl Into<String>,
        occurred_at: NaiveDateTime,
        amount: Money,
        accent: ActivityAccent,
    ) -> Self {
        Self {
            label: label.into(),
            occurred_at,
            amount,
            accent,
        }
    }

    /// Build a row for an entry added through the form
    pub fn from_entry(kind: EntryKind, category: &str, amount: Money, at: NaiveDateTime) -> Self {
        let (signed, accent) = match kind {
            EntryKind::Income => (amount, ActivityAccent::Income),
            EntryKind::Expense => (-amount, ActivityAccent::Expense),
        };
        Self::new(category.trim(), at, signed, accent)
    }

    /// Timestamp in the list's short style, e.g. `Dec 10 • 22:05`
    pub fn date_label(&self) -> String {
        self.occurred_at.format("%b %d • %H:%M").to_string()
    }

    /// Signed amount with two decimals, e.g. `-$15.99`
    pub fn amount_label(&self, symbol: &str) -> String {
        if self.amount.is_positive() {
            format!("+{}", self.amount.format_with_symbol(symbol))
        } else {
            self.amount.format_with_symbol(symbol)
        }
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

/// The sample rows the spending list starts with
pub fn seed_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Netflix Inc.",
            at(2024, 12, 10, 22, 5),
            Money::from_cents(-1599),
            ActivityAccent::Entertainment,
        ),
        Activity::new(
            "Groceries",
            at(2024, 12, 9, 15, 30),
            Money::from_cents(-8520),
            ActivityAccent::Groceries,
        ),
        Activity::new(
            "AT&T",
            at(2024, 12, 8, 9, 15),
            Money::from_cents(-6500),
            ActivityAccent::Phone,
        ),
        Activity::new(
            "Other",
            at(2024, 12, 7, 14, 22),
            Money::from_cents(-4250),
            ActivityAccent::Other,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_rows() {
        let rows = seed_activities();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].label, "Netflix Inc.");
        assert_eq!(rows[0].date_label(), "Dec 10 • 22:05");
        assert_eq!(rows[0].amount_label("$"), "-$15.99");
        assert_eq!(rows[2].amount_label("$"), "-$65.00");
    }

    #[test]
    fn test_from_entry_signs_amount() {
        let when = at(2024, 12, 11, 8, 0);
        let expense = Activity::from_entry(EntryKind::Expense, " Coffee ", Money::from_cents(450), when);
        assert_eq!(expense.label, "Coffee");
        assert_eq!(expense.amount, Money::from_cents(-450));
        assert_eq!(expense.accent, ActivityAccent::Expense);

        let income = Activity::from_entry(EntryKind::Income, "Salary", Money::from_cents(10_000), when);
        assert_eq!(income.amount_label("$"), "+$100.00");
    }
}
