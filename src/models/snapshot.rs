//! Financial snapshot
//!
//! The income and expense totals the home screen works from, plus the
//! figures derived from them. Nothing here is persisted.

use super::entry::EntryKind;
use super::money::Money;

/// Upper bound of the progress percentage
pub const PROGRESS_MAX: f64 = 100.0;

/// Current income/expense totals for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FinancialSnapshot {
    pub total_income: Money,
    pub total_expenses: Money,
}

impl FinancialSnapshot {
    pub fn new(total_income: Money, total_expenses: Money) -> Self {
        Self {
            total_income,
            total_expenses,
        }
    }

    /// Income minus expenses; negative when overspent
    pub fn balance(&self) -> Money {
        self.total_income - self.total_expenses
    }

    /// Balance as a share of income, capped at 100 but not floored
    ///
    /// Returns 0 when there is no income. An overspent snapshot yields a
    /// negative value; only [`FinancialSnapshot::fill_percentage`] clamps it.
    pub fn progress_percentage(&self) -> f64 {
        if self.total_income.is_zero() {
            return 0.0;
        }
        let ratio = self.balance().as_major() / self.total_income.as_major() * 100.0;
        if ratio.is_finite() {
            ratio.min(PROGRESS_MAX)
        } else {
            0.0
        }
    }

    /// Width of the progress bar fill, clamped to [0, 100]
    pub fn fill_percentage(&self) -> f64 {
        self.progress_percentage().clamp(0.0, PROGRESS_MAX)
    }

    /// The "Today" figure: a tenth of expenses, rounded to whole units
    pub fn today_spending(&self) -> Money {
        let tenth = self.total_expenses.as_major() * 0.1;
        Money::from_major(tenth.round())
    }

    /// Income and expense shares of the overview chart, each in [0, 1]
    pub fn chart_shares(&self) -> (f64, f64) {
        let income = self.total_income.as_major().max(0.0);
        let expenses = self.total_expenses.as_major().max(0.0);
        let total = income + expenses;
        if total <= 0.0 {
            return (0.0, 0.0);
        }
        (income / total, expenses / total)
    }

    /// Add an amount to the total matching the entry kind
    ///
    /// Returns false and leaves both totals untouched when the sum would
    /// overflow.
    pub fn record(&mut self, kind: EntryKind, amount: Money) -> bool {
        let total = match kind {
            EntryKind::Income => &mut self.total_income,
            EntryKind::Expense => &mut self.total_expenses,
        };
        match total.checked_add(amount) {
            Some(sum) => {
                *total = sum;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(income: i64, expenses: i64) -> FinancialSnapshot {
        FinancialSnapshot::new(
            Money::from_dollars_cents(income, 0),
            Money::from_dollars_cents(expenses, 0),
        )
    }

    #[test]
    fn test_zero_income_progress_is_zero() {
        let s = snapshot(0, 0);
        assert_eq!(s.progress_percentage(), 0.0);
        assert_eq!(s.fill_percentage(), 0.0);

        let overspent = snapshot(0, 50);
        assert_eq!(overspent.progress_percentage(), 0.0);
        assert_eq!(overspent.balance(), Money::from_dollars_cents(-50, 0));
    }

    #[test]
    fn test_progress_percentage() {
        assert_eq!(snapshot(1000, 200).progress_percentage(), 80.0);
    }

    #[test]
    fn test_overspent_clamps_fill_only() {
        let s = snapshot(1000, 1500);
        assert_eq!(s.balance().format_grouped(), "-500");
        assert_eq!(s.progress_percentage(), -50.0);
        assert_eq!(s.fill_percentage(), 0.0);
    }

    #[test]
    fn test_seed_scenario() {
        let s = snapshot(5000, 3200);
        assert_eq!(s.balance(), Money::from_dollars_cents(1800, 0));
        assert_eq!(s.fill_percentage(), 36.0);
        assert_eq!(s.today_spending(), Money::from_dollars_cents(320, 0));
    }

    #[test]
    fn test_chart_shares() {
        let (income, expenses) = snapshot(3000, 1000).chart_shares();
        assert_eq!(income, 0.75);
        assert_eq!(expenses, 0.25);
        assert_eq!(snapshot(0, 0).chart_shares(), (0.0, 0.0));
    }

    #[test]
    fn test_record() {
        let mut s = snapshot(5000, 3200);
        assert!(s.record(EntryKind::Expense, Money::from_cents(450)));
        assert_eq!(s.total_expenses, Money::from_cents(320_450));
        assert!(s.record(EntryKind::Income, Money::from_dollars_cents(100, 0)));
        assert_eq!(s.total_income, Money::from_dollars_cents(5100, 0));
    }

    #[test]
    fn test_record_rejects_overflow() {
        let mut s = FinancialSnapshot::new(Money::from_cents(i64::MAX - 10), Money::zero());
        let before = s;
        assert!(!s.record(EntryKind::Income, Money::from_cents(11)));
        assert_eq!(s, before);
        assert!(s.record(EntryKind::Income, Money::from_cents(10)));
        assert_eq!(s.total_income, Money::from_cents(i64::MAX));
    }
}
