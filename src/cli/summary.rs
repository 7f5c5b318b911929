//! Summary CLI command
//!
//! Prints the figures the home screen animates towards.

use crate::config::settings::Settings;
use crate::display::summary::{format_activity_table, format_snapshot};
use crate::error::{CravoxError, CravoxResult};
use crate::models::{seed_activities, FinancialSnapshot, Money};

/// Print the snapshot summary, overriding the seed totals when given
pub fn handle_summary_command(
    settings: &Settings,
    income: Option<String>,
    expenses: Option<String>,
) -> CravoxResult<()> {
    let total_income = parse_total("income", income.as_deref(), settings.seed_income)?;
    let total_expenses = parse_total("expenses", expenses.as_deref(), settings.seed_expenses)?;
    let snapshot = FinancialSnapshot::new(total_income, total_expenses);
    let symbol = &settings.currency_symbol;

    println!("Cravox Summary");
    println!("==============");
    print!("{}", format_snapshot(&snapshot, symbol));
    println!();
    println!("Spending");
    println!("{}", format_activity_table(&seed_activities(), symbol));

    Ok(())
}

fn parse_total(name: &str, value: Option<&str>, fallback: Money) -> CravoxResult<Money> {
    match value {
        Some(raw) => Money::parse_non_negative(raw)
            .map_err(|e| CravoxError::Validation(format!("Invalid {}: {}", name, e))),
        None => Ok(fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_total_falls_back_to_seed() {
        let seed = Money::from_dollars_cents(5000, 0);
        assert_eq!(parse_total("income", None, seed).unwrap(), seed);
        assert_eq!(
            parse_total("income", Some("1000"), seed).unwrap(),
            Money::from_dollars_cents(1000, 0)
        );
    }

    #[test]
    fn test_parse_total_rejects_bad_input() {
        let seed = Money::zero();
        let err = parse_total("expenses", Some("abc"), seed).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("expenses"));
        assert!(parse_total("expenses", Some("-5"), seed).is_err());
    }
}
