//! Snapshot summary formatting
//!
//! Formats the balance figures and the spending list for terminal output.

use tabled::{settings::Style, Table, Tabled};

use crate::models::{Activity, FinancialSnapshot};

#[derive(Tabled)]
struct ActivityRow {
    #[tabled(rename = "Activity")]
    label: String,
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the balance block: balance, income, progress and fill
pub fn format_snapshot(snapshot: &FinancialSnapshot, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Balance:   {}\n",
        snapshot.balance().format_currency(symbol)
    ));
    output.push_str(&format!(
        "Out of:    {}\n",
        snapshot.total_income.format_currency(symbol)
    ));
    output.push_str(&format!(
        "Expenses:  {}\n",
        snapshot.total_expenses.format_currency(symbol)
    ));
    output.push_str(&format!(
        "Today:     -{}\n",
        snapshot.today_spending().format_currency(symbol)
    ));
    output.push_str(&format!(
        "Progress:  {}%\n",
        format_percent(snapshot.progress_percentage())
    ));
    output.push_str(&format!(
        "Fill:      {}%\n",
        format_percent(snapshot.fill_percentage())
    ));
    output
}

/// Format the spending list as a table
pub fn format_activity_table(activities: &[Activity], symbol: &str) -> String {
    if activities.is_empty() {
        return "No activity.".to_string();
    }

    let rows = activities.iter().map(|activity| ActivityRow {
        label: activity.label.clone(),
        when: activity.date_label(),
        amount: activity.amount_label(symbol),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Whole numbers without decimals, everything else to one decimal place
fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
