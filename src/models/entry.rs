//! Entry kinds for the add-entry form

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a new entry adds to income or to expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Income,
    Expense,
}

impl EntryKind {
    /// Title-case name used in dialog titles and buttons
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Label of the category field
    pub fn field_label(&self) -> &'static str {
        match self {
            Self::Income => "Income Type",
            Self::Expense => "Expense Type",
        }
    }

    /// Placeholder shown in an empty category field
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Income => "e.g., Salary, Freelance",
            Self::Expense => "e.g., Food, Transport",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}
