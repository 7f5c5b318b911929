//! Core data models for Cravox
//!
//! Money, the session's financial snapshot, entry kinds and the rows of the
//! spending list.

pub mod activity;
pub mod entry;
pub mod money;
pub mod snapshot;

pub use activity::{seed_activities, Activity, ActivityAccent};
pub use entry::EntryKind;
pub use money::{Money, MoneyParseError};
pub use snapshot::FinancialSnapshot;
