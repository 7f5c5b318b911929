//! Time-driven animation
//!
//! Nothing in here reads a clock. The TUI loop measures the time between
//! ticks and feeds it to `advance`, which keeps every timeline testable with
//! plain durations.

pub mod balance;
pub mod easing;
pub mod press;
pub mod sequence;
pub mod tween;

pub use balance::{BalanceAnimationController, BalanceFrame, BalanceStage, ItemFrame};
pub use easing::Easing;
pub use press::PressFeedback;
pub use sequence::{Sequence, Stage, StageEvent};
pub use tween::Tween;
