//! Home screen entrance animation
//!
//! [`BalanceAnimationController`] runs the balance card through four groups:
//! entrance (fade with slide), balance count-up, progress fill and chart
//! reveal. Spending list rows get their own timelines, staggered by position
//! and independent of the main sequence.

use std::time::Duration;

use tracing::debug;

use super::easing::Easing;
use super::sequence::{Sequence, Stage, StageEvent};
use super::tween::Tween;
use crate::models::{FinancialSnapshot, Money};

pub const ENTRANCE_DURATION: Duration = Duration::from_millis(800);
pub const COUNT_UP_DURATION: Duration = Duration::from_millis(1000);
pub const PROGRESS_FILL_DURATION: Duration = Duration::from_millis(1200);
pub const CHART_REVEAL_DURATION: Duration = Duration::from_millis(800);
pub const ITEM_ENTRANCE_DURATION: Duration = Duration::from_millis(600);
pub const ITEM_STAGGER: Duration = Duration::from_millis(200);

/// Rows the card starts below its resting place
pub const SLIDE_DISTANCE: f64 = 50.0;
pub const ITEM_SLIDE_DISTANCE: f64 = 30.0;
pub const CHART_SCALE_FROM: f64 = 0.9;
pub const BALANCE_SCALE_FROM: f64 = 0.8;

/// Stages of the balance card sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalanceStage {
    Fade,
    Slide,
    BalanceCountUp,
    ProgressFill,
    ChartReveal,
    ChartScale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemStage {
    Fade,
    Slide,
}

/// Everything the home view needs to draw the card at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceFrame {
    pub opacity: f64,
    pub slide_offset: f64,
    pub shown_balance: Money,
    pub balance_scale: f64,
    pub fill_percentage: f64,
    pub chart_opacity: f64,
    pub chart_scale: f64,
}

/// Entrance state of one spending list row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemFrame {
    pub opacity: f64,
    pub slide_offset: f64,
}

impl ItemFrame {
    pub const SETTLED: ItemFrame = ItemFrame {
        opacity: 1.0,
        slide_offset: 0.0,
    };

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

pub struct BalanceAnimationController {
    snapshot: FinancialSnapshot,
    sequence: Sequence<BalanceStage>,
    items: Vec<Sequence<ItemStage>>,
}

impl Default for BalanceAnimationController {
    fn default() -> Self {
        Self::new()
    }
}

impl BalanceAnimationController {
    pub fn new() -> Self {
        let snapshot = FinancialSnapshot::default();
        Self {
            snapshot,
            sequence: build_sequence(&snapshot),
            items: Vec::new(),
        }
    }

    /// Build the sequence for `snapshot` and run it from the first stage
    ///
    /// Calling this again while running restarts from the beginning.
    pub fn start(&mut self, snapshot: &FinancialSnapshot) -> Vec<StageEvent<BalanceStage>> {
        self.snapshot = *snapshot;
        self.sequence = build_sequence(snapshot);
        let events = self.sequence.start();
        log_events(&events);
        events
    }

    /// Give each of `count` rows its own delayed entrance
    pub fn stagger_items(&mut self, count: usize) {
        self.items = (0..count).map(item_sequence).collect();
        for item in &mut self.items {
            item.start();
        }
    }

    /// Move every timeline forward by `dt`, returning the card's stage events
    pub fn advance(&mut self, dt: Duration) -> Vec<StageEvent<BalanceStage>> {
        for item in &mut self.items {
            item.advance(dt);
        }
        let events = self.sequence.advance(dt);
        log_events(&events);
        events
    }

    /// Stop the card and row timelines where they are
    pub fn cancel(&mut self) {
        if self.sequence.is_running() {
            debug!("balance animation cancelled");
        }
        self.sequence.cancel();
        for item in &mut self.items {
            item.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.sequence.is_running() || self.items.iter().any(|item| item.is_running())
    }

    pub fn is_finished(&self) -> bool {
        self.sequence.is_finished()
    }

    pub fn snapshot(&self) -> &FinancialSnapshot {
        &self.snapshot
    }

    pub fn frame(&self) -> BalanceFrame {
        let value = |stage| self.sequence.value(stage).unwrap_or(0.0);
        let count_up = value(BalanceStage::BalanceCountUp);
        let balance = self.snapshot.balance().as_major();

        BalanceFrame {
            opacity: value(BalanceStage::Fade),
            slide_offset: value(BalanceStage::Slide),
            shown_balance: Money::from_major(balance * count_up),
            balance_scale: BALANCE_SCALE_FROM + (1.0 - BALANCE_SCALE_FROM) * count_up,
            fill_percentage: value(BalanceStage::ProgressFill),
            chart_opacity: value(BalanceStage::ChartReveal),
            chart_scale: value(BalanceStage::ChartScale),
        }
    }

    /// Frame for the row at `index`; rows without a timeline are settled
    pub fn item_frame(&self, index: usize) -> ItemFrame {
        match self.items.get(index) {
            Some(item) => ItemFrame {
                opacity: item.value(ItemStage::Fade).unwrap_or(1.0),
                slide_offset: item.value(ItemStage::Slide).unwrap_or(0.0),
            },
            None => ItemFrame::SETTLED,
        }
    }
}

fn build_sequence(snapshot: &FinancialSnapshot) -> Sequence<BalanceStage> {
    let ease = |from, to, duration| Tween::new(from, to, duration).with_easing(Easing::OutCubic);

    Sequence::new(vec![
        Stage::new(BalanceStage::Fade, ease(0.0, 1.0, ENTRANCE_DURATION)),
        Stage::concurrent(
            BalanceStage::Slide,
            ease(SLIDE_DISTANCE, 0.0, ENTRANCE_DURATION),
        ),
        Stage::new(
            BalanceStage::BalanceCountUp,
            ease(0.0, 1.0, COUNT_UP_DURATION),
        ),
        Stage::new(
            BalanceStage::ProgressFill,
            ease(0.0, snapshot.fill_percentage(), PROGRESS_FILL_DURATION),
        ),
        Stage::new(
            BalanceStage::ChartReveal,
            ease(0.0, 1.0, CHART_REVEAL_DURATION),
        ),
        Stage::concurrent(
            BalanceStage::ChartScale,
            ease(CHART_SCALE_FROM, 1.0, CHART_REVEAL_DURATION),
        ),
    ])
}

/// Row `index` starts after `(index + 1) * ITEM_STAGGER`
fn item_sequence(index: usize) -> Sequence<ItemStage> {
    let delay = ITEM_STAGGER * (index as u32 + 1);
    let tween = |from, to| {
        Tween::new(from, to, ITEM_ENTRANCE_DURATION)
            .with_delay(delay)
            .with_easing(Easing::OutCubic)
    };
    Sequence::new(vec![
        Stage::new(ItemStage::Fade, tween(0.0, 1.0)),
        Stage::concurrent(ItemStage::Slide, tween(ITEM_SLIDE_DISTANCE, 0.0)),
    ])
}

fn log_events(events: &[StageEvent<BalanceStage>]) {
    for event in events {
        match event {
            StageEvent::Started(stage) => debug!(?stage, "stage started"),
            StageEvent::Completed(stage) => debug!(?stage, "stage completed"),
            StageEvent::Finished => debug!("balance animation finished"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn seed() -> FinancialSnapshot {
        FinancialSnapshot::new(
            Money::from_dollars_cents(5000, 0),
            Money::from_dollars_cents(3200, 0),
        )
    }

    #[test]
    fn test_stage_order() {
        let mut controller = BalanceAnimationController::new();
        let events = controller.start(&seed());
        assert_eq!(
            events,
            vec![
                StageEvent::Started(BalanceStage::Fade),
                StageEvent::Started(BalanceStage::Slide),
            ]
        );

        let events = controller.advance(ENTRANCE_DURATION);
        assert_eq!(
            events,
            vec![
                StageEvent::Completed(BalanceStage::Fade),
                StageEvent::Completed(BalanceStage::Slide),
                StageEvent::Started(BalanceStage::BalanceCountUp),
            ]
        );

        let events = controller.advance(COUNT_UP_DURATION);
        assert_eq!(
            events,
            vec![
                StageEvent::Completed(BalanceStage::BalanceCountUp),
                StageEvent::Started(BalanceStage::ProgressFill),
            ]
        );

        let events = controller.advance(PROGRESS_FILL_DURATION);
        assert_eq!(
            events,
            vec![
                StageEvent::Completed(BalanceStage::ProgressFill),
                StageEvent::Started(BalanceStage::ChartReveal),
                StageEvent::Started(BalanceStage::ChartScale),
            ]
        );

        let events = controller.advance(CHART_REVEAL_DURATION);
        assert_eq!(events.last(), Some(&StageEvent::Finished));
        assert!(controller.is_finished());
    }

    #[test]
    fn test_final_frame() {
        let mut controller = BalanceAnimationController::new();
        controller.start(&seed());
        controller.advance(ms(10_000));

        let frame = controller.frame();
        assert_eq!(frame.opacity, 1.0);
        assert_eq!(frame.slide_offset, 0.0);
        assert_eq!(frame.shown_balance, Money::from_dollars_cents(1800, 0));
        assert_eq!(frame.balance_scale, 1.0);
        assert_eq!(frame.fill_percentage, 36.0);
        assert_eq!(frame.chart_opacity, 1.0);
        assert_eq!(frame.chart_scale, 1.0);
    }

    #[test]
    fn test_frame_before_count_up() {
        let mut controller = BalanceAnimationController::new();
        controller.start(&seed());
        let frame = controller.frame();
        assert_eq!(frame.opacity, 0.0);
        assert_eq!(frame.slide_offset, SLIDE_DISTANCE);
        assert_eq!(frame.shown_balance, Money::zero());
        assert_eq!(frame.balance_scale, BALANCE_SCALE_FROM);
        assert_eq!(frame.chart_scale, CHART_SCALE_FROM);
    }

    #[test]
    fn test_overspent_fill_stays_empty() {
        let snapshot = FinancialSnapshot::new(
            Money::from_dollars_cents(1000, 0),
            Money::from_dollars_cents(1500, 0),
        );
        let mut controller = BalanceAnimationController::new();
        controller.start(&snapshot);
        controller.advance(ms(10_000));

        let frame = controller.frame();
        assert_eq!(frame.fill_percentage, 0.0);
        assert_eq!(frame.shown_balance, Money::from_dollars_cents(-500, 0));
        assert_eq!(frame.shown_balance.format_grouped(), "-500");
    }

    #[test]
    fn test_cancel_stops_events() {
        let mut controller = BalanceAnimationController::new();
        controller.start(&seed());
        controller.advance(ms(100));
        controller.cancel();

        assert!(controller.advance(ms(10_000)).is_empty());
        assert!(!controller.is_running());
        controller.cancel();
        assert!(controller.advance(ms(10)).is_empty());
    }

    #[test]
    fn test_cancel_before_start_and_after_finish() {
        let mut controller = BalanceAnimationController::new();
        controller.cancel();
        assert!(controller.advance(ms(100)).is_empty());

        controller.start(&seed());
        controller.advance(ms(10_000));
        controller.cancel();
        assert!(controller.is_finished());
    }

    #[test]
    fn test_restart_replays_from_first_stage() {
        let mut controller = BalanceAnimationController::new();
        controller.start(&seed());
        controller.advance(ms(2_000));
        controller.cancel();

        let events = controller.start(&seed());
        assert_eq!(events[0], StageEvent::Started(BalanceStage::Fade));
        assert_eq!(controller.frame().opacity, 0.0);
        assert!(controller.is_running());
    }

    #[test]
    fn test_restart_picks_up_new_snapshot() {
        let mut controller = BalanceAnimationController::new();
        controller.start(&seed());
        let mut updated = seed();
        updated.total_expenses = Money::from_dollars_cents(1000, 0);
        controller.start(&updated);
        controller.advance(ms(10_000));
        assert_eq!(controller.frame().fill_percentage, 80.0);
        assert_eq!(controller.snapshot(), &updated);
    }

    #[test]
    fn test_item_stagger() {
        let mut controller = BalanceAnimationController::new();
        controller.stagger_items(4);

        controller.advance(ms(200));
        assert_eq!(controller.item_frame(0).opacity, 0.0);
        assert_eq!(controller.item_frame(0).slide_offset, ITEM_SLIDE_DISTANCE);

        controller.advance(ms(600));
        assert_eq!(controller.item_frame(0), ItemFrame::SETTLED);
        assert!(controller.item_frame(1).opacity > 0.0);
        assert!(controller.item_frame(1).opacity < 1.0);
        assert_eq!(controller.item_frame(3).opacity, 0.0);

        controller.advance(ms(600));
        assert_eq!(controller.item_frame(3), ItemFrame::SETTLED);
        assert_eq!(controller.item_frame(99), ItemFrame::SETTLED);
    }

    #[test]
    fn test_items_do_not_wait_for_card() {
        let mut controller = BalanceAnimationController::new();
        controller.start(&seed());
        controller.stagger_items(1);
        controller.advance(ms(800));
        assert_eq!(controller.item_frame(0), ItemFrame::SETTLED);
        assert!(controller.is_running());
    }
}
