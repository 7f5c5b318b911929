//! Ordered stage executor
//!
//! A [`Sequence`] is a list of [`Stage`]s. A stage marked `concurrent` joins
//! the group of the stage before it; groups run strictly one after another
//! and the stages inside a group run side by side. The executor is driven by
//! [`Sequence::advance`] with the time since the last call, and reports what
//! happened as [`StageEvent`]s. Time left over when a group finishes carries
//! into the next group, so the outcome depends only on the total time fed in.
//!
//! [`Sequence::cancel`] freezes the sequence: no further events are emitted
//! and values stop moving until the next [`Sequence::start`].

use std::fmt::Debug;
use std::ops::Range;
use std::time::Duration;

use super::tween::Tween;

/// One timed transition in a sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage<K> {
    pub id: K,
    pub tween: Tween,
    /// Run alongside the previous stage instead of after it
    pub concurrent: bool,
}

impl<K> Stage<K> {
    pub fn new(id: K, tween: Tween) -> Self {
        Self {
            id,
            tween,
            concurrent: false,
        }
    }

    pub fn concurrent(id: K, tween: Tween) -> Self {
        Self {
            id,
            tween,
            concurrent: true,
        }
    }
}

/// What the executor reports while advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageEvent<K> {
    Started(K),
    Completed(K),
    /// Every stage has completed
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Running { group: usize, elapsed: Duration },
    Finished,
    Cancelled,
}

/// Runs stages group by group
#[derive(Debug, Clone)]
pub struct Sequence<K> {
    stages: Vec<Stage<K>>,
    groups: Vec<Range<usize>>,
    values: Vec<f64>,
    state: State,
}

impl<K: Copy + PartialEq + Debug> Sequence<K> {
    pub fn new(stages: Vec<Stage<K>>) -> Self {
        let mut groups: Vec<Range<usize>> = Vec::new();
        for (index, stage) in stages.iter().enumerate() {
            match groups.last_mut() {
                Some(group) if stage.concurrent => group.end = index + 1,
                _ => groups.push(index..index + 1),
            }
        }
        let values = stages.iter().map(|s| s.tween.from).collect();

        Self {
            stages,
            groups,
            values,
            state: State::Idle,
        }
    }

    /// Start (or restart) from the first group
    pub fn start(&mut self) -> Vec<StageEvent<K>> {
        for (value, stage) in self.values.iter_mut().zip(&self.stages) {
            *value = stage.tween.from;
        }

        let mut events = Vec::new();
        if self.groups.is_empty() {
            self.state = State::Finished;
            events.push(StageEvent::Finished);
            return events;
        }

        self.state = State::Running {
            group: 0,
            elapsed: Duration::ZERO,
        };
        self.push_started(0, &mut events);
        // Zero-length groups finish immediately
        self.settle(&mut events);
        events
    }

    /// Move the clock forward by `dt`
    pub fn advance(&mut self, dt: Duration) -> Vec<StageEvent<K>> {
        let mut events = Vec::new();
        if let State::Running { group, elapsed } = self.state {
            self.state = State::Running {
                group,
                elapsed: elapsed + dt,
            };
            self.settle(&mut events);
        }
        events
    }

    /// Stop without completing; idempotent
    pub fn cancel(&mut self) {
        if matches!(self.state, State::Running { .. } | State::Idle) {
            self.state = State::Cancelled;
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running { .. })
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Finished)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.state, State::Cancelled)
    }

    /// Current value of a stage, `None` for an unknown id
    pub fn value(&self, id: K) -> Option<f64> {
        self.stages
            .iter()
            .position(|s| s.id == id)
            .map(|index| self.values[index])
    }

    /// The stage ids of the group that is currently running
    pub fn active_stages(&self) -> Vec<K> {
        match self.state {
            State::Running { group, .. } => self.stages[self.groups[group].clone()]
                .iter()
                .map(|s| s.id)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Update values and walk past every group the elapsed time covers
    fn settle(&mut self, events: &mut Vec<StageEvent<K>>) {
        while let State::Running { group, elapsed } = self.state {
            let range = self.groups[group].clone();
            for index in range.clone() {
                self.values[index] = self.stages[index].tween.value_at(elapsed);
            }

            let length = self.group_length(group);
            if elapsed < length {
                return;
            }

            for index in range {
                events.push(StageEvent::Completed(self.stages[index].id));
            }

            let next = group + 1;
            if next == self.groups.len() {
                self.state = State::Finished;
                events.push(StageEvent::Finished);
                return;
            }
            self.state = State::Running {
                group: next,
                elapsed: elapsed - length,
            };
            self.push_started(next, events);
        }
    }

    fn group_length(&self, group: usize) -> Duration {
        self.stages[self.groups[group].clone()]
            .iter()
            .map(|s| s.tween.total())
            .max()
            .unwrap_or(Duration::ZERO)
    }

    fn push_started(&self, group: usize, events: &mut Vec<StageEvent<K>>) {
        for stage in &self.stages[self.groups[group].clone()] {
            events.push(StageEvent::Started(stage.id));
        }
    }
}
