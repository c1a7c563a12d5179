use crate::mutation::{DomMutation, Target};

pub const VISIBLE_CLASS: &str = "is-visible";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Unobserved,
    Observed,
    Triggered,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Flag the element and stop observing it.
    Trigger,
    Ignore,
}

/// One-shot visibility latch per registered element. `Triggered` is
/// terminal.
#[derive(Clone, Debug)]
pub struct RevealLatch {
    threshold: f64,
    states: Vec<RevealState>,
}

impl RevealLatch {
    pub fn new(threshold: f64, count: usize) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            states: vec![RevealState::Unobserved; count],
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    /// Returns false for unknown indices and for elements already past
    /// `Unobserved`.
    pub fn observe(&mut self, index: usize) -> bool {
        match self.states.get_mut(index) {
            Some(state @ RevealState::Unobserved) => {
                *state = RevealState::Observed;
                true
            }
            _ => false,
        }
    }

    pub fn on_intersection(
        &mut self,
        index: usize,
        is_intersecting: bool,
        ratio: f64,
    ) -> RevealOutcome {
        let Some(state) = self.states.get_mut(index) else {
            return RevealOutcome::Ignore;
        };
        if *state != RevealState::Observed || !is_intersecting {
            return RevealOutcome::Ignore;
        }
        // The observer reports crossings in both directions; a zero
        // threshold accepts any intersection.
        if self.threshold > 0.0 && ratio + f64::EPSILON < self.threshold {
            return RevealOutcome::Ignore;
        }
        *state = RevealState::Triggered;
        RevealOutcome::Trigger
    }

    pub fn mutation(index: usize) -> DomMutation {
        DomMutation::AddClass {
            target: Target::Revealed(index),
            class: VISIBLE_CLASS,
        }
    }

    pub fn triggered_count(&self) -> usize {
        self.states
            .iter()
            .filter(|state| **state == RevealState::Triggered)
            .count()
    }
}
