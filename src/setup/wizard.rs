//! Deployment wizard state and navigation

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::setup::content::StepContentProvider;
use crate::setup::error::WizardError;
use crate::setup::steps::Step;

/// How a step indicator should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Active,
    Completed,
    Skipped,
    Pending,
}

/// Position and skip history of one wizard session.
///
/// `current == step_count` is the terminal "completed" state. Every member
/// of `skipped` is an optional step ordinal below `step_count`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    current: usize,
    skipped: BTreeSet<usize>,
}

impl WizardState {
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn skipped(&self) -> &BTreeSet<usize> {
        &self.skipped
    }

    fn advance(&mut self) {
        // Leaving a skipped step through Next clears its skipped mark
        self.skipped.remove(&self.current);
        self.current += 1;
    }

    fn retreat(&mut self) -> Result<(), WizardError> {
        if self.current == 0 {
            return Err(WizardError::InvalidOperation {
                index: 0,
                reason: "cannot go back from the first step",
            });
        }
        self.current -= 1;
        Ok(())
    }

    fn skip(&mut self, steps: &[Step]) -> Result<(), WizardError> {
        let optional = steps.get(self.current).is_some_and(|s| s.optional);
        if !optional {
            return Err(WizardError::InvalidOperation {
                index: self.current,
                reason: "cannot skip a step that is not optional",
            });
        }
        self.skipped.insert(self.current);
        self.current += 1;
        Ok(())
    }
}

/// Owns the step table and the [`WizardState`] for one mounted wizard
#[derive(Debug, Clone)]
pub struct WizardController<P> {
    steps: Vec<Step>,
    provider: P,
    state: WizardState,
}

impl<P: StepContentProvider> WizardController<P> {
    pub fn new(steps: Vec<Step>, provider: P) -> Self {
        Self {
            steps,
            provider,
            state: WizardState::default(),
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current()
    }

    /// The step being shown, `None` once the wizard is complete
    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.state.current)
    }

    /// Move to the next step.
    ///
    /// There is no upper clamp: calling this from the terminal state is a
    /// caller error and still increments the index.
    pub fn advance(&mut self) {
        let from = self.state.current;
        if from >= self.step_count() {
            warn!(from, step_count = self.step_count(), "advance called past the last step");
        }
        self.state.advance();
        debug!(from, to = self.state.current, "wizard advanced");
    }

    /// Move to the previous step. Rejected at the first step.
    pub fn retreat(&mut self) -> Result<(), WizardError> {
        let from = self.state.current;
        self.state.retreat()?;
        debug!(from, to = self.state.current, "wizard retreated");
        Ok(())
    }

    /// Bypass the current step, which must be optional
    pub fn skip(&mut self) -> Result<(), WizardError> {
        let from = self.state.current;
        self.state.skip(&self.steps)?;
        debug!(from, to = self.state.current, "wizard skipped step");
        Ok(())
    }

    pub fn reset(&mut self) {
        self.state = WizardState::default();
        debug!("wizard reset");
    }

    /// Resolve the payload for `index` through the content provider
    pub fn content_for(&self, index: usize) -> Result<P::Payload, WizardError> {
        let step = self.steps.get(index).ok_or(WizardError::IndexOutOfRange {
            index,
            len: self.steps.len(),
        })?;
        Ok(self.provider.content(index, step))
    }

    pub fn is_terminal(&self) -> bool {
        self.state.current == self.steps.len()
    }

    /// True when the current step is the last real step (Next reads "Finish")
    pub fn is_last_step(&self) -> bool {
        !self.steps.is_empty() && self.state.current == self.steps.len() - 1
    }

    pub fn is_optional(&self, index: usize) -> bool {
        self.steps.get(index).is_some_and(|s| s.optional)
    }

    pub fn is_skipped(&self, index: usize) -> bool {
        self.state.skipped.contains(&index)
    }

    pub fn step_status(&self, index: usize) -> StepStatus {
        if index == self.state.current {
            StepStatus::Active
        } else if self.is_skipped(index) {
            StepStatus::Skipped
        } else if index < self.state.current {
            StepStatus::Completed
        } else {
            StepStatus::Pending
        }
    }
}
