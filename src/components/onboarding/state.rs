// ABOUTME: State management for the onboarding wizard
// Tracks the current step, completed steps and derived progress

use std::collections::BTreeSet;

use crate::models::{StepCatalog, StepDescriptor};

/// Snapshot of wizard position and completion
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    /// Always within `0..step_count`
    pub current_step_index: usize,
    /// Subset of `0..step_count`
    pub completed_steps: BTreeSet<usize>,
    /// `completed_steps.len() / step_count * 100`
    pub progress_percent: f64,
}

impl WizardState {
    fn initial() -> Self {
        Self {
            current_step_index: 0,
            completed_steps: BTreeSet::new(),
            progress_percent: 0.0,
        }
    }
}

/// Result of [`WizardController::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Left `from` (now completed) and landed on `to`
    Moved { from: usize, to: usize },
    /// Already on the last step; it is now marked completed
    Completed,
}

/// Owns the wizard state and exposes the only operations that change it
#[derive(Debug, Clone)]
pub struct WizardController {
    catalog: StepCatalog,
    state: WizardState,
}

impl WizardController {
    /// Start at the first step with nothing completed
    pub fn new(catalog: StepCatalog) -> Self {
        Self {
            catalog,
            state: WizardState::initial(),
        }
    }

    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_step_index
    }

    pub fn current_step(&self) -> &StepDescriptor {
        // The catalog is never empty and the index is always clamped
        &self.catalog.steps()[self.state.current_step_index]
    }

    pub fn completed_steps(&self) -> &BTreeSet<usize> {
        &self.state.completed_steps
    }

    pub fn progress_percent(&self) -> f64 {
        self.state.progress_percent
    }

    /// Progress as a ratio in `[0.0, 1.0]`
    pub fn progress_ratio(&self) -> f64 {
        (self.state.progress_percent / 100.0).clamp(0.0, 1.0)
    }

    fn last_index(&self) -> usize {
        self.step_count() - 1
    }

    /// Jump to a step. Out-of-range indices clamp to the last step.
    pub fn go_to_step(&mut self, index: usize) {
        let target = index.min(self.last_index());
        if target != self.state.current_step_index {
            tracing::debug!(from = self.state.current_step_index, to = target, "go to step");
        }
        self.state.current_step_index = target;
    }

    /// Complete the current step and move forward, or complete the final step in place
    pub fn advance(&mut self) -> Advance {
        let from = self.state.current_step_index;
        self.mark_completed(from);

        if self.is_last_step() {
            tracing::info!(step = from, "final step completed");
            return Advance::Completed;
        }

        let to = from + 1;
        self.state.current_step_index = to;
        tracing::debug!(from, to, "advanced");
        Advance::Moved { from, to }
    }

    /// Move back one step. Returns false at the first step.
    pub fn retreat(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.state.current_step_index -= 1;
        tracing::debug!(to = self.state.current_step_index, "retreated");
        true
    }

    /// Mark a step completed. Repeats and out-of-range indices are ignored.
    pub fn mark_completed(&mut self, index: usize) {
        if index >= self.step_count() {
            return;
        }
        if self.state.completed_steps.insert(index) {
            self.recompute_progress();
        }
    }

    fn recompute_progress(&mut self) {
        #[allow(clippy::cast_precision_loss)]
        let percent =
            self.state.completed_steps.len() as f64 / self.step_count() as f64 * 100.0;
        self.state.progress_percent = percent;
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.state.completed_steps.contains(&index)
    }

    pub fn is_first_step(&self) -> bool {
        self.state.current_step_index == 0
    }

    /// Check if we're on the final step
    pub fn is_last_step(&self) -> bool {
        self.state.current_step_index == self.last_index()
    }

    pub fn can_go_back(&self) -> bool {
        !self.is_first_step()
    }

    /// The final step has been completed
    pub fn is_finished(&self) -> bool {
        self.is_completed(self.last_index())
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new(StepCatalog::builtin())
    }
}
