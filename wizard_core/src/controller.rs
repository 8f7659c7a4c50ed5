//! # Wizard Navigation
//!
//! [`WizardController`] owns the current step position and the step catalog.
//! Every navigation call is total: moves past either end are clamped and
//! out-of-range jumps are ignored, so the position always satisfies
//! `1 <= current <= catalog.len()`.
//!
//! ## Example
//!
//! ```rust
//! use wizard_core::controller::WizardController;
//!
//! let mut wizard = WizardController::new();
//! assert!(wizard.is_first());
//!
//! wizard.go_next();
//! wizard.go_next();
//! assert_eq!(wizard.go_next(), 3); // clamped at the last step
//! assert!(wizard.is_last());
//!
//! wizard.jump_to(1);
//! assert_eq!(wizard.current_step().id, "info");
//! ```

use serde::Serialize;
use tracing::debug;

use crate::steps::{StepCatalog, StepChip, StepDescriptor, StepStatus};

/// Label of the primary footer action before the last step
pub const CONTINUE_LABEL: &str = "Continue";
/// Label of the primary footer action on the last step
pub const COMPLETE_LABEL: &str = "Complete";

/// Step navigation state.
#[derive(Debug, Clone, Serialize)]
pub struct WizardController {
    /// 1-based position in `catalog`
    current: usize,
    catalog: StepCatalog,
}

impl WizardController {
    /// Controller over the reference catalog, positioned on the first step.
    pub fn new() -> Self {
        Self::with_catalog(StepCatalog::reference())
    }

    /// Controller over a custom catalog, positioned on the first step.
    pub fn with_catalog(catalog: StepCatalog) -> Self {
        WizardController { current: 1, catalog }
    }

    /// Advance one step. No-op on the last step. Returns the new position.
    pub fn go_next(&mut self) -> usize {
        let next = (self.current + 1).min(self.catalog.len());
        self.move_to(next);
        self.current
    }

    /// Retreat one step. No-op on the first step. Returns the new position.
    pub fn go_back(&mut self) -> usize {
        let prev = self.current.saturating_sub(1).max(1);
        self.move_to(prev);
        self.current
    }

    /// Jump to any step by 1-based position, regardless of which steps
    /// have been visited. Out-of-range positions are ignored.
    ///
    /// Returns `true` when the position was in range.
    pub fn jump_to(&mut self, position: usize) -> bool {
        if position < 1 || position > self.catalog.len() {
            debug!(position, steps = self.catalog.len(), "ignoring out-of-range jump");
            return false;
        }
        self.move_to(position);
        true
    }

    fn move_to(&mut self, position: usize) {
        if position != self.current {
            debug!(from = self.current, to = position, "wizard step changed");
            self.current = position;
        }
    }

    /// Current 1-based position
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Descriptor of the current step
    pub fn current_step(&self) -> &StepDescriptor {
        // current is kept within 1..=len and the catalog is never empty
        &self.catalog.as_slice()[self.current - 1]
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.catalog.len()
    }

    pub fn step_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    /// "Step 2 of 3"
    pub fn step_label(&self) -> String {
        format!("Step {} of {}", self.current, self.catalog.len())
    }

    /// Share of the flow reached, counting the current step as reached.
    pub fn progress_percent(&self) -> f64 {
        self.current as f64 / self.catalog.len() as f64 * 100.0
    }

    /// Status of a 1-based position relative to the current step.
    pub fn step_status(&self, position: usize) -> StepStatus {
        StepStatus::relative_to(position, self.current)
    }

    /// Every catalog step with its position label and status.
    pub fn step_chips(&self) -> Vec<StepChip> {
        self.catalog
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let position = i + 1;
                StepChip {
                    position,
                    index_label: format!("{:02}", position),
                    id: step.id.clone(),
                    title: step.title.clone(),
                    subtitle: step.subtitle.clone(),
                    status: self.step_status(position),
                }
            })
            .collect()
    }

    /// Label of the primary footer action for the current step.
    pub fn primary_action_label(&self) -> &'static str {
        if self.is_last() {
            COMPLETE_LABEL
        } else {
            CONTINUE_LABEL
        }
    }
}

impl Default for WizardController {
    fn default() -> Self {
        WizardController::new()
    }
}
