//! # Step Catalog
//!
//! The ordered, immutable list of wizard steps. Catalog order is the
//! canonical navigation order and positions are 1-based.
//!
//! ```text
//! 01 info      Your Info
//! 02 patients  Add Patients
//! 03 complete  Complete
//! ```

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Step id of the operator identity form
pub const STEP_INFO: &str = "info";
/// Step id of the patient collection form
pub const STEP_PATIENTS: &str = "patients";
/// Step id of the review screen
pub const STEP_COMPLETE: &str = "complete";

static REFERENCE_STEPS: Lazy<StepCatalog> = Lazy::new(|| StepCatalog {
    steps: vec![
        StepDescriptor::new(
            STEP_INFO,
            "Your Info",
            "Tell us who you are so we can personalize your workspace.",
        ),
        StepDescriptor::new(
            STEP_PATIENTS,
            "Add Patients",
            "Capture critical patient details with a responsive, dynamic form.",
        ),
        StepDescriptor::new(
            STEP_COMPLETE,
            "Complete",
            "Review everything at a glance before completing setup.",
        ),
    ],
});

/// One wizard step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDescriptor {
    /// Unique within its catalog
    pub id: String,
    pub title: String,
    pub subtitle: String,
}

impl StepDescriptor {
    pub fn new(id: impl Into<String>, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        StepDescriptor {
            id: id.into(),
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// Non-empty ordered list of steps with unique ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepCatalog {
    steps: Vec<StepDescriptor>,
}

impl StepCatalog {
    /// Build a catalog from steps in navigation order.
    ///
    /// Returns `None` for an empty list or when two steps share an id.
    ///
    /// ```rust
    /// use wizard_core::steps::{StepCatalog, StepDescriptor};
    ///
    /// let catalog = StepCatalog::new(vec![
    ///     StepDescriptor::new("a", "First", ""),
    ///     StepDescriptor::new("b", "Second", ""),
    /// ])
    /// .unwrap();
    /// assert_eq!(catalog.len(), 2);
    ///
    /// assert!(StepCatalog::new(vec![]).is_none());
    /// ```
    pub fn new(steps: Vec<StepDescriptor>) -> Option<Self> {
        if steps.is_empty() {
            return None;
        }
        let mut seen = HashSet::new();
        if !steps.iter().all(|s| seen.insert(s.id.as_str())) {
            return None;
        }
        Some(StepCatalog { steps })
    }

    /// The three-step clinic onboarding flow.
    pub fn reference() -> Self {
        REFERENCE_STEPS.clone()
    }

    /// Number of steps (always at least 1)
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at a 1-based position.
    pub fn get(&self, position: usize) -> Option<&StepDescriptor> {
        position.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    /// 1-based position of the step with the given id.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id).map(|i| i + 1)
    }

    pub fn as_slice(&self) -> &[StepDescriptor] {
        &self.steps
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepDescriptor> {
        self.steps.iter()
    }
}

impl Default for StepCatalog {
    fn default() -> Self {
        StepCatalog::reference()
    }
}

/// Where a step sits relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// Before the current step
    Complete,
    /// The current step
    Active,
    /// After the current step
    Upcoming,
}

impl StepStatus {
    /// Status of `position` when the wizard is on `current`.
    pub fn relative_to(position: usize, current: usize) -> Self {
        use std::cmp::Ordering;
        match position.cmp(&current) {
            Ordering::Less => StepStatus::Complete,
            Ordering::Equal => StepStatus::Active,
            Ordering::Greater => StepStatus::Upcoming,
        }
    }
}

/// A step as shown in the step list, with its status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepChip {
    pub position: usize,
    /// Zero-padded position, e.g. "01"
    pub index_label: String,
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub status: StepStatus,
}
