//! # Wizard Session
//!
//! [`WizardSession`] is the aggregate a front end talks to: navigation,
//! operator info, the patient roster and the review summary for one run of
//! the wizard. It lives in memory only. A front end serving several clients
//! creates one session per client; nothing is shared between sessions.
//!
//! ## Structure
//!
//! ```text
//! WizardSession
//! ├── controller: WizardController (current step, step catalog)
//! ├── operator: OperatorInfo
//! └── roster: PatientRoster (patients, draft, last validation error)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wizard_core::patient::DraftField;
//! use wizard_core::session::WizardSession;
//!
//! let mut session = WizardSession::new();
//! session.update_draft_field(DraftField::Name, "Ana");
//! session.update_draft_field(DraftField::Age, "40");
//! session.commit_draft().unwrap();
//!
//! session.go_next();
//! session.go_next();
//! assert!(session.is_last());
//!
//! let summary = session.summary();
//! assert_eq!(summary.patient_names, vec!["Ana"]);
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::controller::WizardController;
use crate::errors::WizardResult;
use crate::operator::{OperatorField, OperatorInfo};
use crate::patient::{DraftField, PatientDraft, PatientRecord};
use crate::roster::PatientRoster;
use crate::steps::{StepCatalog, StepDescriptor};
use crate::summary::{self, SummaryView};

/// The value handed to a [`WorkspaceProvisioner`] when the wizard finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionExport {
    pub operator_info: OperatorInfo,
    pub patients: Vec<PatientRecord>,
}

/// Receives the finished session and sets up the workspace.
///
/// The wizard itself does nothing on finish beyond calling this.
pub trait WorkspaceProvisioner {
    type Error;

    fn provision(&mut self, export: SessionExport) -> Result<(), Self::Error>;
}

/// In-memory state of one wizard run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WizardSession {
    controller: WizardController,
    operator: OperatorInfo,
    roster: PatientRoster,
}

impl WizardSession {
    /// Fresh session on the first step of the reference flow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh session over a custom step catalog.
    pub fn with_catalog(catalog: StepCatalog) -> Self {
        WizardSession {
            controller: WizardController::with_catalog(catalog),
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn go_next(&mut self) -> usize {
        self.controller.go_next()
    }

    pub fn go_back(&mut self) -> usize {
        self.controller.go_back()
    }

    /// See [`WizardController::jump_to`].
    pub fn jump_to(&mut self, position: usize) -> bool {
        self.controller.jump_to(position)
    }

    pub fn current_step(&self) -> &StepDescriptor {
        self.controller.current_step()
    }

    pub fn current_index(&self) -> usize {
        self.controller.current_index()
    }

    pub fn is_first(&self) -> bool {
        self.controller.is_first()
    }

    pub fn is_last(&self) -> bool {
        self.controller.is_last()
    }

    pub fn controller(&self) -> &WizardController {
        &self.controller
    }

    // ------------------------------------------------------------------
    // Operator info
    // ------------------------------------------------------------------

    pub fn operator_info(&self) -> &OperatorInfo {
        &self.operator
    }

    pub fn update_operator_field(&mut self, field: OperatorField, value: impl Into<String>) {
        self.operator = self.operator.with_field(field, value);
    }

    // ------------------------------------------------------------------
    // Patients
    // ------------------------------------------------------------------

    pub fn update_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.roster.update_draft_field(field, value);
    }

    /// See [`PatientRoster::commit_draft`].
    pub fn commit_draft(&mut self) -> WizardResult<PatientRecord> {
        self.roster.commit_draft()
    }

    pub fn remove_patient(&mut self, id: &Uuid) -> Option<PatientRecord> {
        self.roster.remove_patient(id)
    }

    /// See [`PatientRoster::reset_draft`].
    pub fn reset_draft(&mut self) {
        self.roster.reset_draft();
    }

    pub fn patients(&self) -> &[PatientRecord] {
        self.roster.patients()
    }

    pub fn draft(&self) -> &PatientDraft {
        self.roster.draft()
    }

    pub fn last_validation_error(&self) -> Option<&str> {
        self.roster.last_validation_error()
    }

    pub fn roster(&self) -> &PatientRoster {
        &self.roster
    }

    // ------------------------------------------------------------------
    // Review and finish
    // ------------------------------------------------------------------

    pub fn summary(&self) -> SummaryView {
        summary::project(&self.operator, self.roster.patients())
    }

    /// Copy of the operator info and roster.
    pub fn export(&self) -> SessionExport {
        SessionExport {
            operator_info: self.operator.clone(),
            patients: self.roster.patients().to_vec(),
        }
    }

    /// Hand the session to `provisioner`. The session is left as it was.
    pub fn finalize<P: WorkspaceProvisioner>(&self, provisioner: &mut P) -> Result<(), P::Error> {
        info!(patients = self.roster.count(), "finalizing wizard session");
        provisioner.provision(self.export())
    }
}
