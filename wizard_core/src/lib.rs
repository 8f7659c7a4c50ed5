//! # wizard_core - Clinic Setup Wizard Engine
//!
//! `wizard_core` holds the state behind the clinic onboarding wizard: which
//! step the operator is on, who the operator is, the patients collected so
//! far and the review summary. It has no rendering and no I/O, so any front
//! end (terminal, GUI, web handler) can drive it and it can be tested
//! directly.
//!
//! ## Design Philosophy
//!
//! - **Total navigation**: moves are clamped, bad jumps are ignored
//! - **One failure mode**: committing a patient without name or age
//! - **Value updates**: field edits replace the affected form as a whole
//! - **JSON-First**: all data types implement Serialize
//!
//! ## Quick Start
//!
//! ```rust
//! use wizard_core::operator::OperatorField;
//! use wizard_core::patient::DraftField;
//! use wizard_core::session::WizardSession;
//!
//! let mut session = WizardSession::new();
//! session.update_operator_field(OperatorField::Name, "Dr. Jamie Carter");
//!
//! session.go_next();
//! session.update_draft_field(DraftField::Name, "Ana");
//! session.update_draft_field(DraftField::Age, "40");
//! let record = session.commit_draft().unwrap();
//! assert_eq!(record.name(), "Ana");
//!
//! session.go_next();
//! let json = serde_json::to_string_pretty(&session.export()).unwrap();
//! assert!(json.contains("operatorInfo"));
//! ```
//!
//! ## Modules
//!
//! - [`session`] - Session aggregate and the finish hand-off
//! - [`controller`] - Step navigation
//! - [`steps`] - Step catalog
//! - [`operator`] - Operator identity form
//! - [`patient`] - Patient draft and committed record
//! - [`roster`] - Patient collection sub-session
//! - [`summary`] - Review screen projection
//! - [`errors`] - Structured error types

pub mod controller;
pub mod errors;
pub mod operator;
pub mod patient;
pub mod roster;
pub mod session;
pub mod steps;
pub mod summary;

// Re-export commonly used types at crate root for convenience
pub use controller::WizardController;
pub use errors::{WizardError, WizardResult};
pub use operator::{OperatorField, OperatorInfo};
pub use patient::{DraftField, PatientDraft, PatientRecord, GENDER_OPTIONS};
pub use roster::PatientRoster;
pub use session::{SessionExport, WizardSession, WorkspaceProvisioner};
pub use steps::{StepCatalog, StepDescriptor, StepStatus};
pub use summary::{project, SummaryView};
