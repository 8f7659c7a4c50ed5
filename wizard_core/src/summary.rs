//! # Review Summary
//!
//! Read-only projection of operator info and the roster for the final
//! review screen. Blank values are replaced with fixed placeholder text so
//! callers can render the lines as-is.

use serde::Serialize;

use crate::operator::OperatorInfo;
use crate::patient::PatientRecord;

pub const NAME_PLACEHOLDER: &str = "Name not provided";
pub const ROLE_PLACEHOLDER: &str = "Role not provided";
pub const ORGANIZATION_PLACEHOLDER: &str = "Organization not provided";
/// Sole entry of `patient_names` for an empty roster. Not a patient name.
pub const NO_PATIENTS_PLACEHOLDER: &str = "No patients added yet.";

/// Display data for the review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    /// Name, role and organization, in that order
    pub operator_lines: [String; 3],
    pub patient_count: usize,
    /// Patient names in roster order, or `[NO_PATIENTS_PLACEHOLDER]`
    pub patient_names: Vec<String>,
}

impl SummaryView {
    /// "Patients (2)"
    pub fn patients_heading(&self) -> String {
        format!("Patients ({})", self.patient_count)
    }

    /// True when `patient_names` holds the placeholder rather than names.
    pub fn is_roster_empty(&self) -> bool {
        self.patient_count == 0
    }
}

/// Build the review data. Never fails and never mutates its inputs.
///
/// ```rust
/// use wizard_core::operator::OperatorInfo;
/// use wizard_core::summary::project;
///
/// let view = project(&OperatorInfo::default(), &[]);
/// assert_eq!(view.patient_count, 0);
/// assert_eq!(view.patient_names, vec!["No patients added yet."]);
/// assert_eq!(view.operator_lines[0], "Name not provided");
/// ```
pub fn project(operator: &OperatorInfo, patients: &[PatientRecord]) -> SummaryView {
    let patient_names = if patients.is_empty() {
        vec![NO_PATIENTS_PLACEHOLDER.to_string()]
    } else {
        patients.iter().map(|p| p.name().to_string()).collect()
    };

    SummaryView {
        operator_lines: [
            or_placeholder(&operator.name, NAME_PLACEHOLDER),
            or_placeholder(&operator.role, ROLE_PLACEHOLDER),
            or_placeholder(&operator.organization, ORGANIZATION_PLACEHOLDER),
        ],
        patient_count: patients.len(),
        patient_names,
    }
}

/// The value as entered, unless it is blank after trimming.
fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}
