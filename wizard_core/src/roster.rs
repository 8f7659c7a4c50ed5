//! # Patient Roster
//!
//! The patient-collection sub-session: the committed records in insertion
//! order, the draft being edited, and the message from the last rejected
//! commit.
//!
//! ```text
//! draft ──commit_draft()──▶ patients[..] + new record
//!   │  (name or age blank: patients unchanged, last_validation_error set)
//!   └─ reset to empty, gender kept
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wizard_core::patient::DraftField;
//! use wizard_core::roster::PatientRoster;
//!
//! let mut roster = PatientRoster::new();
//! roster.update_draft_field(DraftField::Name, "Ana");
//! assert!(roster.commit_draft().is_err());
//!
//! roster.update_draft_field(DraftField::Age, "40");
//! let record = roster.commit_draft().unwrap();
//! assert_eq!(roster.count(), 1);
//!
//! roster.remove_patient(&record.id);
//! assert_eq!(roster.count(), 0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::{WizardError, WizardResult};
use crate::patient::{DraftField, PatientDraft, PatientRecord};

/// Message stored when a commit is refused
pub const REQUIRED_FIELDS_MESSAGE: &str = "Patient name and age are required.";

/// Committed patients plus the in-progress draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRoster {
    patients: Vec<PatientRecord>,
    draft: PatientDraft,
    last_validation_error: Option<String>,
}

impl PatientRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one draft field verbatim. No trimming or coercion.
    pub fn update_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        debug!(field = field.key(), len = value.len(), "draft field updated");
        self.draft = self.draft.with_field(field, value);
    }

    /// Validate the draft and, if name and age are present, append it as a
    /// new record.
    ///
    /// On failure the roster keeps its records and draft, and
    /// `last_validation_error` holds a user-facing message. On success the
    /// error is cleared and the draft is reset except for `gender`.
    pub fn commit_draft(&mut self) -> WizardResult<PatientRecord> {
        let missing = self.draft.missing_required();
        if !missing.is_empty() {
            let missing: Vec<String> = missing.iter().map(|f| f.key().to_string()).collect();
            warn!(?missing, "patient draft rejected");
            self.last_validation_error = Some(REQUIRED_FIELDS_MESSAGE.to_string());
            return Err(WizardError::validation(missing, REQUIRED_FIELDS_MESSAGE));
        }

        let record = self.next_record();
        self.patients.push(record.clone());
        self.last_validation_error = None;
        self.draft = self.draft.cleared();
        info!(id = %record.id, count = self.patients.len(), "patient added");
        Ok(record)
    }

    /// Snapshot the draft under an id not already on the roster.
    fn next_record(&self) -> PatientRecord {
        loop {
            let record = PatientRecord::from_draft(&self.draft);
            if self.get(&record.id).is_none() {
                return record;
            }
        }
    }

    /// Remove the record with `id`. Absent ids are ignored.
    ///
    /// Returns the removed record, if there was one.
    pub fn remove_patient(&mut self, id: &Uuid) -> Option<PatientRecord> {
        match self.patients.iter().position(|p| &p.id == id) {
            Some(index) => {
                let removed = self.patients.remove(index);
                info!(%id, count = self.patients.len(), "patient removed");
                Some(removed)
            }
            None => {
                debug!(%id, "remove ignored, no such patient");
                None
            }
        }
    }

    /// Clear the draft back to its empty baseline, keeping `gender`.
    pub fn reset_draft(&mut self) {
        self.draft = self.draft.cleared();
    }

    pub fn clear_validation_error(&mut self) {
        self.last_validation_error = None;
    }

    pub fn count(&self) -> usize {
        self.patients.len()
    }

    /// Records in insertion order
    pub fn patients(&self) -> &[PatientRecord] {
        &self.patients
    }

    pub fn get(&self, id: &Uuid) -> Option<&PatientRecord> {
        self.patients.iter().find(|p| &p.id == id)
    }

    pub fn draft(&self) -> &PatientDraft {
        &self.draft
    }

    /// Message from the most recent rejected commit, cleared by the next
    /// successful one.
    pub fn last_validation_error(&self) -> Option<&str> {
        self.last_validation_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(roster: &mut PatientRoster, name: &str, age: &str) {
        roster.update_draft_field(DraftField::Name, name);
        roster.update_draft_field(DraftField::Age, age);
    }

    #[test]
    fn test_commit_requires_name_and_age() {
        let cases = [("", "30"), ("Ana", ""), ("   ", "30"), ("Ana", " \t "), ("", "")];
        for (name, age) in cases {
            let mut roster = PatientRoster::new();
            fill(&mut roster, name, age);
            let before = roster.draft().clone();

            let err = roster.commit_draft().unwrap_err();
            assert_eq!(err.error_code(), "VALIDATION_ERROR");
            assert_eq!(roster.count(), 0, "({name:?}, {age:?}) should be rejected");
            assert_eq!(roster.last_validation_error(), Some(REQUIRED_FIELDS_MESSAGE));
            assert_eq!(roster.draft(), &before, "rejected commit must not touch the draft");
        }
    }

    #[test]
    fn test_validation_error_lists_missing_fields() {
        let mut roster = PatientRoster::new();
        fill(&mut roster, "", "30");
        match roster.commit_draft() {
            Err(WizardError::Validation { missing, .. }) => assert_eq!(missing, vec!["name"]),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_commit_snapshots_draft_and_resets() {
        let mut roster = PatientRoster::new();
        fill(&mut roster, "Ana", "40");
        roster.update_draft_field(DraftField::Gender, "Non-binary");
        roster.update_draft_field(DraftField::BloodType, "AB-");
        roster.update_draft_field(DraftField::Allergies, "Penicillin");
        roster.update_draft_field(DraftField::MedicalConditions, "Asthma");
        roster.update_draft_field(DraftField::EmergencyContact, "Luis");
        roster.update_draft_field(DraftField::EmergencyPhone, "555-0100");
        let submitted = roster.draft().clone();

        let record = roster.commit_draft().unwrap();
        assert_eq!(record.details, submitted);
        assert_eq!(roster.patients(), &[record.clone()]);
        assert_eq!(roster.last_validation_error(), None);

        let draft = roster.draft();
        assert_eq!(draft.gender, "Non-binary");
        for field in DraftField::ALL {
            if field != DraftField::Gender {
                assert!(draft.get(field).is_empty(), "{field} should reset");
            }
        }
    }

    #[test]
    fn test_successful_commit_clears_previous_error() {
        let mut roster = PatientRoster::new();
        assert!(roster.commit_draft().is_err());
        assert!(roster.last_validation_error().is_some());

        fill(&mut roster, "Ana", "40");
        roster.commit_draft().unwrap();
        assert!(roster.last_validation_error().is_none());
    }

    #[test]
    fn test_insertion_order_and_unique_ids() {
        let mut roster = PatientRoster::new();
        let mut ids = Vec::new();
        for (name, age) in [("Ana", "40"), ("Bo", "12"), ("Cy", "77")] {
            fill(&mut roster, name, age);
            ids.push(roster.commit_draft().unwrap().id);
        }
        let names: Vec<&str> = roster.patients().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Ana", "Bo", "Cy"]);

        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut roster = PatientRoster::new();
        fill(&mut roster, "Ana", "40");
        roster.commit_draft().unwrap();

        assert!(roster.remove_patient(&Uuid::new_v4()).is_none());
        assert_eq!(roster.count(), 1);
    }

    #[test]
    fn test_commit_then_remove_round_trip() {
        let mut roster = PatientRoster::new();
        fill(&mut roster, "Ana", "40");
        roster.commit_draft().unwrap();
        let before = roster.count();

        fill(&mut roster, "Bo", "12");
        let record = roster.commit_draft().unwrap();
        let removed = roster.remove_patient(&record.id).unwrap();

        assert_eq!(removed, record);
        assert_eq!(roster.count(), before);
        assert_eq!(roster.patients()[0].name(), "Ana");

        // retrying the same removal stays a no-op
        assert!(roster.remove_patient(&record.id).is_none());
        assert_eq!(roster.count(), before);
    }

    #[test]
    fn test_reset_draft_keeps_gender() {
        let mut roster = PatientRoster::new();
        fill(&mut roster, "Ana", "40");
        roster.update_draft_field(DraftField::Gender, "Male");
        roster.reset_draft();
        assert!(roster.draft().name.is_empty());
        assert_eq!(roster.draft().gender, "Male");
        assert_eq!(roster.count(), 0);
    }
}
