//! # Patient Draft and Record
//!
//! A [`PatientDraft`] is the patient sub-form being filled in. Committing it
//! (see [`crate::roster`]) freezes a copy into a [`PatientRecord`] with a
//! fresh UUID.
//!
//! Every draft field is a string written verbatim, including `gender`, whose
//! form control offers [`GENDER_OPTIONS`] but whose value is not checked
//! against them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{WizardError, WizardResult};

/// Gender choices offered by the form. The first entry is the default.
pub const GENDER_OPTIONS: [&str; 4] = ["Female", "Male", "Non-binary", "Prefer not to say"];

/// Shown in place of an empty blood type
pub const BLOOD_TYPE_FALLBACK: &str = "Blood type N/A";
/// Shown in place of empty allergies
pub const ALLERGIES_FALLBACK: &str = "No allergies noted";
/// Shown in place of empty medical conditions
pub const CONDITIONS_FALLBACK: &str = "None reported";
/// Shown when no emergency contact was entered
pub const EMERGENCY_CONTACT_FALLBACK: &str = "No emergency contact set";

/// In-progress patient sub-form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDraft {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub blood_type: String,
    pub allergies: String,
    pub medical_conditions: String,
    pub emergency_contact: String,
    pub emergency_phone: String,
}

impl Default for PatientDraft {
    fn default() -> Self {
        PatientDraft {
            name: String::new(),
            age: String::new(),
            gender: GENDER_OPTIONS[0].to_string(),
            blood_type: String::new(),
            allergies: String::new(),
            medical_conditions: String::new(),
            emergency_contact: String::new(),
            emergency_phone: String::new(),
        }
    }
}

impl PatientDraft {
    /// Copy of `self` with one field replaced verbatim.
    pub fn with_field(&self, field: DraftField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.field_mut(field) = value.into();
        next
    }

    /// Empty draft that keeps this draft's gender.
    ///
    /// ```rust
    /// use wizard_core::patient::{DraftField, PatientDraft};
    ///
    /// let draft = PatientDraft::default()
    ///     .with_field(DraftField::Name, "Ana")
    ///     .with_field(DraftField::Gender, "Male");
    /// let reset = draft.cleared();
    /// assert!(reset.name.is_empty());
    /// assert_eq!(reset.gender, "Male");
    /// ```
    pub fn cleared(&self) -> Self {
        PatientDraft {
            gender: self.gender.clone(),
            ..PatientDraft::default()
        }
    }

    /// Current value of a field
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Age => &self.age,
            DraftField::Gender => &self.gender,
            DraftField::BloodType => &self.blood_type,
            DraftField::Allergies => &self.allergies,
            DraftField::MedicalConditions => &self.medical_conditions,
            DraftField::EmergencyContact => &self.emergency_contact,
            DraftField::EmergencyPhone => &self.emergency_phone,
        }
    }

    fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Age => &mut self.age,
            DraftField::Gender => &mut self.gender,
            DraftField::BloodType => &mut self.blood_type,
            DraftField::Allergies => &mut self.allergies,
            DraftField::MedicalConditions => &mut self.medical_conditions,
            DraftField::EmergencyContact => &mut self.emergency_contact,
            DraftField::EmergencyPhone => &mut self.emergency_phone,
        }
    }

    /// Required fields that are blank after trimming, in form order.
    pub fn missing_required(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
            .collect()
    }
}

/// Fields of [`PatientDraft`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    Name,
    Age,
    Gender,
    BloodType,
    Allergies,
    MedicalConditions,
    EmergencyContact,
    EmergencyPhone,
}

impl DraftField {
    /// All fields in form order
    pub const ALL: [DraftField; 8] = [
        DraftField::Name,
        DraftField::Age,
        DraftField::Gender,
        DraftField::BloodType,
        DraftField::Allergies,
        DraftField::MedicalConditions,
        DraftField::EmergencyContact,
        DraftField::EmergencyPhone,
    ];

    /// Parse a field name: camelCase, snake_case, kebab-case or the label.
    pub fn from_str_flexible(s: &str) -> WizardResult<Self> {
        match s.to_lowercase().replace([' ', '_', '-', '*'], "").as_str() {
            "name" | "patientname" => Ok(DraftField::Name),
            "age" => Ok(DraftField::Age),
            "gender" => Ok(DraftField::Gender),
            "bloodtype" | "blood" => Ok(DraftField::BloodType),
            "allergies" => Ok(DraftField::Allergies),
            "medicalconditions" | "conditions" => Ok(DraftField::MedicalConditions),
            "emergencycontact" => Ok(DraftField::EmergencyContact),
            "emergencyphone" | "phone" => Ok(DraftField::EmergencyPhone),
            _ => Err(WizardError::unknown_field("patient", s)),
        }
    }

    /// Field name as used in serialized output
    pub fn key(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Age => "age",
            DraftField::Gender => "gender",
            DraftField::BloodType => "bloodType",
            DraftField::Allergies => "allergies",
            DraftField::MedicalConditions => "medicalConditions",
            DraftField::EmergencyContact => "emergencyContact",
            DraftField::EmergencyPhone => "emergencyPhone",
        }
    }

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Patient Name",
            DraftField::Age => "Age",
            DraftField::Gender => "Gender",
            DraftField::BloodType => "Blood Type",
            DraftField::Allergies => "Allergies",
            DraftField::MedicalConditions => "Medical Conditions",
            DraftField::EmergencyContact => "Emergency Contact",
            DraftField::EmergencyPhone => "Emergency Phone",
        }
    }

    /// Example value shown in an empty input. Gender is a select and has none.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            DraftField::Name => Some("Full name"),
            DraftField::Age => Some("Age"),
            DraftField::Gender => None,
            DraftField::BloodType => Some("e.g., O+"),
            DraftField::Allergies => Some("Any allergies"),
            DraftField::MedicalConditions => Some("List any medical conditions"),
            DraftField::EmergencyContact => Some("Contact name"),
            DraftField::EmergencyPhone => Some("Contact phone"),
        }
    }

    /// Whether a commit is refused while this field is blank
    pub fn is_required(&self) -> bool {
        matches!(self, DraftField::Name | DraftField::Age)
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A committed patient. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub details: PatientDraft,
    /// When the record was committed
    pub added_at: DateTime<Utc>,
}

impl PatientRecord {
    /// Snapshot a draft under a new random id.
    pub fn from_draft(draft: &PatientDraft) -> Self {
        PatientRecord {
            id: Uuid::new_v4(),
            details: draft.clone(),
            added_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    /// "40 · Female · O+", with a fallback for a missing blood type
    pub fn headline(&self) -> String {
        let d = &self.details;
        format!("{} · {} · {}", d.age, d.gender, or_fallback(&d.blood_type, BLOOD_TYPE_FALLBACK))
    }

    pub fn allergies_line(&self) -> &str {
        or_fallback(&self.details.allergies, ALLERGIES_FALLBACK)
    }

    pub fn conditions_line(&self) -> &str {
        or_fallback(&self.details.medical_conditions, CONDITIONS_FALLBACK)
    }

    /// "Contact · Phone", or a fallback when no contact name was given
    pub fn emergency_line(&self) -> String {
        let d = &self.details;
        if d.emergency_contact.is_empty() {
            EMERGENCY_CONTACT_FALLBACK.to_string()
        } else {
            format!("{} · {}", d.emergency_contact, d.emergency_phone)
        }
    }
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> PatientDraft {
        PatientDraft::default()
            .with_field(DraftField::Name, "Ana Souza")
            .with_field(DraftField::Age, "40")
            .with_field(DraftField::BloodType, "O+")
    }

    #[test]
    fn test_default_draft() {
        let draft = PatientDraft::default();
        assert_eq!(draft.gender, "Female");
        for field in DraftField::ALL {
            if field != DraftField::Gender {
                assert!(draft.get(field).is_empty(), "{field} should start empty");
            }
        }
    }

    #[test]
    fn test_with_field_is_verbatim() {
        let draft = PatientDraft::default().with_field(DraftField::Age, " 40 ");
        assert_eq!(draft.age, " 40 ");
        let draft = draft.with_field(DraftField::Gender, "Unlisted");
        assert_eq!(draft.gender, "Unlisted");
    }

    #[test]
    fn test_missing_required() {
        assert_eq!(
            PatientDraft::default().missing_required(),
            vec![DraftField::Name, DraftField::Age]
        );
        let draft = PatientDraft::default()
            .with_field(DraftField::Name, "Ana")
            .with_field(DraftField::Age, "   ");
        assert_eq!(draft.missing_required(), vec![DraftField::Age]);
        assert!(sample_draft().missing_required().is_empty());
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!(DraftField::from_str_flexible("bloodType").unwrap(), DraftField::BloodType);
        assert_eq!(DraftField::from_str_flexible("medical_conditions").unwrap(), DraftField::MedicalConditions);
        assert_eq!(DraftField::from_str_flexible("emergency-phone").unwrap(), DraftField::EmergencyPhone);
        assert_eq!(DraftField::from_str_flexible("Patient Name *").unwrap(), DraftField::Name);
        assert!(DraftField::from_str_flexible("shoeSize").is_err());
    }

    #[test]
    fn test_keys_match_serialized_names() {
        let json = serde_json::to_value(PatientDraft::default()).unwrap();
        for field in DraftField::ALL {
            assert!(json.get(field.key()).is_some(), "missing key {}", field.key());
        }
    }

    #[test]
    fn test_record_card_lines() {
        let record = PatientRecord::from_draft(&sample_draft());
        assert_eq!(record.headline(), "40 · Female · O+");
        assert_eq!(record.allergies_line(), ALLERGIES_FALLBACK);
        assert_eq!(record.conditions_line(), CONDITIONS_FALLBACK);
        assert_eq!(record.emergency_line(), EMERGENCY_CONTACT_FALLBACK);

        let record = PatientRecord::from_draft(
            &sample_draft()
                .with_field(DraftField::BloodType, "")
                .with_field(DraftField::EmergencyContact, "Luis")
                .with_field(DraftField::EmergencyPhone, "555-0100"),
        );
        assert_eq!(record.headline(), "40 · Female · Blood type N/A");
        assert_eq!(record.emergency_line(), "Luis · 555-0100");
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = PatientRecord::from_draft(&sample_draft());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "Ana Souza");
        assert_eq!(json["bloodType"], "O+");
        assert!(json.get("id").is_some());
        assert!(json.get("details").is_none());

        let roundtrip: PatientRecord = serde_json::from_value(json).unwrap();
        assert_eq!(roundtrip, record);
    }
}
