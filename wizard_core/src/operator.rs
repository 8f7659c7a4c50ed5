//! # Operator Identity
//!
//! Who is setting up the workspace. All fields are optional free text and
//! are never validated.

use serde::{Deserialize, Serialize};

use crate::errors::{WizardError, WizardResult};

/// Identity of the person running the wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorInfo {
    pub name: String,
    pub role: String,
    pub organization: String,
}

impl OperatorInfo {
    /// Copy of `self` with one field replaced verbatim.
    ///
    /// ```rust
    /// use wizard_core::operator::{OperatorField, OperatorInfo};
    ///
    /// let info = OperatorInfo::default().with_field(OperatorField::Role, "Lead Physician");
    /// assert_eq!(info.role, "Lead Physician");
    /// assert!(info.name.is_empty());
    /// ```
    pub fn with_field(&self, field: OperatorField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.field_mut(field) = value.into();
        next
    }

    /// Current value of a field
    pub fn get(&self, field: OperatorField) -> &str {
        match field {
            OperatorField::Name => &self.name,
            OperatorField::Role => &self.role,
            OperatorField::Organization => &self.organization,
        }
    }

    fn field_mut(&mut self, field: OperatorField) -> &mut String {
        match field {
            OperatorField::Name => &mut self.name,
            OperatorField::Role => &mut self.role,
            OperatorField::Organization => &mut self.organization,
        }
    }
}

/// Fields of [`OperatorInfo`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperatorField {
    Name,
    Role,
    Organization,
}

impl OperatorField {
    /// All fields in form order
    pub const ALL: [OperatorField; 3] = [
        OperatorField::Name,
        OperatorField::Role,
        OperatorField::Organization,
    ];

    /// Parse a field name, accepting "name", "Full Name", "org", etc.
    pub fn from_str_flexible(s: &str) -> WizardResult<Self> {
        match s.to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "name" | "fullname" => Ok(OperatorField::Name),
            "role" => Ok(OperatorField::Role),
            "organization" | "organisation" | "org" => Ok(OperatorField::Organization),
            _ => Err(WizardError::unknown_field("operator", s)),
        }
    }

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            OperatorField::Name => "Full Name",
            OperatorField::Role => "Role",
            OperatorField::Organization => "Organization",
        }
    }

    /// Helper text shown under the label
    pub fn hint(&self) -> &'static str {
        match self {
            OperatorField::Name => "How should we address you?",
            OperatorField::Role => "What best describes your role?",
            OperatorField::Organization => "The facility or practice you represent.",
        }
    }

    /// Example value shown in an empty input
    pub fn placeholder(&self) -> &'static str {
        match self {
            OperatorField::Name => "Dr. Jamie Carter",
            OperatorField::Role => "Lead Physician",
            OperatorField::Organization => "Crescent Health",
        }
    }
}

impl std::fmt::Display for OperatorField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
