//! Plain-text screens for each wizard step.

use wizard_core::operator::OperatorField;
use wizard_core::patient::{DraftField, PatientRecord, GENDER_OPTIONS};
use wizard_core::session::WizardSession;
use wizard_core::steps::{StepChip, StepStatus, STEP_COMPLETE, STEP_INFO, STEP_PATIENTS};
use wizard_core::summary::SummaryView;

const PROGRESS_WIDTH: usize = 30;
const RULE: &str = "────────────────────────────────────────────";

/// Full screen for the session's current step.
pub fn render_screen(session: &WizardSession) -> String {
    let controller = session.controller();
    let step = session.current_step();

    let mut lines = vec!["Clinic Setup".to_string(), "Finish onboarding in three quick steps.".to_string(), String::new()];
    lines.extend(controller.step_chips().iter().map(chip_line));
    lines.push(RULE.to_string());
    lines.push(controller.step_label());
    lines.push(step.title.clone());
    lines.push(step.subtitle.clone());
    lines.push(progress_bar(controller.progress_percent()));
    lines.push(String::new());

    match step.id.as_str() {
        STEP_INFO => lines.extend(operator_form(session)),
        STEP_PATIENTS => lines.extend(patient_form(session)),
        STEP_COMPLETE => lines.extend(review(&session.summary())),
        _ => {}
    }

    lines.push(RULE.to_string());
    lines.push(footer(session));
    lines.join("\n")
}

fn chip_line(chip: &StepChip) -> String {
    let marker = match chip.status {
        StepStatus::Active => ">",
        StepStatus::Complete => "✓",
        StepStatus::Upcoming => " ",
    };
    format!("{} {}  {} - {}", marker, chip.index_label, chip.title, chip.subtitle)
}

pub fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * PROGRESS_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_WIDTH);
    format!(
        "[{}{}] {:.0}%",
        "█".repeat(filled),
        "░".repeat(PROGRESS_WIDTH - filled),
        percent
    )
}

fn operator_form(session: &WizardSession) -> Vec<String> {
    let info = session.operator_info();
    let mut lines = Vec::new();
    for field in OperatorField::ALL {
        let value = info.get(field);
        lines.push(format!("{}: {}", field.label(), display_value(value, Some(field.placeholder()))));
        lines.push(format!("    {}", field.hint()));
    }
    lines
}

fn patient_form(session: &WizardSession) -> Vec<String> {
    let draft = session.draft();
    let mut lines = Vec::new();
    for field in DraftField::ALL {
        let required = if field.is_required() { " *" } else { "" };
        let value = draft.get(field);
        lines.push(format!("{}{}: {}", field.label(), required, display_value(value, field.placeholder())));
        if field == DraftField::Gender {
            lines.push(format!("    options: {}", GENDER_OPTIONS.join(" | ")));
        }
    }

    if let Some(error) = session.last_validation_error() {
        lines.push(String::new());
        lines.push(format!("! {}", error));
    }

    let patients = session.patients();
    if !patients.is_empty() {
        lines.push(String::new());
        for (i, patient) in patients.iter().enumerate() {
            lines.extend(patient_card(i + 1, patient));
        }
    }
    lines
}

/// Card for one committed patient
pub fn patient_card(position: usize, patient: &PatientRecord) -> Vec<String> {
    vec![
        format!("#{} {}  ({})", position, patient.name(), patient.id),
        format!("    {}", patient.headline()),
        format!("    Allergies: {}", patient.allergies_line()),
        format!("    Medical Conditions: {}", patient.conditions_line()),
        format!("    Emergency Contact: {}", patient.emergency_line()),
    ]
}

/// Review screen body
pub fn review(summary: &SummaryView) -> Vec<String> {
    let mut lines = vec![
        "Setup Complete".to_string(),
        "Review your details and finalize your patient workspace.".to_string(),
        String::new(),
        "Your Info".to_string(),
    ];
    lines.extend(summary.operator_lines.iter().map(|l| format!("  - {}", l)));
    lines.push(String::new());
    lines.push(summary.patients_heading());
    lines.extend(summary.patient_names.iter().map(|n| format!("  - {}", n)));
    lines.push(String::new());
    lines.push("[launch] Launch Workspace".to_string());
    lines
}

fn footer(session: &WizardSession) -> String {
    let back = if session.is_first() { "(back)" } else { "[back] Back" };
    let primary = session.controller().primary_action_label();
    let next = if session.is_last() {
        format!("({})", primary)
    } else {
        format!("[next] {}", primary)
    };
    format!("{}    {}", back, next)
}

fn display_value(value: &str, placeholder: Option<&str>) -> String {
    match (value.is_empty(), placeholder) {
        (true, Some(p)) => format!("<{}>", p),
        _ => value.to_string(),
    }
}
