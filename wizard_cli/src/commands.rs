//! Line commands understood by the interactive shell.

use anyhow::{anyhow, bail, Context};
use uuid::Uuid;
use wizard_core::operator::OperatorField;
use wizard_core::patient::DraftField;

pub const HELP: &str = "\
Commands:
  next                 go to the next step
  back                 go to the previous step
  goto N               jump to step N
  set FIELD VALUE      set your info (name, role, organization)
  draft FIELD VALUE    set a patient form field (name, age, gender, bloodType,
                       allergies, medicalConditions, emergencyContact, emergencyPhone)
  add                  add the patient form to the list
  remove ID|#N         remove a patient by id or list position
  reset                clear the patient form
  show                 redraw the current step
  launch               finish setup (last step only)
  help                 show this text
  quit                 leave without finishing";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Back,
    Goto(usize),
    Set(OperatorField, String),
    Draft(DraftField, String),
    Add,
    Remove(PatientRef),
    Reset,
    Show,
    Launch,
    Help,
    Quit,
}

/// How a `remove` command names its patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientRef {
    Id(Uuid),
    /// 1-based position in the patient list
    Position(usize),
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with("# ") || trimmed == "#" {
        return Ok(None);
    }

    let (word, rest) = split_word(trimmed);
    let command = match word.to_lowercase().as_str() {
        "next" | "n" | "continue" => Command::Next,
        "back" | "b" => Command::Back,
        "goto" | "go" | "step" => {
            let arg = rest.trim();
            let position = arg
                .parse::<usize>()
                .with_context(|| format!("'{}' is not a step number", arg))?;
            Command::Goto(position)
        }
        "set" => {
            let (field, value) = field_and_value(rest, "set")?;
            Command::Set(OperatorField::from_str_flexible(field)?, value)
        }
        "draft" => {
            let (field, value) = field_and_value(rest, "draft")?;
            Command::Draft(DraftField::from_str_flexible(field)?, value)
        }
        "add" => Command::Add,
        "remove" | "rm" => Command::Remove(parse_patient_ref(rest.trim())?),
        "reset" => Command::Reset,
        "show" | "ls" => Command::Show,
        "launch" | "finish" => Command::Launch,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => bail!("unknown command '{}', type 'help' for a list", other),
    };
    Ok(Some(command))
}

/// First whitespace-delimited word and the remainder after it.
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (s, ""),
    }
}

/// Field name and the value after the single separator that follows it.
/// The value keeps any further whitespace; it may be empty.
fn field_and_value<'a>(rest: &'a str, command: &str) -> anyhow::Result<(&'a str, String)> {
    let rest = rest.trim_start();
    if rest.is_empty() {
        bail!("usage: {} FIELD VALUE", command);
    }
    let (field, value) = split_word(rest);
    Ok((field, value.to_string()))
}

fn parse_patient_ref(arg: &str) -> anyhow::Result<PatientRef> {
    if arg.is_empty() {
        bail!("usage: remove ID|#N");
    }
    let digits = arg.strip_prefix('#').unwrap_or(arg);
    if let Ok(position) = digits.parse::<usize>() {
        return Ok(PatientRef::Position(position));
    }
    Uuid::parse_str(arg)
        .map(PatientRef::Id)
        .map_err(|_| anyhow!("'{}' is neither a patient id nor a list position", arg))
}
