//! The read-render loop binding line commands to a [`WizardSession`].

use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::{debug, warn};
use wizard_core::session::{WizardSession, WorkspaceProvisioner};

use crate::commands::{self, Command, PatientRef, HELP};
use crate::render;

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The session was handed to the provisioner
    Launched,
    /// The operator quit or input ran out first
    Abandoned,
}

/// What to show after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Reply {
    Screen,
    Notice(String),
    Launched,
    Quit,
}

/// Run commands from `input` until launch, quit or end of input.
pub fn run<R, W, P>(
    session: &mut WizardSession,
    provisioner: &mut P,
    input: R,
    output: &mut W,
) -> anyhow::Result<Outcome>
where
    R: BufRead,
    W: Write,
    P: WorkspaceProvisioner,
    P::Error: Display,
{
    writeln!(output, "{}", render::render_screen(session))?;
    write_prompt(output)?;

    for line in input.lines() {
        let line = line?;
        let command = match commands::parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => {
                write_prompt(output)?;
                continue;
            }
            Err(e) => {
                writeln!(output, "error: {:#}", e)?;
                write_prompt(output)?;
                continue;
            }
        };
        debug!(?command, "command");

        match apply(session, provisioner, command) {
            Reply::Screen => writeln!(output, "{}", render::render_screen(session))?,
            Reply::Notice(message) => writeln!(output, "{}", message)?,
            Reply::Launched => {
                writeln!(output, "Workspace launched with {} patient(s).", session.patients().len())?;
                return Ok(Outcome::Launched);
            }
            Reply::Quit => return Ok(Outcome::Abandoned),
        }
        write_prompt(output)?;
    }

    Ok(Outcome::Abandoned)
}

fn write_prompt<W: Write>(output: &mut W) -> std::io::Result<()> {
    write!(output, "> ")?;
    output.flush()
}

fn apply<P>(session: &mut WizardSession, provisioner: &mut P, command: Command) -> Reply
where
    P: WorkspaceProvisioner,
    P::Error: Display,
{
    match command {
        Command::Next => {
            session.go_next();
            Reply::Screen
        }
        Command::Back => {
            session.go_back();
            Reply::Screen
        }
        Command::Goto(position) => {
            if session.jump_to(position) {
                Reply::Screen
            } else {
                Reply::Notice(format!(
                    "There is no step {}; choose 1-{}.",
                    position,
                    session.controller().step_count()
                ))
            }
        }
        Command::Set(field, value) => {
            session.update_operator_field(field, value);
            Reply::Screen
        }
        Command::Draft(field, value) => {
            session.update_draft_field(field, value);
            Reply::Screen
        }
        // a rejected commit is shown through last_validation_error on the screen
        Command::Add => {
            let _ = session.commit_draft();
            Reply::Screen
        }
        Command::Remove(target) => {
            let id = match target {
                PatientRef::Id(id) => Some(id),
                PatientRef::Position(n) => n
                    .checked_sub(1)
                    .and_then(|i| session.patients().get(i))
                    .map(|p| p.id),
            };
            match id {
                Some(id) => {
                    session.remove_patient(&id);
                    Reply::Screen
                }
                None => Reply::Notice("No patient at that position.".to_string()),
            }
        }
        Command::Reset => {
            session.reset_draft();
            Reply::Screen
        }
        Command::Show => Reply::Screen,
        Command::Launch => {
            if !session.is_last() {
                return Reply::Notice("Launch is available on the last step.".to_string());
            }
            match session.finalize(provisioner) {
                Ok(()) => Reply::Launched,
                Err(e) => {
                    warn!(error = %e, "workspace launch failed");
                    Reply::Notice(format!("Launch failed: {}", e))
                }
            }
        }
        Command::Help => Reply::Notice(HELP.to_string()),
        Command::Quit => Reply::Quit,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use wizard_core::session::SessionExport;

    use super::*;

    #[derive(Default)]
    struct Capture {
        exports: Vec<SessionExport>,
        fail: bool,
    }

    impl WorkspaceProvisioner for Capture {
        type Error = String;

        fn provision(&mut self, export: SessionExport) -> Result<(), String> {
            if self.fail {
                return Err("disk full".to_string());
            }
            self.exports.push(export);
            Ok(())
        }
    }

    fn run_script(script: &str, provisioner: &mut Capture) -> (WizardSession, Outcome, String) {
        let mut session = WizardSession::new();
        let mut output = Vec::new();
        let outcome = run(&mut session, provisioner, Cursor::new(script), &mut output).unwrap();
        (session, outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_full_walkthrough() {
        let script = "\
set name Dr. Jamie Carter
set role Lead Physician
next
draft name Ana
draft age 40
draft gender Male
add
draft name Bo
draft age 12
add
remove #1
next
launch
";
        let mut provisioner = Capture::default();
        let (session, outcome, output) = run_script(script, &mut provisioner);

        assert_eq!(outcome, Outcome::Launched);
        assert!(output.contains("Workspace launched with 1 patient(s)."));
        assert_eq!(provisioner.exports.len(), 1);

        let export = &provisioner.exports[0];
        assert_eq!(export.operator_info.name, "Dr. Jamie Carter");
        assert_eq!(export.patients.len(), 1);
        assert_eq!(export.patients[0].name(), "Bo");
        // gender carried over from the first patient
        assert_eq!(export.patients[0].details.gender, "Male");
        assert!(session.is_last());
    }

    #[test]
    fn test_errors_do_not_end_the_session() {
        let script = "bogus\ndraft shoeSize 9\ngoto 9\nnext\nadd\nquit\n";
        let mut provisioner = Capture::default();
        let (session, outcome, output) = run_script(script, &mut provisioner);

        assert_eq!(outcome, Outcome::Abandoned);
        assert!(output.contains("unknown command 'bogus'"));
        assert!(output.contains("shoeSize"));
        assert!(output.contains("There is no step 9; choose 1-3."));
        assert!(output.contains("! Patient name and age are required."));
        assert_eq!(session.current_index(), 2);
        assert!(provisioner.exports.is_empty());
    }

    #[test]
    fn test_launch_only_on_last_step() {
        let mut provisioner = Capture::default();
        let (_, outcome, output) = run_script("launch\n", &mut provisioner);
        assert_eq!(outcome, Outcome::Abandoned);
        assert!(output.contains("Launch is available on the last step."));
        assert!(provisioner.exports.is_empty());
    }

    #[test]
    fn test_failed_launch_keeps_running() {
        let mut provisioner = Capture {
            fail: true,
            ..Capture::default()
        };
        let (session, outcome, output) = run_script("goto 3\nlaunch\n", &mut provisioner);
        assert_eq!(outcome, Outcome::Abandoned);
        assert!(output.contains("Launch failed: disk full"));
        assert!(session.is_last());
    }

    #[test]
    fn test_remove_missing_position() {
        let mut provisioner = Capture::default();
        let (_, _, output) = run_script("remove 3\nremove #0\n", &mut provisioner);
        assert_eq!(output.matches("No patient at that position.").count(), 2);
    }

    #[test]
    fn test_end_of_input_abandons() {
        let mut provisioner = Capture::default();
        let (session, outcome, _) = run_script("next\n# done\n", &mut provisioner);
        assert_eq!(outcome, Outcome::Abandoned);
        assert_eq!(session.current_index(), 2);
    }
}
