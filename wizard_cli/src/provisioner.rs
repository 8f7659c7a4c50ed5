//! Hands the finished session off as JSON.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use wizard_core::session::{SessionExport, WorkspaceProvisioner};

/// Where the exported session goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
}

/// Writes the session export as JSON for whatever sets up the workspace.
#[derive(Debug, Clone)]
pub struct JsonProvisioner {
    target: ExportTarget,
    pretty: bool,
}

impl JsonProvisioner {
    pub fn new(target: ExportTarget, pretty: bool) -> Self {
        Self { target, pretty }
    }
}

pub fn export_json(export: &SessionExport, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(export)?
    } else {
        serde_json::to_string(export)?
    };
    Ok(json)
}

impl WorkspaceProvisioner for JsonProvisioner {
    type Error = anyhow::Error;

    fn provision(&mut self, export: SessionExport) -> anyhow::Result<()> {
        let json = export_json(&export, self.pretty).context("serializing session")?;
        match &self.target {
            ExportTarget::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{}", json).context("writing session to stdout")?;
                out.flush()?;
            }
            ExportTarget::File(path) => {
                fs::write(path, format!("{}\n", json))
                    .with_context(|| format!("writing session to {}", path.display()))?;
                info!(path = %path.display(), "session exported");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;
    use wizard_core::patient::DraftField;
    use wizard_core::session::WizardSession;

    fn sample_session() -> WizardSession {
        let mut session = WizardSession::new();
        session.update_draft_field(DraftField::Name, "Ana");
        session.update_draft_field(DraftField::Age, "40");
        session.commit_draft().unwrap();
        session
    }

    #[test]
    fn test_compact_and_pretty_json() {
        let export = sample_session().export();
        let compact = export_json(&export, false).unwrap();
        let pretty = export_json(&export, true).unwrap();
        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));

        let parsed: SessionExport = serde_json::from_str(&compact).unwrap();
        assert_eq!(parsed, export);
    }

    #[test]
    fn test_file_target() {
        let path = std::env::temp_dir().join(format!("wizard-export-{}.json", Uuid::new_v4()));
        let session = sample_session();
        let mut provisioner = JsonProvisioner::new(ExportTarget::File(path.clone()), false);
        session.finalize(&mut provisioner).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        let parsed: SessionExport = serde_json::from_str(written.trim_end()).unwrap();
        assert_eq!(parsed.patients.len(), 1);
        assert_eq!(parsed.patients[0].name(), "Ana");
    }

    #[test]
    fn test_unwritable_file_is_error() {
        let path = std::env::temp_dir()
            .join(format!("wizard-missing-{}", Uuid::new_v4()))
            .join("session.json");
        let mut provisioner = JsonProvisioner::new(ExportTarget::File(path), true);
        assert!(WizardSession::new().finalize(&mut provisioner).is_err());
    }
}
