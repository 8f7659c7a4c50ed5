//! CLI settings.
//!
//! Precedence, lowest first: built-in defaults, `wizard.toml` (or the file
//! passed with `--config`), `WIZARD_*` environment variables, command-line
//! flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "wizard.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Indent the exported session JSON
    pub pretty_json: bool,
    /// Write the exported session here instead of stdout
    pub export_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "warn".into(),
            pretty_json: true,
            export_path: None,
        }
    }
}

/// Load settings from the config file and environment.
///
/// An explicit `config_path` must exist and parse. The implicit
/// `wizard.toml` is optional, and a malformed one is reported and skipped.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = match config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            parse_settings(&raw).with_context(|| format!("parsing config file {}", path.display()))?
        }
        None => match fs::read_to_string(DEFAULT_CONFIG_FILE) {
            Ok(raw) => match parse_settings(&raw) {
                Ok(parsed) => parsed,
                Err(e) => {
                    // logging is not initialised yet
                    eprintln!("warning: ignoring {}: {:#}", DEFAULT_CONFIG_FILE, e);
                    Settings::default()
                }
            },
            Err(_) => Settings::default(),
        },
    };

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

pub fn parse_settings(raw: &str) -> anyhow::Result<Settings> {
    Ok(toml::from_str(raw)?)
}

/// Overlay `WIZARD_*` variables. Unparseable booleans are ignored.
pub fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("WIZARD_LOG_FILTER") {
        settings.log_filter = v;
    }
    if let Some(v) = lookup("WIZARD_PRETTY_JSON") {
        if let Some(parsed) = parse_bool(&v) {
            settings.pretty_json = parsed;
        }
    }
    if let Some(v) = lookup("WIZARD_EXPORT_PATH") {
        settings.export_path = if v.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(v))
        };
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = parse_settings("pretty_json = false\n").unwrap();
        assert!(!settings.pretty_json);
        assert_eq!(settings.log_filter, "warn");
        assert_eq!(settings.export_path, None);
    }

    #[test]
    fn test_full_file() {
        let raw = r#"
            log_filter = "wizard_core=debug"
            pretty_json = true
            export_path = "out/session.json"
        "#;
        let settings = parse_settings(raw).unwrap();
        assert_eq!(settings.log_filter, "wizard_core=debug");
        assert_eq!(settings.export_path, Some(PathBuf::from("out/session.json")));
    }

    #[test]
    fn test_malformed_file_is_error() {
        assert!(parse_settings("pretty_json = \"sometimes\"").is_err());
        assert!(parse_settings("not toml at all [").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut settings = Settings::default();
        apply_env(
            &mut settings,
            env(&[
                ("WIZARD_LOG_FILTER", "info"),
                ("WIZARD_PRETTY_JSON", "off"),
                ("WIZARD_EXPORT_PATH", "/tmp/export.json"),
            ]),
        );
        assert_eq!(settings.log_filter, "info");
        assert!(!settings.pretty_json);
        assert_eq!(settings.export_path, Some(PathBuf::from("/tmp/export.json")));
    }

    #[test]
    fn test_env_bad_bool_and_empty_path() {
        let mut settings = Settings {
            export_path: Some(PathBuf::from("x.json")),
            ..Settings::default()
        };
        apply_env(
            &mut settings,
            env(&[("WIZARD_PRETTY_JSON", "maybe"), ("WIZARD_EXPORT_PATH", " ")]),
        );
        assert!(settings.pretty_json);
        assert_eq!(settings.export_path, None);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let path = std::env::temp_dir().join("wizard-cli-missing-config.toml");
        assert!(load_settings(Some(&path)).is_err());
    }
}
