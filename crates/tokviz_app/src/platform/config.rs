//! Read-only startup configuration, loaded from `./tokviz.ron` when present.
//!
//! Nothing is written back: session state does not outlive the process.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use tokviz_core::DEFAULT_MODEL;
use tokviz_engine::DEFAULT_EXPORT_FILENAME;
use tokviz_logging::LogDestination;

pub const CONFIG_FILENAME: &str = "tokviz.ron";
/// Overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "TOKVIZ_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub export_dir: PathBuf,
    pub export_filename: String,
    pub default_model: String,
    pub show_token_ids: bool,
    pub use_system_clipboard: bool,
    pub log: LogSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            show_token_ids: false,
            use_system_clipboard: true,
            log: LogSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub destination: LogTarget,
    pub level: LogLevel,
    pub file: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            destination: LogTarget::File,
            level: LogLevel::Info,
            file: PathBuf::from(tokviz_logging::DEFAULT_LOG_FILE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
    Off,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
            LogTarget::Off => LogDestination::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Config path from the environment, else `./tokviz.ron`.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
}

/// Loads the config at `path`. A missing file yields the defaults; an
/// unreadable or malformed one is an error.
pub fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(err) => {
            return Err(err).with_context(|| format!("reading config {}", path.display()));
        }
    };
    ron::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = load_config(&temp.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.default_model, "gpt-4");
        assert_eq!(config.export_filename, "tokenizer-output.json");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            r#"(
                default_model: "claude-3",
                show_token_ids: true,
                log: (destination: Off),
            )"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.default_model, "claude-3");
        assert!(config.show_token_ids);
        assert_eq!(config.log.destination, LogTarget::Off);
        assert_eq!(config.log.level, LogLevel::Info);
        assert_eq!(config.export_dir, PathBuf::from("."));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "(default_model: 42)").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("parsing config"));
    }
}
