//! Application configuration
//!
//! Loaded from an optional YAML file. Every field has a default, so a
//! file only needs the keys it wants to change.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Log level for the tracing filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Returns the filter directive for this level
    #[must_use]
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Raises the level by a number of `-v` flags
    #[must_use]
    pub const fn raised_by(self, count: u8) -> Self {
        let mut level = self;
        let mut remaining = count;
        while remaining > 0 {
            level = match level {
                Self::Error => Self::Warn,
                Self::Warn => Self::Info,
                Self::Info => Self::Debug,
                Self::Debug | Self::Trace => Self::Trace,
            };
            remaining -= 1;
        }
        level
    }
}

/// Terminal UI settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Title on the outer border
    pub title: String,
    /// Show the help sidebar
    pub show_help: bool,
    /// Show the "M" indicator while memory holds a value
    pub show_memory_indicator: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: " deskcalc ".to_string(),
            show_help: true,
            show_memory_indicator: true,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base log level
    pub level: LogLevel,
    /// Log file; the terminal UI logs nowhere without one
    pub file: Option<PathBuf>,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Terminal UI settings
    pub ui: UiConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from YAML text
    pub fn from_yaml(text: &str, origin: &Path) -> AppResult<Self> {
        serde_yaml_ng::from_str(text).map_err(|source| AppError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Loads configuration from a YAML file
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        // An empty file means all defaults
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_yaml(&text, path)
    }

    /// Loads the given file, or falls back to defaults when none is given
    pub fn resolve(path: Option<&Path>) -> AppResult<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Set the border title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.ui.title = title.into();
        self
    }

    /// Show or hide the help sidebar
    #[must_use]
    pub fn with_help(mut self, show: bool) -> Self {
        self.ui.show_help = show;
        self
    }

    /// Set the log level
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.logging.level = level;
        self
    }

    /// Set the log file
    #[must_use]
    pub fn with_log_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.logging.file = Some(file.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::new();
        assert_eq!(config.ui.title, " deskcalc ");
        assert!(config.ui.show_help);
        assert!(config.ui.show_memory_indicator);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_builder_setters() {
        let config = AppConfig::new()
            .with_title("Calc")
            .with_help(false)
            .with_log_level(LogLevel::Debug)
            .with_log_file("/tmp/calc.log");
        assert_eq!(config.ui.title, "Calc");
        assert!(!config.ui.show_help);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/calc.log")));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "ui:\n  show_help: false\n";
        let config = AppConfig::from_yaml(yaml, Path::new("inline")).unwrap();
        assert!(!config.ui.show_help);
        assert_eq!(config.ui.title, " deskcalc ");
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
ui:
  title: " My Calc "
  show_help: true
  show_memory_indicator: false
logging:
  level: trace
  file: calc.log
"#;
        let config = AppConfig::from_yaml(yaml, Path::new("inline")).unwrap();
        assert_eq!(config.ui.title, " My Calc ");
        assert!(!config.ui.show_memory_indicator);
        assert_eq!(config.logging.level, LogLevel::Trace);
        assert_eq!(config.logging.file, Some(PathBuf::from("calc.log")));
    }

    #[test]
    fn test_invalid_level_rejected() {
        let yaml = "logging:\n  level: loud\n";
        let err = AppConfig::from_yaml(yaml, Path::new("bad.yaml")).unwrap_err();
        assert!(matches!(err, AppError::ConfigParse { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ui:\n  title: \" File \"").unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.ui.title, " File ");
    }

    #[test]
    fn test_load_empty_file_is_default() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(AppConfig::load(file.path()).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load(Path::new("/nonexistent/deskcalc.yaml")).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }

    #[test]
    fn test_resolve_without_path() {
        assert_eq!(AppConfig::resolve(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_yaml_roundtrip_of_defaults() {
        let text = serde_yaml_ng::to_string(&AppConfig::default()).unwrap();
        let parsed = AppConfig::from_yaml(&text, Path::new("inline")).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_log_level_raised() {
        assert_eq!(LogLevel::Warn.raised_by(0), LogLevel::Warn);
        assert_eq!(LogLevel::Warn.raised_by(1), LogLevel::Info);
        assert_eq!(LogLevel::Warn.raised_by(2), LogLevel::Debug);
        assert_eq!(LogLevel::Warn.raised_by(9), LogLevel::Trace);
    }

    #[test]
    fn test_log_level_directive() {
        assert_eq!(LogLevel::Error.as_directive(), "error");
        assert_eq!(LogLevel::Trace.as_directive(), "trace");
    }
}
