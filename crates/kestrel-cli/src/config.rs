use anyhow::{Context, Result};
use kestrel_core::access::DEFAULT_LOG_PATTERN;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings for the `report` command.
///
/// Values resolve in three layers: built-in defaults, then an optional JSON
/// config file, then individual command-line flags applied by the caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Directory scanned for rotated access logs.
    pub log_dir: PathBuf,
    /// Directory the rendered HTML reports are written into.
    pub report_dir: PathBuf,
    /// HTML template carrying the $table_json placeholder.
    pub report_template: PathBuf,
    /// Filename pattern for access logs; the first capture group is the
    /// eight-digit date.
    pub log_pattern: String,
    /// Number of URLs included in the report, ranked by total time.
    pub report_size: usize,
    /// Maximum tolerated parse error rate, in percent. Above it the run
    /// produces no report.
    pub parsing_error: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("./logs"),
            report_dir: PathBuf::from("./reports"),
            report_template: PathBuf::from("./report.html"),
            log_pattern: DEFAULT_LOG_PATTERN.to_string(),
            report_size: 1000,
            parsing_error: 50.0,
        }
    }
}

impl ReportConfig {
    /// Load configuration from a JSON file; keys missing from the file keep
    /// their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Loading config file: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: ReportConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        config.validate()?;

        Ok(config)
    }

    /// Resolve the config: the file when one was given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.parsing_error.is_finite() || self.parsing_error < 0.0 {
            anyhow::bail!(
                "parsing_error must be a non-negative percentage, got {}",
                self.parsing_error
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.report_size, 1000);
        assert_eq!(config.parsing_error, 50.0);
        assert_eq!(config.log_dir, PathBuf::from("./logs"));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = ReportConfig::load(None).unwrap();
        assert_eq!(config.report_size, 1000);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kestrel.json");
        std::fs::write(&path, r#"{"report_size": 25, "log_dir": "/var/log/nginx"}"#).unwrap();

        let config = ReportConfig::from_file(&path).unwrap();
        assert_eq!(config.report_size, 25);
        assert_eq!(config.log_dir, PathBuf::from("/var/log/nginx"));
        assert_eq!(config.parsing_error, 50.0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ReportConfig::from_file(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kestrel.json");
        std::fs::write(&path, "report_size = 25").unwrap();
        assert!(ReportConfig::from_file(&path).is_err());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kestrel.json");
        std::fs::write(&path, r#"{"reprot_size": 25}"#).unwrap();
        assert!(ReportConfig::from_file(&path).is_err());
    }

    #[test]
    fn test_negative_error_rate_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kestrel.json");
        std::fs::write(&path, r#"{"parsing_error": -1.0}"#).unwrap();
        assert!(ReportConfig::from_file(&path).is_err());
    }
}
