use crate::{Error, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Default filename pattern for rotated access logs. The first capture
/// group must be the eight-digit date used to order files.
pub const DEFAULT_LOG_PATTERN: &str = r"^nginx-access-ui\.log-(\d{8})(\.gz)?$";

/// A discovered access log and the date embedded in its filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub path: PathBuf,
    pub date: NaiveDate,
}

/// Find the most recent access log in `dir` whose filename matches
/// `pattern`. Filenames with a date that does not parse are skipped.
/// Returns `Ok(None)` when no filename matches.
pub fn latest_log(dir: &Path, pattern: &str) -> Result<Option<LogFile>> {
    let pattern = Regex::new(pattern).map_err(|e| Error::InvalidPattern(e.to_string()))?;

    tracing::debug!("Searching for access logs in: {}", dir.display());

    let mut latest: Option<LogFile> = None;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        let Some(date_str) = pattern.captures(name).and_then(|c| c.get(1)) else {
            continue;
        };
        let Ok(date) = NaiveDate::parse_from_str(date_str.as_str(), "%Y%m%d") else {
            tracing::debug!("Skipping log with invalid date in name: {}", name);
            continue;
        };
        if latest.as_ref().is_none_or(|l| date > l.date) {
            latest = Some(LogFile {
                path: entry.path(),
                date,
            });
        }
    }

    Ok(latest)
}

/// Report filename for a log dated `YYYYMMDD`: `report-YYYY.MM.DD.html`.
pub fn report_filename(date: NaiveDate) -> String {
    format!("report-{}.html", date.format("%Y.%m.%d"))
}
