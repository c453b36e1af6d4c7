mod aggregate;
mod median;
mod rank;

pub use aggregate::scan;
pub use median::median;
pub use rank::top_n;

use serde::{Deserialize, Serialize};

/// Aggregate latency statistics for one URL.
///
/// Percentages are relative to the successfully parsed portion of the log:
/// `count_perc` against the number of parsed lines, `time_perc` against the
/// summed request time of all URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlStats {
    pub url: String,
    pub count: usize,
    pub count_perc: f64,
    pub time_sum: f64,
    pub time_max: f64,
    pub time_perc: f64,
    pub time_avg: f64,
    pub time_med: f64,
}

/// Result of scanning one access log stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Per-URL statistics in first-seen order.
    pub stats: Vec<UrlStats>,
    pub total_lines: usize,
    pub parse_errors: usize,
    /// Percentage of lines that failed the parsing grammar.
    pub error_rate: f64,
}
