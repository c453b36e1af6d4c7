use crate::config::ReportConfig;
use anyhow::{Context, Result};
use kestrel_core::access::{LogReader, latest_log, report_filename};
use kestrel_core::analysis::{scan, top_n};
use kestrel_core::report::ReportWriter;
use std::path::{Path, PathBuf};

pub fn execute(
    config_file: Option<&Path>,
    log_dir: Option<PathBuf>,
    report_dir: Option<PathBuf>,
    template: Option<PathBuf>,
    report_size: Option<usize>,
    max_error_rate: Option<f64>,
) -> Result<()> {
    let mut config = ReportConfig::load(config_file)?;

    // Individual flags win over the config file.
    if let Some(dir) = log_dir {
        config.log_dir = dir;
    }
    if let Some(dir) = report_dir {
        config.report_dir = dir;
    }
    if let Some(path) = template {
        config.report_template = path;
    }
    if let Some(size) = report_size {
        config.report_size = size;
    }
    if let Some(rate) = max_error_rate {
        config.parsing_error = rate;
    }

    run(&config)
}

/// Run the full report pipeline with a resolved configuration: find the
/// newest access log, aggregate it, and render the HTML report.
///
/// Three conditions end the run early without an error, matching the
/// batch nature of the job: no matching log file, a report that already
/// exists for that date, and a parse error rate above the configured
/// maximum. Each is recorded in the diagnostics.
pub fn run(config: &ReportConfig) -> Result<()> {
    let Some(log_file) = latest_log(&config.log_dir, &config.log_pattern)
        .with_context(|| format!("Failed to list log directory: {}", config.log_dir.display()))?
    else {
        tracing::info!("No access logs found in {}", config.log_dir.display());
        return Ok(());
    };
    tracing::info!("Newest access log: {}", log_file.path.display());

    if !config.report_dir.is_dir() {
        anyhow::bail!("Report directory not found: {}", config.report_dir.display());
    }

    let report_path = config.report_dir.join(report_filename(log_file.date));
    if report_path.is_file() {
        tracing::info!("Report already exists, skipping: {}", report_path.display());
        return Ok(());
    }

    let source = LogReader::open(&log_file.path)?;
    let report = scan(source)
        .with_context(|| format!("Failed to scan access log: {}", log_file.path.display()))?;

    if report.error_rate > config.parsing_error {
        tracing::error!(
            "Parse error rate {:.2}% exceeds the configured maximum of {:.2}%, no report generated",
            report.error_rate,
            config.parsing_error
        );
        return Ok(());
    }

    let ranked = top_n(&report.stats, config.report_size);
    ReportWriter::to_file(&ranked, &config.report_template, &report_path)
        .with_context(|| format!("Failed to render report: {}", report_path.display()))?;

    tracing::info!("Report successfully created: {}", report_path.display());
    println!("Report successfully created: {}", report_path.display());

    Ok(())
}
