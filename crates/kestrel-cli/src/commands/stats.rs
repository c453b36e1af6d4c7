use crate::OutputFormat;
use anyhow::Result;
use kestrel_core::access::LogReader;
use kestrel_core::analysis::{ScanReport, UrlStats, scan, top_n};
use std::path::Path;

/// Scan an access log file and return the aggregated statistics.
pub fn scan_log(file: &Path) -> Result<ScanReport> {
    tracing::debug!("Scanning access log: {}", file.display());

    let source = LogReader::open(file)?;
    let report = scan(source)?;

    Ok(report)
}

pub fn execute(file: &Path, top: usize, format: OutputFormat) -> Result<()> {
    tracing::info!("Aggregating access log: {}", file.display());

    let report = scan_log(file)?;
    let ranked = top_n(&report.stats, top);

    match format {
        OutputFormat::Json => output_json(&report, &ranked)?,
        OutputFormat::Table => output_table(&report, &ranked),
        OutputFormat::Pretty => output_pretty(&report, &ranked),
    }

    Ok(())
}

fn output_pretty(report: &ScanReport, ranked: &[UrlStats]) {
    use console::style;

    println!("\n{}", style("Access Log Report").bold().cyan());
    println!("{}", style("=================").cyan());

    println!("\n{}", style("Scan:").bold());
    println!("  Total Lines:       {}", report.total_lines);
    println!("  Unparseable Lines: {}", report.parse_errors);
    println!("  Error Rate:        {:.2}%", report.error_rate);
    println!("  Unique URLs:       {}", report.stats.len());

    if !ranked.is_empty() {
        println!("\n{}", style("Heaviest URLs by total time:").bold());
        for (i, stat) in ranked.iter().enumerate() {
            println!(
                "  {}. [{:.3}s total, {:.3}s avg, {:.3}s med, {} hits] {}",
                i + 1,
                stat.time_sum,
                stat.time_avg,
                stat.time_med,
                stat.count,
                stat.url
            );
        }
    }

    println!(); // trailing newline
}

fn output_json(report: &ScanReport, ranked: &[UrlStats]) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonReport<'a> {
        total_lines: usize,
        parse_errors: usize,
        error_rate: f64,
        stats: &'a [UrlStats],
    }

    let json = serde_json::to_string_pretty(&JsonReport {
        total_lines: report.total_lines,
        parse_errors: report.parse_errors,
        error_rate: report.error_rate,
        stats: ranked,
    })?;
    println!("{}", json);

    Ok(())
}

fn output_table(report: &ScanReport, ranked: &[UrlStats]) {
    println!("url,count,count_perc,time_sum,time_max,time_perc,time_avg,time_med");
    for stat in ranked {
        println!(
            "{},{},{:.3},{:.3},{:.3},{:.2},{:.3},{:.3}",
            stat.url,
            stat.count,
            stat.count_perc,
            stat.time_sum,
            stat.time_max,
            stat.time_perc,
            stat.time_avg,
            stat.time_med
        );
    }
    println!("# error_rate,{:.2}", report.error_rate);
}
