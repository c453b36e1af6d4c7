use super::{ScanReport, UrlStats, median};
use crate::Result;
use crate::access::parse_line;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::io::BufRead;

/// Aggregate an access log stream into per-URL latency statistics.
///
/// Runs a single forward pass over `source`. Lines that fail the parsing
/// grammar are counted and skipped - they never abort the scan. Only a
/// failure of the underlying reader is an error; an empty stream yields an
/// empty report with a zero error rate.
pub fn scan(source: impl BufRead) -> Result<ScanReport> {
    let mut total_lines = 0usize;
    let mut parse_errors = 0usize;
    let mut total_time = 0.0f64;

    // Accumulated durations per URL, plus first-seen order so the final
    // stats list mirrors the log.
    let mut times_by_url: HashMap<String, Vec<f64>> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for line in source.lines() {
        let line = line?;
        total_lines += 1;

        let Some(request) = parse_line(line.trim_end()) else {
            parse_errors += 1;
            continue;
        };

        total_time += request.duration;
        match times_by_url.entry(request.url) {
            Entry::Occupied(mut e) => e.get_mut().push(request.duration),
            Entry::Vacant(e) => {
                order.push(e.key().clone());
                e.insert(vec![request.duration]);
            }
        }
    }

    let parsed_lines = total_lines - parse_errors;
    // Guards the time_perc division when every request took 0.0s.
    let time_divisor = if total_time > 0.0 { total_time } else { 1.0 };

    let mut stats = Vec::with_capacity(order.len());
    for url in order {
        let times = &times_by_url[&url];
        let count = times.len();
        let time_sum: f64 = times.iter().sum();
        let time_perc = time_sum * 100.0 / time_divisor;

        stats.push(UrlStats {
            count,
            count_perc: count as f64 * 100.0 / parsed_lines as f64,
            time_sum,
            time_max: times.iter().copied().fold(0.0, f64::max),
            time_perc: (time_perc * 100.0).round() / 100.0,
            time_avg: time_sum / count as f64,
            time_med: median(times).unwrap_or(0.0),
            url,
        });
    }

    let error_rate = if total_lines > 0 {
        parse_errors as f64 * 100.0 / total_lines as f64
    } else {
        0.0
    };

    tracing::info!(
        "Scan complete: {} lines, {} unparseable, {} unique URLs",
        total_lines,
        parse_errors,
        stats.len()
    );

    Ok(ScanReport {
        stats,
        total_lines,
        parse_errors,
        error_rate,
    })
}
