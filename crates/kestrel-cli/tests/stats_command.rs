use kestrel_cli::commands::stats::scan_log;
use std::path::PathBuf;

/// Helper to get path to test fixtures
fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join(filename)
}

/// Test that scan_log aggregates a plain access log fixture
#[test]
fn test_scan_log_returns_url_stats() {
    // Arrange
    let fixture = fixture_path("nginx-access-ui.log-20190505");

    // Act
    let report = scan_log(&fixture).expect("Should successfully scan access log");

    // Assert - half of the six lines are unparseable
    assert_eq!(report.total_lines, 6);
    assert_eq!(report.parse_errors, 3);
    assert_eq!(report.error_rate, 50.0);

    // The three parsed lines all hit /index.html with 5.0s each
    assert_eq!(report.stats.len(), 1);
    let stat = &report.stats[0];
    assert_eq!(stat.url, "/index.html");
    assert_eq!(stat.count, 3);
    assert_eq!(stat.count_perc, 100.0);
    assert_eq!(stat.time_sum, 15.0);
    assert_eq!(stat.time_max, 5.0);
    assert_eq!(stat.time_perc, 100.0);
    assert_eq!(stat.time_avg, 5.0);
    assert_eq!(stat.time_med, 5.0);
}

/// Test that gzip-compressed logs aggregate transparently
#[test]
fn test_scan_log_reads_gzip() {
    // Arrange
    let fixture = fixture_path("nginx-access-ui.log-20190630.gz");

    // Act
    let report = scan_log(&fixture).expect("Should successfully scan gzip access log");

    // Assert
    assert_eq!(report.total_lines, 3);
    assert_eq!(report.parse_errors, 0);
    assert_eq!(report.stats.len(), 2);

    // First-seen order: the banner URL appears first in the log
    assert_eq!(report.stats[0].url, "/api/v2/banner/25019354");
    assert_eq!(report.stats[0].count, 2);
    assert!((report.stats[0].time_sum - 0.8).abs() < 1e-9);
    assert_eq!(
        report.stats[1].url,
        "/api/1/photogenic_banners/list/?server_name=WIN7RB4"
    );
}

/// Test that a log full of garbage yields a report, not an error
#[test]
fn test_scan_log_all_garbage() {
    let report = scan_log(&fixture_path("fail.log")).expect("Garbage lines are not fatal");

    assert!(report.stats.is_empty());
    assert_eq!(report.error_rate, 100.0);
}

/// Test that a missing file is a hard error, unlike unparseable lines
#[test]
fn test_scan_log_missing_file() {
    let result = scan_log(&fixture_path("no-such.log"));
    assert!(result.is_err());
}
