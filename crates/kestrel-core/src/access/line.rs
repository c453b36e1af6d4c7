use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // The quoted request field, e.g. "GET /index.html HTTP/1.1" - three
    // whitespace-separated tokens between double quotes.
    static ref REQUEST_FIELD: Regex = Regex::new(r#""([^"]+\s+[^"]+\s+[^"]+)""#).unwrap();
    // The $request_time field terminating the line, e.g. `... 39.023`.
    static ref REQUEST_TIME: Regex = Regex::new(r"\d+\.\d+$").unwrap();
}

/// URL and request duration extracted from one access log line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRequest {
    pub url: String,
    pub duration: f64,
}

/// Extract the request URL and duration from one access log line.
///
/// The URL is the second token of the first quoted request field
/// (`"METHOD /path PROTOCOL"`). The duration is the last decimal number
/// terminating the line, wherever it sits - a trailing field that merely
/// looks like a decimal would be picked up, which matches the log format
/// this grammar was written for.
///
/// Returns `None` when either field is missing; callers count such lines
/// instead of failing.
pub fn parse_line(line: &str) -> Option<ParsedRequest> {
    let request = REQUEST_FIELD.captures(line)?;
    let url = request.get(1)?.as_str().split_whitespace().nth(1)?;
    let duration = REQUEST_TIME.find(line)?.as_str().parse::<f64>().ok()?;

    Some(ParsedRequest {
        url: url.to_string(),
        duration,
    })
}
