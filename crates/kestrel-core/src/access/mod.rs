mod discover;
mod line;
mod reader;

pub use discover::{DEFAULT_LOG_PATTERN, LogFile, latest_log, report_filename};
pub use line::{ParsedRequest, parse_line};
pub use reader::LogReader;
