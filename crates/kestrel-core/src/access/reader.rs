use crate::Result;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub struct LogReader;

impl LogReader {
    /// Open a log file as a buffered line source. Files with a `.gz`
    /// extension are decompressed on the fly; the scanner never needs to
    /// know which kind it got.
    pub fn open(path: &Path) -> Result<Box<dyn BufRead>> {
        tracing::debug!("Opening log file: {}", path.display());

        let file = File::open(path)?;
        if path.extension().is_some_and(|ext| ext == "gz") {
            Ok(Box::new(BufReader::new(GzDecoder::new(file))))
        } else {
            Ok(Box::new(BufReader::new(file)))
        }
    }
}
