use crate::Result;
use crate::analysis::UrlStats;
use std::fs;
use std::path::Path;

/// Placeholder in the HTML template replaced with the statistics table.
const TABLE_PLACEHOLDER: &str = "$table_json";

pub struct ReportWriter;

impl ReportWriter {
    /// Render `stats` into the template at `template_path` and write the
    /// result to `report_path`.
    pub fn to_file(stats: &[UrlStats], template_path: &Path, report_path: &Path) -> Result<()> {
        tracing::debug!("Rendering report to: {}", report_path.display());

        let template = fs::read_to_string(template_path)?;
        let rendered = Self::render(&template, stats)?;
        fs::write(report_path, rendered)?;

        tracing::info!(
            "Successfully wrote report with {} URLs to {}",
            stats.len(),
            report_path.display()
        );

        Ok(())
    }

    /// Substitute the `$table_json` placeholder (brace form included) with
    /// the statistics serialized as a JSON array.
    pub fn render(template: &str, stats: &[UrlStats]) -> Result<String> {
        let table_json = serde_json::to_string(stats)?;
        Ok(template
            .replace("${table_json}", &table_json)
            .replace(TABLE_PLACEHOLDER, &table_json))
    }
}
