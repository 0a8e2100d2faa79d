//! Writes ranked results to a file chosen on the command line.

use super::output::{create_writer, OutputFormat};
use crate::formatting::FormattingConfig;
use crate::pipeline::RankingReport;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// `.json` (any case) exports JSON; every other extension exports CSV.
pub fn export_format_for(path: &Path) -> OutputFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
        _ => OutputFormat::Csv,
    }
}

/// Writes the report's rows to `path`, replacing any existing file.
pub fn export_results(report: &RankingReport, path: &Path) -> Result<()> {
    let format = export_format_for(path);
    let file = File::create(path)
        .with_context(|| format!("Failed to create export file {}", path.display()))?;
    let mut buffered = BufWriter::new(file);

    create_writer(format, &mut buffered, FormattingConfig::plain())
        .write_report(report, false)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    buffered.flush()?;

    log::info!("Exported {} rows to {}", report.results.len(), path.display());
    Ok(())
}
