//! I/O at the edges: dataset loading, rendering and export.

pub mod export;
pub mod loader;
pub mod output;

pub use export::{export_format_for, export_results};
pub use loader::{parse_orders, DatasetSource};
pub use output::{
    create_writer, write_stats_block, CsvWriter, JsonWriter, OutputFormat, OutputWriter, TableWriter,
};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
