//! Renderers for ranking reports: table, CSV and JSON.

use crate::core::{DatasetStats, RankedResult};
use crate::formatting::FormattingConfig;
use crate::pipeline::RankingReport;
use comfy_table::{presets, Attribute, Cell, CellAlignment, Color, Table};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

pub trait OutputWriter {
    /// Writes the ranked rows, followed by dataset statistics when
    /// `include_stats` is set.
    fn write_report(&mut self, report: &RankingReport, include_stats: bool) -> anyhow::Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Table => Box::new(TableWriter::new(writer, formatting)),
        OutputFormat::Csv => Box::new(CsvWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}

pub struct TableWriter<W: Write> {
    writer: W,
    formatting: FormattingConfig,
}

impl<W: Write> TableWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self { writer, formatting }
    }

    fn build_table(&self, report: &RankingReport) -> Table {
        let use_color = self.formatting.color.should_use_color();
        let mut table = Table::new();
        table.load_preset(presets::ASCII_HORIZONTAL_ONLY);
        if use_color {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }

        let mut titles = vec!["Rank", "Toppings", "Orders"];
        if report.include_percent {
            titles.push("Percent");
        }
        table.set_header(titles.into_iter().map(|title| {
            let cell = Cell::new(title).add_attribute(Attribute::Bold);
            if use_color {
                cell.fg(Color::Blue)
            } else {
                cell
            }
        }));

        for result in &report.results {
            let mut row = vec![
                Cell::new(result.rank),
                Cell::new(&result.label),
                Cell::new(result.count),
            ];
            if let Some(percent) = result.percent_label() {
                row.push(Cell::new(percent));
            }
            table.add_row(row);
        }

        for column in [0, 2, 3] {
            if let Some(column) = table.column_mut(column) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }

        table
    }
}

/// Writes the human-readable statistics block.
pub fn write_stats_block<W: Write>(
    writer: &mut W,
    stats: &DatasetStats,
    formatting: FormattingConfig,
) -> anyhow::Result<()> {
    let formatter = formatting.formatter();
    writeln!(writer)?;
    writeln!(writer, "{}", formatter.header("--- Dataset Statistics ---"))?;
    writeln!(writer, "Total orders:     {}", stats.total_orders)?;
    writeln!(writer, "Unique toppings:  {}", stats.unique_toppings)?;
    writeln!(writer, "Avg combo size:   {:.2}", stats.average_combo_size)?;
    writeln!(writer, "Most popular:     {}", stats.most_popular_label())?;
    Ok(())
}

impl<W: Write> OutputWriter for TableWriter<W> {
    fn write_report(&mut self, report: &RankingReport, include_stats: bool) -> anyhow::Result<()> {
        let table = self.build_table(report);
        writeln!(self.writer, "{table}")?;

        if report.is_empty() {
            let formatter = self.formatting.formatter();
            let message = format!("No {} match the specified filters.", report.mode.subject());
            writeln!(self.writer, "{}", formatter.warning(&message))?;
        } else if report.total_matches > report.results.len() {
            let first = report.results[0].rank;
            let last = first + report.results.len() - 1;
            writeln!(
                self.writer,
                "Showing {}-{} of {} {}",
                first,
                last,
                report.total_matches,
                report.mode.subject()
            )?;
        }

        if include_stats {
            write_stats_block(&mut self.writer, &report.stats, self.formatting)?;
        }
        Ok(())
    }
}

pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

/// Quotes a CSV field, doubling embedded quotes.
fn quote_csv(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

pub fn csv_header(include_percent: bool) -> &'static str {
    if include_percent {
        "Rank,Toppings,Orders,Percent"
    } else {
        "Rank,Toppings,Orders"
    }
}

pub fn csv_row(result: &RankedResult) -> String {
    let mut row = format!("{},{},{}", result.rank, quote_csv(&result.label), result.count);
    if let Some(percent) = result.percent_label() {
        row.push(',');
        row.push_str(&percent);
    }
    row
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    /// CSV carries rows only; statistics are not part of the table.
    fn write_report(&mut self, report: &RankingReport, _include_stats: bool) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", csv_header(report.include_percent))?;
        for result in &report.results {
            writeln!(self.writer, "{}", csv_row(result))?;
        }
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct JsonReport<'a> {
    results: &'a [RankedResult],
    stats: &'a DatasetStats,
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    /// Rows alone are a JSON array; with statistics the document becomes
    /// `{"Results": [...], "Stats": {...}}`.
    fn write_report(&mut self, report: &RankingReport, include_stats: bool) -> anyhow::Result<()> {
        let json = if include_stats {
            serde_json::to_string_pretty(&JsonReport {
                results: &report.results,
                stats: &report.stats,
            })?
        } else {
            serde_json::to_string_pretty(&report.results)?
        };
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}
