use crate::cli::StdoutFormat;
use crate::formatting::FormattingConfig;
use crate::io::{self, DatasetSource, OutputFormat};
use crate::pipeline::{prepare_rankings, RankConfig, RankingReport};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct RankCommandConfig {
    pub source: DatasetSource,
    pub rank: RankConfig,
    pub stdout: Option<StdoutFormat>,
    pub export: Option<PathBuf>,
    pub show_stats: bool,
    pub formatting_config: FormattingConfig,
}

pub fn handle_rank(config: RankCommandConfig) -> Result<()> {
    configure_output(&config);
    config.rank.validate()?;

    let orders = config
        .source
        .load()
        .with_context(|| format!("Could not load orders from {}", config.source))?;

    let report = prepare_rankings(&orders, &config.rank);
    if report.is_empty() {
        log::info!(
            "No {} left after filtering ({} rejected)",
            report.mode.subject(),
            report.filter_stats.total_filtered()
        );
    }

    write_to_stdout(&report, &config)?;

    if let Some(ref path) = config.export {
        io::export_results(&report, path)?;
        let message = config
            .formatting_config
            .formatter()
            .success(&format!("Results exported to: {}", path.display()));
        // CSV and JSON on stdout must stay parseable.
        if config.stdout.is_some() {
            eprintln!("{message}");
        } else {
            println!("{message}");
        }
    }

    Ok(())
}

fn configure_output(config: &RankCommandConfig) {
    colored::control::set_override(config.formatting_config.color.should_use_color());
}

/// Maps `--stdout` to a renderer; no flag means the table.
pub fn stdout_format(stdout: Option<StdoutFormat>) -> OutputFormat {
    match stdout {
        Some(StdoutFormat::Json) => OutputFormat::Json,
        Some(StdoutFormat::Csv) => OutputFormat::Csv,
        None => OutputFormat::Table,
    }
}

fn write_to_stdout(report: &RankingReport, config: &RankCommandConfig) -> Result<()> {
    let format = stdout_format(config.stdout);
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    io::create_writer(format, &mut handle, config.formatting_config)
        .write_report(report, config.show_stats)?;

    // CSV has no place for the statistics block; keep stdout parseable.
    if config.show_stats && format == OutputFormat::Csv {
        io::write_stats_block(&mut std::io::stderr(), &report.stats, config.formatting_config)?;
    }
    Ok(())
}
