use anyhow::Result;
use std::path::PathBuf;
use toppingrank::aggregation::AggregationMode;
use toppingrank::cli::{Commands, StdoutFormat};
use toppingrank::commands::RankCommandConfig;
use toppingrank::config;
use toppingrank::filtering::FilterConfig;
use toppingrank::formatting::FormattingConfig;
use toppingrank::io::DatasetSource;
use toppingrank::pipeline::RankConfig;
use toppingrank::ranking::{Pagination, SortDirection};

// Main orchestrator function
fn main() -> Result<()> {
    let cli = toppingrank::cli::parse_args();
    init_logging(cli.verbosity);

    match cli.command {
        command @ Commands::Rank { .. } => handle_rank_command(command),
        Commands::Init { force } => toppingrank::commands::init_config(force),
    }
}

// Side effect: logging goes to stderr, RUST_LOG overrides -v
fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

// Pure function to map -v count to a log level
fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn handle_rank_command(command: Commands) -> Result<()> {
    if let Commands::Rank {
        file,
        url,
        top,
        offset,
        sort,
        min_orders,
        topping,
        exclude_topping,
        search,
        combo_size,
        min_combo_size,
        max_combo_size,
        singles,
        with,
        percent,
        stats,
        stdout,
        export,
        plain,
        no_parallel,
    } = command
    {
        let filters = FilterConfig::default()
            .with_min_count(Some(min_orders.unwrap_or_else(config::get_default_min_orders)))
            .with_topping(topping.as_deref())
            .with_exclude_topping(exclude_topping.as_deref())
            .with_search(search.as_deref())
            .with_combo_size(combo_size)
            .with_min_combo_size(min_combo_size)
            .with_max_combo_size(max_combo_size);

        let rank = RankConfig {
            mode: AggregationMode::from_flags(with.as_deref(), singles),
            filters,
            sort: sort
                .map(SortDirection::from)
                .unwrap_or_else(config::get_default_sort),
            page: Pagination::new(offset, top.unwrap_or_else(config::get_default_limit)),
            include_percent: percent || config::get_include_percent(),
            parallel: !no_parallel,
        };

        let command_config = build_rank_config(file, url, rank, stdout, export, stats, plain);
        toppingrank::commands::handle_rank(command_config)
    } else {
        Err(anyhow::anyhow!("Invalid command"))
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env(config::get_use_color())
    }
}

fn build_rank_config(
    file: Option<PathBuf>,
    url: Option<String>,
    rank: RankConfig,
    stdout: Option<StdoutFormat>,
    export: Option<PathBuf>,
    show_stats: bool,
    plain: bool,
) -> RankCommandConfig {
    RankCommandConfig {
        source: DatasetSource::resolve(file, url, config::get_default_url),
        rank,
        stdout,
        export,
        show_stats,
        formatting_config: create_formatting_config(plain || stdout.is_some()),
    }
}
