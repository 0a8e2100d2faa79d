use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::ranking::SortDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Least popular first
    Asc,
    /// Most popular first (default)
    Desc,
}

impl From<SortOrder> for SortDirection {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => SortDirection::Ascending,
            SortOrder::Desc => SortDirection::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StdoutFormat {
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "toppingrank")]
#[command(about = "Ranks pizza topping combinations by order frequency", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank topping combinations, single toppings or co-occurring toppings
    Rank {
        /// Read orders from a local JSON file
        #[arg(long, conflicts_with = "url")]
        file: Option<PathBuf>,

        /// Fetch orders from a URL (default from config or TOPPINGRANK_URL)
        #[arg(long)]
        url: Option<String>,

        /// Show the top N rows (default: 15)
        #[arg(long = "top", visible_alias = "limit", value_parser = parse_positive)]
        top: Option<usize>,

        /// Skip the first N rows
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Sort order by number of orders
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,

        /// Only show rows ordered at least N times (default: 1)
        #[arg(long = "min-orders")]
        min_orders: Option<usize>,

        /// Only show combos that contain this exact topping
        #[arg(long)]
        topping: Option<String>,

        /// Exclude combos that contain this topping
        #[arg(long = "exclude-topping")]
        exclude_topping: Option<String>,

        /// Only show combos where some topping contains this text
        #[arg(long)]
        search: Option<String>,

        /// Only show combos with exactly N toppings (0 = no constraint)
        #[arg(long = "combo-size")]
        combo_size: Option<usize>,

        /// Only show combos with at least N toppings (0 = no constraint)
        #[arg(long = "min-combo-size")]
        min_combo_size: Option<usize>,

        /// Only show combos with at most N toppings (0 = no constraint)
        #[arg(long = "max-combo-size")]
        max_combo_size: Option<usize>,

        /// Rank individual toppings instead of combinations
        #[arg(long)]
        singles: bool,

        /// Rank toppings ordered together with this topping (overrides --singles)
        #[arg(long = "with", value_name = "TOPPING")]
        with: Option<String>,

        /// Show each row's share of all orders
        #[arg(long)]
        percent: bool,

        /// Print dataset statistics after the results
        #[arg(long)]
        stats: bool,

        /// Write results as JSON or CSV to stdout instead of a table
        #[arg(long, value_enum)]
        stdout: Option<StdoutFormat>,

        /// Export results to a .csv or .json file
        #[arg(long)]
        export: Option<PathBuf>,

        /// Plain output without colors
        #[arg(long)]
        plain: bool,

        /// Never aggregate on multiple threads
        #[arg(long = "no-parallel")]
        no_parallel: bool,
    },

    /// Write a default .toppingrank.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be greater than zero".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
