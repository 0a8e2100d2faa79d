// Export modules for library usage
pub mod aggregation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod filtering;
pub mod formatting;
pub mod io;
pub mod pipeline;
pub mod ranking;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{
    AggregatedEntry, ComboKey, DatasetStats, Order, RankedResult, KEY_DELIMITER,
};

pub use crate::aggregation::{aggregate, AggregationMode};

pub use crate::filtering::{FilterConfig, FilterPipeline, FilterStatistics};

pub use crate::ranking::{Pagination, SortDirection};

pub use crate::pipeline::{prepare_rankings, prepare_rankings_or_empty, RankConfig, RankingReport};

pub use crate::stats::calculate_stats;

pub use crate::errors::{Error, Result};
