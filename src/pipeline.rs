//! Pure ranking pipeline.
//!
//! ```text
//! &[Order]
//!    │
//!    ├─→ calculate_stats()      ← whole dataset, independent of mode/filters
//!    │
//!    ├─→ aggregate()            ← AggregationMode
//!    ├─→ FilterPipeline::apply  ← FilterConfig
//!    ├─→ sort_entries()         ← SortDirection
//!    ├─→ paginate()             ← Pagination
//!    └─→ assemble_results()     ← ranks + percentages
//!    │
//!    ▼
//! RankingReport
//! ```
//!
//! No stage performs I/O or reads the environment. Configuration is passed
//! in, so the same inputs always give the same report.

use crate::aggregation::{aggregate, AggregationMode};
use crate::core::{DatasetStats, Order, RankedResult};
use crate::errors::{Error, Result};
use crate::filtering::{FilterConfig, FilterPipeline, FilterStatistics};
use crate::ranking::{assemble_results, paginate, sort_entries, Pagination, SortDirection};
use crate::stats::calculate_stats;
use serde::Serialize;

/// Everything that shapes one ranking run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankConfig {
    pub mode: AggregationMode,
    pub filters: FilterConfig,
    pub sort: SortDirection,
    pub page: Pagination,
    pub include_percent: bool,
    /// Allow rayon for large datasets.
    pub parallel: bool,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            mode: AggregationMode::default(),
            filters: FilterConfig::default(),
            sort: SortDirection::default(),
            page: Pagination::default(),
            include_percent: false,
            parallel: true,
        }
    }
}

impl RankConfig {
    /// Rejects settings that can never produce a page of results.
    pub fn validate(&self) -> Result<()> {
        if self.page.limit == 0 {
            return Err(Error::Configuration(
                "limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Output of one run, ready for any renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingReport {
    pub mode: AggregationMode,
    pub results: Vec<RankedResult>,
    /// Entries that passed the filters, before pagination.
    pub total_matches: usize,
    pub filter_stats: FilterStatistics,
    pub stats: DatasetStats,
    /// Whether rows carry a percentage.
    pub include_percent: bool,
}

impl RankingReport {
    /// Whether nothing survived filtering and pagination.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Runs every stage over `orders`.
///
/// # Examples
///
/// ```
/// use toppingrank::core::Order;
/// use toppingrank::pipeline::{prepare_rankings, RankConfig};
///
/// let orders = vec![
///     Order::new(["a", "b"]),
///     Order::new(["b", "a"]),
///     Order::new(["a", "b", "c"]),
///     Order::new(Vec::<String>::new()),
/// ];
/// let report = prepare_rankings(&orders, &RankConfig::default());
///
/// let rows: Vec<_> = report.results.iter().map(|r| (r.label.as_str(), r.count)).collect();
/// assert_eq!(rows, vec![("a,b", 2), ("a,b,c", 1)]);
/// ```
pub fn prepare_rankings(orders: &[Order], config: &RankConfig) -> RankingReport {
    let stats = calculate_stats(orders);

    let entries = aggregate(orders, &config.mode, config.parallel);
    log::debug!("Aggregated {} orders into {} entries", orders.len(), entries.len());

    let pipeline = FilterPipeline::from_config(&config.filters);
    let (filtered, filter_stats) = pipeline.apply(entries);
    log::debug!(
        "Filters {:?} kept {} of {} entries",
        pipeline.names(),
        filter_stats.entries_kept,
        filter_stats.total_entries
    );

    let total_matches = filtered.len();
    let sorted = sort_entries(filtered, config.sort);
    let window = paginate(sorted, config.page);
    let results = assemble_results(
        window,
        config.page,
        stats.total_orders,
        config.include_percent,
    );

    RankingReport {
        mode: config.mode.clone(),
        results,
        total_matches,
        filter_stats,
        stats,
        include_percent: config.include_percent,
    }
}

/// Like [`prepare_rankings`], treating a missing dataset as an empty one.
///
/// Used when the loader has already reported its failure and the caller
/// still wants an empty report.
pub fn prepare_rankings_or_empty(dataset: Option<&[Order]>, config: &RankConfig) -> RankingReport {
    prepare_rankings(dataset.unwrap_or(&[]), config)
}
