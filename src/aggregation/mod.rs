//! Grouping of orders into `(key, count)` entries.
//!
//! Exactly one [`AggregationMode`] runs per invocation. The mode is a
//! tagged variant so the co-occurrence target travels with it.

pub mod parallel;
pub mod strategies;

use crate::core::{normalize_filter_text, normalize_topping, AggregatedEntry, ComboKey, Order};
use serde::Serialize;
use std::collections::HashMap;

pub use parallel::aggregate_parallel;
pub use strategies::{count_co_occurrences, count_combinations, count_singles};

/// Per-key order counts produced by a strategy.
pub type Counts = HashMap<ComboKey, usize>;

/// Datasets at least this large are aggregated on the rayon pool when
/// parallelism is enabled.
pub const PARALLEL_THRESHOLD: usize = 10_000;

/// Which grouping strategy to run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AggregationMode {
    /// Full topping combinations (default).
    #[default]
    Combinations,
    /// Individual toppings.
    Singles,
    /// Toppings ordered together with `target`.
    CoOccurrence { target: String },
}

impl AggregationMode {
    /// Co-occurrence mode for `target`, normalized like any topping.
    pub fn co_occurrence(target: &str) -> Self {
        Self::CoOccurrence {
            target: normalize_topping(target).unwrap_or_default(),
        }
    }

    /// Resolves the mode from command-line style flags.
    ///
    /// Priority is co-occurrence, then singles, then combinations. A blank
    /// co-occurrence target counts as not given.
    ///
    /// # Examples
    ///
    /// ```
    /// use toppingrank::aggregation::AggregationMode;
    ///
    /// assert_eq!(
    ///     AggregationMode::from_flags(Some("Ham"), true),
    ///     AggregationMode::CoOccurrence { target: "ham".into() }
    /// );
    /// assert_eq!(AggregationMode::from_flags(None, true), AggregationMode::Singles);
    /// assert_eq!(AggregationMode::from_flags(None, false), AggregationMode::Combinations);
    /// ```
    pub fn from_flags(co_occurrence_target: Option<&str>, singles: bool) -> Self {
        match normalize_filter_text(co_occurrence_target) {
            Some(target) => Self::CoOccurrence { target },
            None if singles => Self::Singles,
            None => Self::Combinations,
        }
    }

    /// Runs this mode's strategy sequentially over `orders`.
    pub fn count(&self, orders: &[Order]) -> Counts {
        match self {
            Self::Combinations => count_combinations(orders),
            Self::Singles => count_singles(orders),
            Self::CoOccurrence { target } => count_co_occurrences(orders, target),
        }
    }

    /// Noun used by renderers for "no results" messages.
    pub fn subject(&self) -> &'static str {
        match self {
            Self::Combinations => "combinations",
            Self::Singles => "toppings",
            Self::CoOccurrence { .. } => "co-occurring toppings",
        }
    }
}

/// Adds every count from `other` into `into`.
///
/// Summing is associative and commutative, so partitions may be merged in
/// any order.
pub fn merge_counts(mut into: Counts, other: Counts) -> Counts {
    if into.len() < other.len() {
        return merge_counts(other, into);
    }
    for (key, count) in other {
        *into.entry(key).or_insert(0) += count;
    }
    into
}

/// Aggregates `orders` with `mode`, using rayon for large inputs when
/// `parallel` is set.
pub fn aggregate(orders: &[Order], mode: &AggregationMode, parallel: bool) -> Vec<AggregatedEntry> {
    let counts = if parallel && orders.len() >= PARALLEL_THRESHOLD {
        log::debug!("Aggregating {} orders in parallel", orders.len());
        aggregate_parallel(orders, mode)
    } else {
        mode.count(orders)
    };

    counts
        .into_iter()
        .map(|(key, count)| AggregatedEntry::new(key, count))
        .collect()
}
