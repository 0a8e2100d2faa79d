//! Composable filter pipeline.
//!
//! A [`FilterPipeline`] is a list of named predicates that are ANDed
//! together. [`FilterConfig`] describes which built-in filters are active;
//! extra predicates can be appended with [`FilterPipeline::with`] without
//! touching the existing ones.

use super::predicates::*;
use crate::core::{normalize_filter_text, AggregatedEntry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single predicate over an aggregated entry.
pub type Predicate = Box<dyn Fn(&AggregatedEntry) -> bool + Send + Sync>;

/// Parameters of the built-in filters.
///
/// `None` means the filter is inactive. The `with_*` builders normalize
/// texts and map zero sizes to `None`, so a zero size can never act as a
/// constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Minimum number of orders; always active.
    pub min_count: usize,
    /// Entry must contain this topping.
    pub topping: Option<String>,
    /// Entry must not contain this topping.
    pub exclude_topping: Option<String>,
    /// Some topping of the entry must contain this text.
    pub search: Option<String>,
    pub combo_size: Option<usize>,
    pub min_combo_size: Option<usize>,
    pub max_combo_size: Option<usize>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_count: 1,
            topping: None,
            exclude_topping: None,
            search: None,
            combo_size: None,
            min_combo_size: None,
            max_combo_size: None,
        }
    }
}

impl FilterConfig {
    pub fn with_min_count(mut self, min_count: Option<usize>) -> Self {
        if let Some(n) = min_count {
            self.min_count = n;
        }
        self
    }

    pub fn with_topping(mut self, topping: Option<&str>) -> Self {
        self.topping = normalize_filter_text(topping);
        self
    }

    pub fn with_exclude_topping(mut self, topping: Option<&str>) -> Self {
        self.exclude_topping = normalize_filter_text(topping);
        self
    }

    pub fn with_search(mut self, text: Option<&str>) -> Self {
        self.search = normalize_filter_text(text);
        self
    }

    pub fn with_combo_size(mut self, size: Option<usize>) -> Self {
        self.combo_size = non_zero(size);
        self
    }

    pub fn with_min_combo_size(mut self, size: Option<usize>) -> Self {
        self.min_combo_size = non_zero(size);
        self
    }

    pub fn with_max_combo_size(mut self, size: Option<usize>) -> Self {
        self.max_combo_size = non_zero(size);
        self
    }
}

fn non_zero(size: Option<usize>) -> Option<usize> {
    size.filter(|n| *n > 0)
}

/// Rejection counts per filter name, for debugging empty results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterStatistics {
    pub total_entries: usize,
    pub entries_kept: usize,
    /// Entries rejected, keyed by the first filter that rejected them.
    pub rejected_by: BTreeMap<&'static str, usize>,
}

impl FilterStatistics {
    pub fn total_filtered(&self) -> usize {
        self.rejected_by.values().sum()
    }
}

struct NamedFilter {
    name: &'static str,
    predicate: Predicate,
}

/// Ordered list of predicates; an entry passes when every predicate holds.
#[derive(Default)]
pub struct FilterPipeline {
    filters: Vec<NamedFilter>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the pipeline for every active filter in `config`.
    pub fn from_config(config: &FilterConfig) -> Self {
        let min_count = config.min_count;
        let mut pipeline = Self::new().with("min_count", move |e| meets_min_count(e, min_count));

        if let Some(topping) = normalize_filter_text(config.topping.as_deref()) {
            pipeline = pipeline.with("topping", move |e| contains_topping(e, &topping));
        }
        if let Some(topping) = normalize_filter_text(config.exclude_topping.as_deref()) {
            pipeline = pipeline.with("exclude_topping", move |e| excludes_topping(e, &topping));
        }
        if let Some(text) = normalize_filter_text(config.search.as_deref()) {
            pipeline = pipeline.with("search", move |e| matches_search(e, &text));
        }
        if let Some(size) = non_zero(config.combo_size) {
            pipeline = pipeline.with("combo_size", move |e| has_combo_size(e, size));
        }
        if let Some(min) = non_zero(config.min_combo_size) {
            pipeline = pipeline.with("min_combo_size", move |e| meets_min_combo_size(e, min));
        }
        if let Some(max) = non_zero(config.max_combo_size) {
            pipeline = pipeline.with("max_combo_size", move |e| meets_max_combo_size(e, max));
        }

        pipeline
    }

    /// Appends a predicate.
    pub fn with<F>(mut self, name: &'static str, predicate: F) -> Self
    where
        F: Fn(&AggregatedEntry) -> bool + Send + Sync + 'static,
    {
        self.filters.push(NamedFilter {
            name,
            predicate: Box::new(predicate),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the active filters, in evaluation order.
    pub fn names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name).collect()
    }

    pub fn accepts(&self, entry: &AggregatedEntry) -> bool {
        self.first_rejection(entry).is_none()
    }

    fn first_rejection(&self, entry: &AggregatedEntry) -> Option<&'static str> {
        self.filters
            .iter()
            .find(|f| !(f.predicate)(entry))
            .map(|f| f.name)
    }

    /// Keeps the entries every filter accepts.
    pub fn apply(&self, entries: Vec<AggregatedEntry>) -> (Vec<AggregatedEntry>, FilterStatistics) {
        let mut stats = FilterStatistics {
            total_entries: entries.len(),
            ..FilterStatistics::default()
        };

        let kept: Vec<AggregatedEntry> = entries
            .into_iter()
            .filter(|entry| match self.first_rejection(entry) {
                Some(name) => {
                    *stats.rejected_by.entry(name).or_insert(0) += 1;
                    false
                }
                None => true,
            })
            .collect();

        stats.entries_kept = kept.len();
        (kept, stats)
    }
}

impl std::fmt::Debug for FilterPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterPipeline")
            .field("filters", &self.names())
            .finish()
    }
}
