//! Deterministic ordering and offset/limit windowing.

use crate::core::AggregatedEntry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Order by count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Most frequent first.
    #[default]
    Descending,
    /// Least frequent first.
    Ascending,
}

impl SortDirection {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "desc" | "descending" => Some(Self::Descending),
            "asc" | "ascending" => Some(Self::Ascending),
            _ => None,
        }
    }
}

/// Compares two entries by count in `direction`, then by key ascending.
///
/// The key tie-break applies in both directions so equal counts always
/// come out in the same order.
pub fn compare_entries(a: &AggregatedEntry, b: &AggregatedEntry, direction: SortDirection) -> Ordering {
    let by_count = match direction {
        SortDirection::Descending => b.count.cmp(&a.count),
        SortDirection::Ascending => a.count.cmp(&b.count),
    };
    by_count.then_with(|| a.key.cmp(&b.key))
}

pub fn sort_entries(mut entries: Vec<AggregatedEntry>, direction: SortDirection) -> Vec<AggregatedEntry> {
    entries.sort_by(|a, b| compare_entries(a, b, direction));
    entries
}

/// Offset and page size applied after sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
}

impl Pagination {
    pub const DEFAULT_LIMIT: usize = 15;

    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// Rank of the `index`-th element of the window (0-based index).
    pub fn rank_of(&self, index: usize) -> usize {
        self.offset + index + 1
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Skips `offset` entries and keeps at most `limit` of the rest.
pub fn paginate(entries: Vec<AggregatedEntry>, page: Pagination) -> Vec<AggregatedEntry> {
    entries
        .into_iter()
        .skip(page.offset)
        .take(page.limit)
        .collect()
}
