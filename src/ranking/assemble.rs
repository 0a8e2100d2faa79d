//! Turns the windowed entries into ranked output records.

use super::sort::Pagination;
use crate::core::{AggregatedEntry, RankedResult};

/// Share of `total_orders` represented by `count`, in percent.
///
/// Zero orders yields `0.0` instead of dividing by zero.
pub fn percent_of_total(count: usize, total_orders: usize) -> f64 {
    if total_orders == 0 {
        return 0.0;
    }
    count as f64 * 100.0 / total_orders as f64
}

/// Attaches offset-adjusted ranks and, when requested, percentages.
///
/// `total_orders` is the size of the whole dataset before any filtering.
pub fn assemble_results(
    window: Vec<AggregatedEntry>,
    page: Pagination,
    total_orders: usize,
    include_percent: bool,
) -> Vec<RankedResult> {
    window
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankedResult {
            rank: page.rank_of(i),
            label: entry.label(),
            count: entry.count,
            percent: include_percent.then(|| percent_of_total(entry.count, total_orders)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ComboKey;
    use pretty_assertions::assert_eq;

    #[test]
    fn percentages_use_total_orders() {
        assert_eq!(percent_of_total(1, 4), 25.0);
        assert_eq!(percent_of_total(3, 3), 100.0);
        assert_eq!(percent_of_total(5, 0), 0.0);
    }

    #[test]
    fn ranks_start_after_offset() {
        let window = vec![
            AggregatedEntry::new(ComboKey::from_raw(&["a", "b"]), 2),
            AggregatedEntry::new(ComboKey::from_raw(&["c"]), 1),
        ];
        let results = assemble_results(window, Pagination::new(3, 10), 8, true);
        assert_eq!(
            results,
            vec![
                RankedResult {
                    rank: 4,
                    label: "a,b".into(),
                    count: 2,
                    percent: Some(25.0),
                },
                RankedResult {
                    rank: 5,
                    label: "c".into(),
                    count: 1,
                    percent: Some(12.5),
                },
            ]
        );
        assert_eq!(results[1].percent_label().as_deref(), Some("12.5%"));
    }

    #[test]
    fn percent_omitted_unless_requested() {
        let window = vec![AggregatedEntry::new(ComboKey::single("ham"), 1)];
        let results = assemble_results(window, Pagination::default(), 1, false);
        assert_eq!(results[0].percent, None);
        assert_eq!(results[0].rank, 1);
    }

    #[test]
    fn zero_total_reports_zero_percent() {
        let window = vec![AggregatedEntry::new(ComboKey::single("ham"), 1)];
        let results = assemble_results(window, Pagination::default(), 0, true);
        assert_eq!(results[0].percent_label().as_deref(), Some("0.0%"));
    }
}
