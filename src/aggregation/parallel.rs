//! Partition-then-merge aggregation on the rayon thread pool.

use super::{merge_counts, AggregationMode, Counts};
use crate::core::Order;
use rayon::prelude::*;

/// Orders per rayon task.
const CHUNK_SIZE: usize = 2_048;

/// Runs the strategy for `mode` on chunks of `orders` in parallel.
///
/// The merge sums counts per key, so the result equals the sequential
/// result regardless of how rayon splits the work.
pub fn aggregate_parallel(orders: &[Order], mode: &AggregationMode) -> Counts {
    orders
        .par_chunks(CHUNK_SIZE)
        .map(|chunk| mode.count(chunk))
        .reduce(Counts::new, merge_counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generated_orders(n: usize) -> Vec<Order> {
        let names = ["ham", "bacon", "Olives", " feta ", "pineapple", ""];
        (0..n)
            .map(|i| {
                let picks = (0..(i % 4)).map(|j| names[(i * 7 + j * 3) % names.len()]);
                Order::new(picks)
            })
            .collect()
    }

    #[test]
    fn parallel_matches_sequential_for_every_mode() {
        let orders = generated_orders(10_000);
        let modes = [
            AggregationMode::Combinations,
            AggregationMode::Singles,
            AggregationMode::co_occurrence("ham"),
        ];
        for mode in &modes {
            assert_eq!(aggregate_parallel(&orders, mode), mode.count(&orders));
        }
    }

    #[test]
    fn empty_input_yields_empty_counts() {
        assert!(aggregate_parallel(&[], &AggregationMode::Singles).is_empty());
    }
}
