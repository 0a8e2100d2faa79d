//! The three grouping strategies.
//!
//! Each strategy folds a slice of orders into a count map. They work on
//! any slice so the parallel path can run them per partition and merge.

use super::Counts;
use crate::core::{ComboKey, Order};
use std::collections::BTreeSet;

/// Counts full combinations. Orders without surviving toppings are skipped.
pub fn count_combinations(orders: &[Order]) -> Counts {
    let mut counts = Counts::new();
    for order in orders {
        let key = order.combo_key();
        if key.is_empty() {
            continue;
        }
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Counts every surviving topping occurrence on its own.
pub fn count_singles(orders: &[Order]) -> Counts {
    let mut counts = Counts::new();
    for topping in orders.iter().flat_map(Order::normalized_toppings) {
        *counts.entry(ComboKey::single(topping)).or_insert(0) += 1;
    }
    counts
}

/// Counts the partners of `target` in orders that contain it.
///
/// `target` must already be normalized. A partner is counted once per
/// order even if it is repeated on that order, and the target itself is
/// never a key.
pub fn count_co_occurrences(orders: &[Order], target: &str) -> Counts {
    let mut counts = Counts::new();
    for order in orders {
        let toppings = order.normalized_toppings();
        if !toppings.iter().any(|t| t == target) {
            continue;
        }
        let partners: BTreeSet<String> = toppings.into_iter().filter(|t| t != target).collect();
        for partner in partners {
            *counts.entry(ComboKey::single(partner)).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_orders() -> Vec<Order> {
        vec![
            Order::new(["a", "b"]),
            Order::new(["b", "a"]),
            Order::new(["a", "b", "c"]),
            Order::new(Vec::<String>::new()),
        ]
    }

    fn count_of(counts: &Counts, label: &str) -> usize {
        counts
            .iter()
            .find(|(k, _)| k.to_string() == label)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    #[test]
    fn combinations_group_reordered_orders() {
        let counts = count_combinations(&sample_orders());
        assert_eq!(counts.len(), 2);
        assert_eq!(count_of(&counts, "a,b"), 2);
        assert_eq!(count_of(&counts, "a,b,c"), 1);
    }

    #[test]
    fn combinations_skip_orders_with_only_blank_names() {
        let orders = vec![
            Order::new(["  ", ""]),
            Order::without_toppings(),
            Order::new(["Ham"]),
        ];
        let counts = count_combinations(&orders);
        assert_eq!(counts.len(), 1);
        assert_eq!(count_of(&counts, "ham"), 1);
        assert_eq!(count_of(&counts, ""), 0);
    }

    #[test]
    fn singles_count_each_occurrence() {
        let counts = count_singles(&sample_orders());
        assert_eq!(count_of(&counts, "a"), 3);
        assert_eq!(count_of(&counts, "b"), 3);
        assert_eq!(count_of(&counts, "c"), 1);

        let repeated = count_singles(&[Order::new(["ham", " HAM"])]);
        assert_eq!(count_of(&repeated, "ham"), 2);
    }

    #[test]
    fn co_occurrence_counts_partners_only() {
        let counts = count_co_occurrences(&sample_orders(), "a");
        assert_eq!(counts.len(), 2);
        // every order with "a" also has "b"
        assert_eq!(count_of(&counts, "b"), 3);
        assert_eq!(count_of(&counts, "c"), 1);
        assert_eq!(count_of(&counts, "a"), 0);
    }

    #[test]
    fn co_occurrence_ignores_orders_without_target() {
        let orders = vec![Order::new(["b", "c"]), Order::new(["c"])];
        assert!(count_co_occurrences(&orders, "a").is_empty());
    }

    #[test]
    fn co_occurrence_counts_repeated_partner_once_per_order() {
        let orders = vec![Order::new(["a", "b", "b", "A"])];
        let counts = count_co_occurrences(&orders, "a");
        assert_eq!(counts.len(), 1);
        assert_eq!(count_of(&counts, "b"), 1);
    }
}
