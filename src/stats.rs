//! Dataset-wide statistics.
//!
//! Statistics always describe the full normalized dataset. Aggregation
//! mode and filters never change them. Orders without surviving toppings
//! count towards the total and the average (as size zero), although the
//! combinations mode leaves them out.

use crate::core::{DatasetStats, Order};
use std::collections::HashMap;

pub fn calculate_stats(orders: &[Order]) -> DatasetStats {
    let mut frequencies: HashMap<String, usize> = HashMap::new();
    let mut surviving_total = 0usize;

    for order in orders {
        let toppings = order.normalized_toppings();
        surviving_total += toppings.len();
        for topping in toppings {
            *frequencies.entry(topping).or_insert(0) += 1;
        }
    }

    let average_combo_size = if orders.is_empty() {
        0.0
    } else {
        surviving_total as f64 / orders.len() as f64
    };

    DatasetStats {
        total_orders: orders.len(),
        unique_toppings: frequencies.len(),
        average_combo_size,
        most_popular_topping: most_frequent(frequencies),
    }
}

/// Highest count wins; ties go to the lexicographically smallest name.
fn most_frequent(frequencies: HashMap<String, usize>) -> Option<String> {
    frequencies
        .into_iter()
        .max_by(|(name_a, count_a), (name_b, count_b)| {
            count_a.cmp(count_b).then_with(|| name_b.cmp(name_a))
        })
        .map(|(name, _)| name)
}
