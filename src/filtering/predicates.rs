//! Pure predicate functions over aggregated entries.
//!
//! Each predicate checks one thing and takes its threshold or text as an
//! argument. Texts must already be normalized; the pipeline does that once
//! when it is built.
//!
//! # Examples
//!
//! ```
//! use toppingrank::core::{AggregatedEntry, ComboKey};
//! use toppingrank::filtering::predicates::*;
//!
//! let entry = AggregatedEntry::new(ComboKey::from_raw(&["ham", "pineapple"]), 4);
//!
//! assert!(meets_min_count(&entry, 2));
//! assert!(contains_topping(&entry, "ham"));
//! assert!(excludes_topping(&entry, "anchovies"));
//! assert!(matches_search(&entry, "apple"));
//! assert!(has_combo_size(&entry, 2));
//! ```

use crate::core::AggregatedEntry;

#[inline]
pub fn meets_min_count(entry: &AggregatedEntry, min_count: usize) -> bool {
    entry.count >= min_count
}

/// The entry's toppings include `topping` exactly.
#[inline]
pub fn contains_topping(entry: &AggregatedEntry, topping: &str) -> bool {
    entry.key.contains(topping)
}

/// None of the entry's toppings equals `topping`.
#[inline]
pub fn excludes_topping(entry: &AggregatedEntry, topping: &str) -> bool {
    !entry.key.contains(topping)
}

/// At least one topping contains `text` as a substring.
#[inline]
pub fn matches_search(entry: &AggregatedEntry, text: &str) -> bool {
    entry.key.any_contains(text)
}

#[inline]
pub fn has_combo_size(entry: &AggregatedEntry, size: usize) -> bool {
    entry.key.len() == size
}

#[inline]
pub fn meets_min_combo_size(entry: &AggregatedEntry, min: usize) -> bool {
    entry.key.len() >= min
}

#[inline]
pub fn meets_max_combo_size(entry: &AggregatedEntry, max: usize) -> bool {
    entry.key.len() <= max
}
