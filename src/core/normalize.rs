//! Topping name normalization.
//!
//! Every topping name is trimmed and lower-cased before it takes part in
//! grouping, filtering or statistics. Names that are empty after trimming
//! are dropped everywhere downstream.

/// Normalizes a single topping name.
///
/// Returns `None` when the name is empty once surrounding whitespace is
/// removed.
///
/// # Examples
///
/// ```
/// use toppingrank::core::normalize::normalize_topping;
///
/// assert_eq!(normalize_topping("  Pepperoni "), Some("pepperoni".to_string()));
/// assert_eq!(normalize_topping("   "), None);
/// ```
pub fn normalize_topping(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Normalizes every name in `raw`, keeping input order and duplicates.
pub fn normalize_toppings<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .filter_map(|name| normalize_topping(name.as_ref()))
        .collect()
}

/// Normalizes an optional filter argument; empty text means "no filter".
pub fn normalize_filter_text(raw: Option<&str>) -> Option<String> {
    raw.and_then(normalize_topping)
}
