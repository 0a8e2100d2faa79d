//! Canonical, order-independent keys for topping multisets.

use super::normalize::normalize_toppings;
use std::fmt;

/// Separator used when a key is rendered as text.
pub const KEY_DELIMITER: char = ',';

/// Canonical key of a normalized topping multiset.
///
/// Toppings are normalized, sorted by byte order and kept as separate
/// values, so filters never need to re-split a rendered string. Repeated
/// toppings are kept: `[ham, ham]` and `[ham]` are different keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComboKey {
    toppings: Vec<String>,
}

impl ComboKey {
    /// Builds a key from raw topping names.
    ///
    /// # Examples
    ///
    /// ```
    /// use toppingrank::core::ComboKey;
    ///
    /// let a = ComboKey::from_raw(&["Bacon", " ham "]);
    /// let b = ComboKey::from_raw(&["HAM", "bacon", ""]);
    /// assert_eq!(a, b);
    /// assert_eq!(a.to_string(), "bacon,ham");
    /// ```
    pub fn from_raw<S: AsRef<str>>(raw: &[S]) -> Self {
        Self::from_normalized(normalize_toppings(raw))
    }

    /// Builds a key from names that are already normalized.
    pub fn from_normalized(mut toppings: Vec<String>) -> Self {
        toppings.sort_unstable();
        Self { toppings }
    }

    /// Key holding exactly one topping.
    pub fn single(topping: impl Into<String>) -> Self {
        Self {
            toppings: vec![topping.into()],
        }
    }

    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }

    /// Number of toppings, counting repeats.
    pub fn len(&self) -> usize {
        self.toppings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toppings.is_empty()
    }

    /// Whether one of the toppings equals `topping` exactly.
    pub fn contains(&self, topping: &str) -> bool {
        self.toppings.iter().any(|t| t == topping)
    }

    /// Whether one of the toppings contains `needle` as a substring.
    pub fn any_contains(&self, needle: &str) -> bool {
        self.toppings.iter().any(|t| t.contains(needle))
    }
}

impl fmt::Display for ComboKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, topping) in self.toppings.iter().enumerate() {
            if i > 0 {
                write!(f, "{KEY_DELIMITER}")?;
            }
            f.write_str(topping)?;
        }
        Ok(())
    }
}
