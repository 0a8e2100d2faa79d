//! Data model shared by every pipeline stage.

pub mod combo_key;
pub mod normalize;
pub mod types;

pub use combo_key::{ComboKey, KEY_DELIMITER};
pub use normalize::{normalize_filter_text, normalize_topping, normalize_toppings};
pub use types::{format_percent, AggregatedEntry, DatasetStats, Order, RankedResult};
