use serde::{Deserialize, Serialize};

/// Root of the `.toppingrank.toml` file.
///
/// Every table is optional; missing values fall back to the built-in
/// defaults in [`super::accessors`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToppingrankConfig {
    /// Where orders come from when neither `--file` nor `--url` is given
    #[serde(default)]
    pub source: Option<SourceConfig>,

    /// Output defaults
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Filter defaults
    #[serde(default)]
    pub filters: Option<FiltersConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Number of rows to show
    pub top: Option<usize>,
    /// `asc` or `desc`
    pub sort: Option<String>,
    /// Show each row's share of all orders
    #[serde(default)]
    pub include_percent: Option<bool>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FiltersConfig {
    pub min_orders: Option<usize>,
}
