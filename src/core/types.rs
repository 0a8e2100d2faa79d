use super::combo_key::ComboKey;
use super::normalize::normalize_toppings;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One recorded purchase, described by its raw topping names.
///
/// Orders are created by the dataset loader and never modified. A missing
/// or `null` topping list is an empty order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Order {
    #[serde(default, deserialize_with = "deserialize_toppings")]
    toppings: Option<Vec<String>>,
}

impl Order {
    pub fn new<I, S>(toppings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            toppings: Some(toppings.into_iter().map(Into::into).collect()),
        }
    }

    /// An order whose topping list was absent in the source data.
    pub fn without_toppings() -> Self {
        Self { toppings: None }
    }

    pub fn raw_toppings(&self) -> &[String] {
        self.toppings.as_deref().unwrap_or(&[])
    }

    /// Trimmed, lower-cased, non-empty toppings in input order.
    pub fn normalized_toppings(&self) -> Vec<String> {
        normalize_toppings(self.raw_toppings())
    }

    pub fn combo_key(&self) -> ComboKey {
        ComboKey::from_normalized(self.normalized_toppings())
    }
}

/// Accepts `null`, a missing field, or a list that may contain `null`
/// entries; `null` entries are dropped.
fn deserialize_toppings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|names| names.into_iter().flatten().collect()))
}

/// A grouping key and the number of orders that contributed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedEntry {
    pub key: ComboKey,
    pub count: usize,
}

impl AggregatedEntry {
    pub fn new(key: ComboKey, count: usize) -> Self {
        Self { key, count }
    }

    /// Rendered key, e.g. `bacon,ham`.
    pub fn label(&self) -> String {
        self.key.to_string()
    }
}

/// A ranked row handed to renderers and exporters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    #[serde(rename = "Rank")]
    pub rank: usize,
    #[serde(rename = "Toppings")]
    pub label: String,
    #[serde(rename = "Orders")]
    pub count: usize,
    #[serde(
        rename = "Percent",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_percent"
    )]
    pub percent: Option<f64>,
}

impl RankedResult {
    /// Percentage rendered with one decimal place, e.g. `42.5%`.
    pub fn percent_label(&self) -> Option<String> {
        self.percent.map(format_percent)
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

fn serialize_percent<S>(percent: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match percent {
        Some(value) => serializer.serialize_str(&format_percent(*value)),
        None => serializer.serialize_none(),
    }
}

/// Summary of the whole dataset, independent of mode and filters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatasetStats {
    pub total_orders: usize,
    pub unique_toppings: usize,
    pub average_combo_size: f64,
    pub most_popular_topping: Option<String>,
}

impl DatasetStats {
    pub const UNAVAILABLE: &'static str = "N/A";

    pub fn most_popular_label(&self) -> &str {
        self.most_popular_topping
            .as_deref()
            .unwrap_or(Self::UNAVAILABLE)
    }
}
