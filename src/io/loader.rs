//! Acquires the raw order list from a local file or over HTTP.
//!
//! The dataset is a JSON array of objects with an optional `toppings`
//! list. Everything this module returns is fully materialized; the
//! ranking pipeline never performs I/O itself.

use crate::core::Order;
use crate::errors::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Where to read orders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Url(String),
}

impl DatasetSource {
    /// A file path wins over a URL; with neither, `default_url` is used.
    pub fn resolve(file: Option<PathBuf>, url: Option<String>, default_url: impl FnOnce() -> String) -> Self {
        match (file, url) {
            (Some(path), _) => Self::File(path),
            (None, Some(url)) => Self::Url(url),
            (None, None) => Self::Url(default_url()),
        }
    }

    pub fn load(&self) -> Result<Vec<Order>> {
        log::info!("Loading orders from {}", self);
        let json = match self {
            Self::File(path) => read_dataset_file(path)?,
            Self::Url(url) => fetch_dataset(url)?,
        };
        let orders = parse_orders(&json)?;
        log::debug!("Loaded {} orders", orders.len());
        Ok(orders)
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

fn read_dataset_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        let message = format!("Could not read {}: {}", path.display(), e);
        Error::file_system(message, path, e)
    })
}

fn fetch_dataset(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .gzip(true)
        .build()?;

    let response = client.get(url).send()?;
    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(Error::Dataset(format!("Server returned {status}")));
    }
    Ok(response.text()?)
}

/// Parses the JSON dataset.
///
/// A top-level `null` is reported as a missing dataset; missing or `null`
/// topping lists become empty orders.
pub fn parse_orders(json: &str) -> Result<Vec<Order>> {
    let orders: Option<Vec<Order>> = serde_json::from_str(json)?;
    orders.ok_or_else(|| Error::Dataset("the dataset contains no order list".to_string()))
}
