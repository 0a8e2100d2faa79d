//! Cached configuration and default-value resolution.
//!
//! Precedence: CLI args (applied by the caller) > env vars > config file >
//! built-in defaults. The `resolve_*` functions are pure so each layer can
//! be tested without touching the process environment.

use std::sync::OnceLock;

use super::core::ToppingrankConfig;
use super::loader::load_config;
use crate::ranking::{Pagination, SortDirection};

/// Source of orders when neither a file nor a URL is given.
pub const DEFAULT_URL: &str = "http://brightway.com/CodeTests/pizzas.json";

pub const ENV_URL: &str = "TOPPINGRANK_URL";
pub const ENV_TOP: &str = "TOPPINGRANK_TOP";
pub const ENV_MIN_ORDERS: &str = "TOPPINGRANK_MIN_ORDERS";

/// Cache the configuration
static CONFIG: OnceLock<ToppingrankConfig> = OnceLock::new();

/// Get the cached configuration
pub fn get_config() -> &'static ToppingrankConfig {
    CONFIG.get_or_init(load_config)
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

pub fn resolve_url(env: Option<String>, config: &ToppingrankConfig) -> String {
    env.or_else(|| config.source.as_ref().and_then(|s| s.url.clone()))
        .unwrap_or_else(|| DEFAULT_URL.to_string())
}

pub fn resolve_limit(env: Option<String>, config: &ToppingrankConfig) -> usize {
    env.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .or_else(|| config.output.as_ref().and_then(|o| o.top))
        .filter(|n| *n > 0)
        .unwrap_or(Pagination::DEFAULT_LIMIT)
}

pub fn resolve_min_orders(env: Option<String>, config: &ToppingrankConfig) -> usize {
    env.and_then(|v| v.trim().parse::<usize>().ok())
        .or_else(|| config.filters.as_ref().and_then(|f| f.min_orders))
        .unwrap_or(1)
}

pub fn resolve_sort(config: &ToppingrankConfig) -> SortDirection {
    config
        .output
        .as_ref()
        .and_then(|o| o.sort.as_deref())
        .and_then(|s| {
            let parsed = SortDirection::parse(s);
            if parsed.is_none() {
                log::warn!("Unknown sort order '{}' in config. Using descending.", s);
            }
            parsed
        })
        .unwrap_or_default()
}

pub fn resolve_include_percent(config: &ToppingrankConfig) -> bool {
    config
        .output
        .as_ref()
        .and_then(|o| o.include_percent)
        .unwrap_or(false)
}

/// Default dataset URL
pub fn get_default_url() -> String {
    resolve_url(env_value(ENV_URL), get_config())
}

/// Default page size (default: 15)
pub fn get_default_limit() -> usize {
    resolve_limit(env_value(ENV_TOP), get_config())
}

/// Default minimum number of orders (default: 1)
pub fn get_default_min_orders() -> usize {
    resolve_min_orders(env_value(ENV_MIN_ORDERS), get_config())
}

pub fn get_default_sort() -> SortDirection {
    resolve_sort(get_config())
}

pub fn get_include_percent() -> bool {
    resolve_include_percent(get_config())
}

/// Color preference from the config file, if any
pub fn get_use_color() -> Option<bool> {
    get_config().output.as_ref().and_then(|o| o.use_color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::core::{FiltersConfig, OutputConfig, SourceConfig};

    fn file_config() -> ToppingrankConfig {
        ToppingrankConfig {
            source: Some(SourceConfig {
                url: Some("http://example.test/orders.json".into()),
            }),
            output: Some(OutputConfig {
                top: Some(25),
                sort: Some("asc".into()),
                include_percent: Some(true),
                use_color: None,
            }),
            filters: Some(FiltersConfig {
                min_orders: Some(2),
            }),
        }
    }

    #[test]
    fn built_in_defaults() {
        let config = ToppingrankConfig::default();
        assert_eq!(resolve_url(None, &config), DEFAULT_URL);
        assert_eq!(resolve_limit(None, &config), 15);
        assert_eq!(resolve_min_orders(None, &config), 1);
        assert_eq!(resolve_sort(&config), SortDirection::Descending);
        assert!(!resolve_include_percent(&config));
    }

    #[test]
    fn config_file_overrides_defaults() {
        let config = file_config();
        assert_eq!(resolve_url(None, &config), "http://example.test/orders.json");
        assert_eq!(resolve_limit(None, &config), 25);
        assert_eq!(resolve_min_orders(None, &config), 2);
        assert_eq!(resolve_sort(&config), SortDirection::Ascending);
        assert!(resolve_include_percent(&config));
    }

    #[test]
    fn env_overrides_config_file() {
        let config = file_config();
        assert_eq!(
            resolve_url(Some("http://env.test/o.json".into()), &config),
            "http://env.test/o.json"
        );
        assert_eq!(resolve_limit(Some("3".into()), &config), 3);
        assert_eq!(resolve_min_orders(Some(" 4 ".into()), &config), 4);
    }

    #[test]
    fn unparsable_env_values_are_ignored() {
        let config = file_config();
        assert_eq!(resolve_limit(Some("lots".into()), &config), 25);
        assert_eq!(resolve_limit(Some("0".into()), &config), 25);
        assert_eq!(resolve_min_orders(Some("-1".into()), &config), 2);
    }

    #[test]
    fn unknown_sort_falls_back_to_descending() {
        let config = ToppingrankConfig {
            output: Some(OutputConfig {
                sort: Some("random".into()),
                ..OutputConfig::default()
            }),
            ..ToppingrankConfig::default()
        };
        assert_eq!(resolve_sort(&config), SortDirection::Descending);
    }
}
