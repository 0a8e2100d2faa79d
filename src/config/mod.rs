//! Configuration file support.
//!
//! `.toppingrank.toml` is searched from the working directory upwards.
//! Values from it only provide defaults; command-line arguments and
//! `TOPPINGRANK_*` environment variables take precedence.

pub mod accessors;
pub mod core;
pub mod loader;

pub use accessors::{
    get_config, get_default_limit, get_default_min_orders, get_default_sort, get_default_url,
    get_include_percent, get_use_color, DEFAULT_URL,
};
pub use self::core::{FiltersConfig, OutputConfig, SourceConfig, ToppingrankConfig};
pub use loader::{load_config, load_config_from, parse_config, CONFIG_FILE_NAME};
