use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::ToppingrankConfig;
use crate::errors::Result;

/// Name of the configuration file looked up from the working directory.
pub const CONFIG_FILE_NAME: &str = ".toppingrank.toml";

/// Directories checked above the working directory, including itself.
const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_config(contents: &str) -> Result<ToppingrankConfig> {
    let config = toml::from_str::<ToppingrankConfig>(contents)?;

    if let Some(top) = config.output.as_ref().and_then(|o| o.top) {
        if top == 0 {
            return Err(crate::errors::Error::Configuration(
                "output.top must be greater than zero".to_string(),
            ));
        }
    }

    Ok(config)
}

/// Try loading config from a specific path; problems are logged, not fatal
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ToppingrankConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Ignoring {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its ancestors, nearest first, at most `max_depth` of them
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Loads the nearest config file starting at `start`
pub fn load_config_from(start: PathBuf) -> ToppingrankConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ToppingrankConfig::default()
        })
}

pub fn load_config() -> ToppingrankConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ToppingrankConfig::default()
        }
    }
}
