use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# toppingrank configuration
#
# Command-line arguments and TOPPINGRANK_* environment variables
# override the values below.

[source]
url = "http://brightway.com/CodeTests/pizzas.json"

[output]
top = 15
sort = "desc"
include_percent = false

[filters]
min_orders = 1
"#;

pub fn init_config(force: bool) -> Result<()> {
    write_default_config(Path::new(CONFIG_FILE_NAME), force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

pub fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if io::file_exists(config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
