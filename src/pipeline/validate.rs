// src/pipeline/validate.rs

//! Configuration validation entry point.

use crate::error::Result;
use crate::models::Config;

/// Validate the loaded configuration and log its key values.
pub fn run_validate(config: &Config) -> Result<()> {
    config.validate()?;

    log::info!("✓ Config OK");
    log::info!("    endpoint: {}", config.http.endpoint);
    log::info!("    timeout: {}s", config.http.timeout_secs);
    log::info!(
        "    rules: {} shop types, {} crafts, {} name keywords",
        config.filter.shop_types.len(),
        config.filter.craft_types.len(),
        config.filter.name_keywords.len()
    );
    log::info!("    output: {}", config.output.csv_path.display());

    Ok(())
}
