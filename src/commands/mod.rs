pub mod ask;
pub mod batch;
pub mod image;
pub mod knowledge;

use agri_advisor::{Advisor, AdvisorConfig};
use anyhow::{Context, Result};
use std::path::Path;

/// Load config and build the advisor (loads the model, builds the index)
pub fn load_advisor(config_path: &Path) -> Result<Advisor> {
    let config = AdvisorConfig::load(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    Advisor::from_config(&config).context("Failed to initialize advisor")
}
