use std::path::Path;

use anyhow::Context;
use lens_config::LensConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, honouring `--config` when given.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LensConfig> {
    let config = match &flags.config {
        Some(path) => LensConfig::load_from(Path::new(path))
            .with_context(|| format!("failed to load config from {path}"))?,
        None => LensConfig::load_with_dotenv().context("failed to load configuration")?,
    };
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
