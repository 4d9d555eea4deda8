use anyhow::Result;
use apidts_config::Config;
use camino::Utf8Path;
use clap::Parser;
use tracing::log::info;

use crate::utils::styles::{fmt_dimmed, fmt_success};

#[derive(Debug, Clone, Parser)]
pub struct InitCmd {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

impl InitCmd {
    pub(crate) fn handle(&self, path: &Utf8Path) -> Result<()> {
        if path.exists() && !self.force {
            anyhow::bail!("Config file already exists: {path} (use --force to overwrite)");
        }

        Config::default().with_path(path).save()?;

        info!(
            "{}",
            fmt_success(&format!("Created config {}", fmt_dimmed(path.as_str())))
        );

        Ok(())
    }
}
