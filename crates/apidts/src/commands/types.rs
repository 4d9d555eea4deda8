use anyhow::Result;
use apidts_config::Config;
use camino::Utf8PathBuf;
use clap::Parser;

use crate::commands::load_handler_types;

#[derive(Debug, Clone, Parser)]
pub struct TypesCmd {
    /// apidoc output folder containing api_data.json and api_project.json
    pub folder: Utf8PathBuf,

    /// Only print the types of this handler
    #[arg(long)]
    pub handler: Option<String>,
}

impl TypesCmd {
    pub(crate) fn to_json(&self, cfg: &Config) -> Result<serde_json::Value> {
        let (_, mut handlers) = load_handler_types(&self.folder, cfg)?;

        if let Some(name) = &self.handler {
            handlers.retain(|h| &h.name == name);
            if handlers.is_empty() {
                anyhow::bail!("Handler '{name}' not found in {}", self.folder);
            }
        }

        Ok(serde_json::to_value(handlers)?)
    }

    pub(crate) fn handle(&self, cfg: &Config) -> Result<()> {
        let json = self.to_json(cfg)?;
        println!("{}", serde_json::to_string_pretty(&json)?);
        Ok(())
    }
}
