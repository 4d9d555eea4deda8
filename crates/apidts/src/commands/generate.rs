use std::fs;

use anyhow::{Context, Result};
use apidts_codegen::{handlers::group_by_service, render::render_declarations};
use apidts_config::Config;
use camino::Utf8PathBuf;
use clap::Parser;
use tracing::log::{debug, info};

use crate::{
    commands::load_handler_types,
    utils::styles::{fmt_bold, fmt_dimmed, fmt_success},
};

#[derive(Debug, Clone, Parser)]
pub struct GenerateCmd {
    /// apidoc output folder containing api_data.json and api_project.json
    pub folder: Utf8PathBuf,

    /// Write declarations to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<Utf8PathBuf>,

    /// Module name to declare, overrides config and api_project.json
    #[arg(long)]
    pub module_name: Option<String>,
}

impl GenerateCmd {
    /// Renders the declaration file for the configured apidoc folder
    pub(crate) fn render(&self, cfg: &Config) -> Result<String> {
        let (source, handlers) = load_handler_types(&self.folder, cfg)?;

        let module_name = self
            .module_name
            .as_deref()
            .or(cfg.module_name.as_deref())
            .unwrap_or(&source.project.name);
        debug!(
            "Generating `{module_name}` declarations for {} handlers",
            handlers.len()
        );

        let template = cfg.read_template()?;
        let services = group_by_service(handlers);
        let declarations = render_declarations(module_name, &services, template.as_deref())?;

        Ok(declarations)
    }

    pub(crate) fn handle(&self, cfg: &Config) -> Result<()> {
        let declarations = self.render(cfg)?;

        match &self.output {
            Some(output) => {
                fs::write(output, &declarations)
                    .context(format!("Failed writing declarations: {output}"))?;
                info!(
                    "{}",
                    fmt_success(&format!(
                        "Declarations for {folder} written to {path}",
                        folder = fmt_bold(self.folder.as_str()),
                        path = fmt_dimmed(output.as_str()),
                    ))
                );
            }
            None => print!("{declarations}"),
        }

        Ok(())
    }
}
