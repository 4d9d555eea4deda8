pub mod commands;
pub mod utils;

use apidts_config::Config;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

use crate::{
    commands::{generate::GenerateCmd, init::InitCmd, types::TypesCmd},
    utils::logger::init_cli_logger,
};

#[derive(Parser)]
#[command(name = "apidts")]
#[command(version)]
#[command(about = "apidts - TypeScript declarations from apidoc")]
#[command(
    long_about = "apidts reads the api_data.json and api_project.json files written by apidoc and \
generates TypeScript interface declarations for every documented request and response, \
naming nested objects after their parent type and field."
)]
#[command(after_help = "EXAMPLES:\n  \
    apidts init\n  \
    apidts generate ./apidoc -o api.d.ts\n  \
    apidts types ./apidoc --handler GetUser\n\
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path, defaults to ./apidts.json if present
    #[arg(long, short = 'c', global = true)]
    pub config: Option<Utf8PathBuf>,

    /// No logging except for errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Verbose logging (-v) or trace logging (-vv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    #[allow(clippy::missing_errors_doc)]
    pub fn handle(&self) -> anyhow::Result<()> {
        // init writes the config, everything else reads it
        let cfg = match &self.command {
            Commands::Init(_) => Ok(Config::default()),
            _ => Config::load_or_default(self.config.as_deref()),
        };

        let level = cfg.as_ref().map(|c| c.logger.level).unwrap_or_default();
        init_cli_logger(level, self.verbose, self.quiet);
        let cfg = cfg?;

        match &self.command {
            Commands::Generate(cmd) => cmd.handle(&cfg),
            Commands::Types(cmd) => cmd.handle(&cfg),
            Commands::Init(cmd) => {
                let path = self.config.clone().unwrap_or_else(Config::default_path);
                cmd.handle(&path)
            }
        }
    }
}

#[derive(Debug, Subcommand)]
#[command(styles=utils::styles::get_styles())]
pub enum Commands {
    /// Generate a TypeScript declaration file
    #[command(
        long_about = "Generates a declaration file with one namespace per apidoc group and one \
interface per request and response type."
    )]
    Generate(GenerateCmd),

    /// Print synthesized types as JSON
    #[command(long_about = "Prints the request and response types of each handler as JSON.")]
    Types(TypesCmd),

    /// Initialize configuration file
    #[command(long_about = "Initialize apidts.json configuration file.")]
    Init(InitCmd),
}
