use apidts::Cli;
use clap::Parser;
use tracing::log::error;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.handle() {
        error!("{e:#}");
        std::process::exit(1);
    }
}
