pub mod generate;
pub mod init;
pub mod types;


use apidts_codegen::{
    handlers::{GenerateOptions, HandlerTypes, build_handler_types},
    source::ApidocSource,
};
use apidts_config::Config;
use camino::Utf8Path;

pub(crate) fn generate_options(cfg: &Config) -> GenerateOptions {
    GenerateOptions {
        methods: cfg.methods.clone(),
        request_group: cfg.request_group.clone(),
        response_group: cfg.response_group.clone(),
        request_suffix: cfg.request_suffix.clone(),
    }
}

/// Loads an apidoc folder and synthesizes the types of every selected handler
pub(crate) fn load_handler_types(
    folder: &Utf8Path,
    cfg: &Config,
) -> anyhow::Result<(ApidocSource, Vec<HandlerTypes>)> {
    let source = ApidocSource::load(folder)?;
    let handlers = build_handler_types(&source.handlers, &generate_options(cfg))?;
    Ok((source, handlers))
}
