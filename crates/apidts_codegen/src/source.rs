use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    CodegenError, CodegenResult,
    model::{ApiHandler, ApiProject},
};

pub const API_DATA_FILE: &str = "api_data.json";
pub const API_PROJECT_FILE: &str = "api_project.json";

/// The two JSON files apidoc writes to its output folder
#[derive(Debug, Clone)]
pub struct ApidocSource {
    pub folder: Utf8PathBuf,
    pub project: ApiProject,
    pub handlers: Vec<ApiHandler>,
}

impl ApidocSource {
    /// Reads `api_project.json` and `api_data.json` from `folder`
    ///
    /// # Errors
    ///
    /// Fails if either file is missing or is not valid apidoc JSON.
    pub fn load(folder: &Utf8Path) -> CodegenResult<Self> {
        debug!("Loading apidoc output from {folder}");

        let project: ApiProject = read_json(&folder.join(API_PROJECT_FILE))?;
        let handlers: Vec<ApiHandler> = read_json(&folder.join(API_DATA_FILE))?;
        debug!(
            "Loaded {} handlers for project `{}`",
            handlers.len(),
            project.name
        );

        Ok(Self {
            folder: folder.to_path_buf(),
            project,
            handlers,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Utf8Path) -> CodegenResult<T> {
    let contents = fs::read_to_string(path).map_err(|source| CodegenError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| CodegenError::Json {
        path: path.to_path_buf(),
        source,
    })
}
