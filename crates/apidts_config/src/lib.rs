use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::debug;

use crate::logger::LoggerConfig;

pub(crate) mod defaults;
pub mod logger;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(skip)]
    path: Option<Utf8PathBuf>,

    /// Module name of the generated declarations, defaults to the
    /// `name` in api_project.json
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,

    /// HTTP methods to generate types for, all methods if empty
    #[serde(default)]
    pub methods: Vec<String>,

    /// apidoc parameter group used for request types
    #[serde(default = "defaults::default_request_group")]
    pub request_group: String,

    /// apidoc success group used for response types
    #[serde(default = "defaults::default_response_group")]
    pub response_group: String,

    /// Suffix of request type names, e.g. `GetUserParams`
    #[serde(default = "defaults::default_request_suffix")]
    pub request_suffix: String,

    /// Custom handlebars template for the declaration file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<Utf8PathBuf>,

    /// CLI logger configuration
    #[serde(default)]
    pub logger: LoggerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            module_name: None,
            methods: vec![],
            request_group: defaults::default_request_group(),
            response_group: defaults::default_response_group(),
            request_suffix: defaults::default_request_suffix(),
            template: None,
            logger: LoggerConfig::default(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_path(mut self, path: &Utf8Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }

    pub fn path(&self) -> Utf8PathBuf {
        self.path.clone().unwrap_or(Self::default_path())
    }

    /// Default config path is ./apidts.json
    pub fn default_path() -> Utf8PathBuf {
        Utf8PathBuf::new().join("apidts.json")
    }

    /// Loads config from json file
    ///
    /// # Errors
    ///
    /// This function will return an error if the config path does not exist or the content is invalid
    pub fn load(path: &Utf8Path) -> Result<Self> {
        debug!("Loading config from {path}");

        if !path.exists() {
            anyhow::bail!("Config file does not exist: {path}");
        }

        let contents = fs::read_to_string(path).context(format!("Failed reading config: {path}"))?;

        let cfg: Self =
            serde_json::from_str(&contents).context(format!("Failed loading config: {path}"))?;

        Ok(cfg.with_path(path))
    }

    /// Loads config from `path` when given, otherwise from the default path
    /// if it exists, otherwise falls back on defaults
    ///
    /// # Errors
    ///
    /// This function will return an error if an explicit path does not exist or any content is invalid
    pub fn load_or_default(path: Option<&Utf8Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let default = Self::default_path();
                if default.exists() {
                    Self::load(&default)
                } else {
                    debug!("No config at {default}, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Saves config to json file, falling back on default path if none is provided
    ///
    /// # Errors
    /// This function will error if it fails writing the config
    pub fn save(&self) -> Result<()> {
        let dest = self.path();
        debug!("Saving config to {dest}");
        let contents = serde_json::to_string_pretty(self).context("Failed serializing config")?;

        fs::write(&dest, contents).context(format!("Failed writing config: {dest}"))?;

        Ok(())
    }

    /// Reads the custom template, if one is configured. Relative template
    /// paths resolve against the config file's directory.
    ///
    /// # Errors
    ///
    /// This function will return an error if the template cannot be read
    pub fn read_template(&self) -> Result<Option<String>> {
        let Some(template) = &self.template else {
            return Ok(None);
        };

        let path = match self.path.as_ref().and_then(|p| p.parent()) {
            Some(dir) if template.is_relative() => dir.join(template),
            _ => template.clone(),
        };
        debug!("Reading template from {path}");

        let contents =
            fs::read_to_string(&path).context(format!("Failed reading template: {path}"))?;
        Ok(Some(contents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogLevel;

    fn utf8(path: std::path::PathBuf) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(path).expect("utf8 path")
    }

    #[test]
    fn test_defaults_from_empty_object() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.request_group, "Parameter");
        assert_eq!(cfg.response_group, "Success 200");
        assert_eq!(cfg.request_suffix, "Params");
        assert_eq!(cfg.logger.level, LogLevel::Info);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = utf8(dir.path().join("apidts.json"));

        let cfg = Config {
            module_name: Some("my-api".into()),
            methods: vec!["GET".into()],
            ..Config::default()
        }
        .with_path(&path);
        cfg.save().unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, cfg);
        assert_eq!(loaded.path(), path);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = utf8(dir.path().join("missing.json"));

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
        assert!(Config::load_or_default(Some(&path)).is_err());
    }

    #[test]
    fn test_load_invalid_log_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = utf8(dir.path().join("apidts.json"));
        fs::write(&path, r#"{"logger": {"level": "loud"}}"#).unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_read_template_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = utf8(dir.path().join("apidts.json"));
        fs::write(dir.path().join("custom.hbs"), "{{module_name}}").unwrap();
        fs::write(&path, r#"{"template": "custom.hbs"}"#).unwrap();

        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.read_template().unwrap().as_deref(), Some("{{module_name}}"));
        assert_eq!(Config::default().read_template().unwrap(), None);
    }

    #[test]
    fn test_log_level_flags() {
        assert_eq!(LogLevel::Info.with_flags(0, false), LogLevel::Info);
        assert_eq!(LogLevel::Info.with_flags(1, false), LogLevel::Debug);
        assert_eq!(LogLevel::Trace.with_flags(1, false), LogLevel::Trace);
        assert_eq!(LogLevel::Info.with_flags(2, false), LogLevel::Trace);
        assert_eq!(LogLevel::Debug.with_flags(2, true), LogLevel::Warn);
    }
}
