use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Level used when no `-v` / `-q` flag is passed
    #[serde(default)]
    pub level: LogLevel,
}

/// Define an enumeration for log levels
/// Ordered from lowest to highest severity: Trace < Debug < Info < Warn < Error
#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// The "trace" level.
    #[serde(rename = "trace", alias = "TRACE")]
    Trace,
    /// The "debug" level.
    #[serde(rename = "debug", alias = "DEBUG")]
    Debug,
    /// The "info" level.
    #[serde(rename = "info", alias = "INFO")]
    #[default]
    Info,
    /// The "warn" level.
    #[serde(rename = "warn", alias = "WARN")]
    Warn,
    /// The "error" level.
    #[serde(rename = "error", alias = "ERROR")]
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Level after applying the CLI's `-q` and `-v` flags.
    /// `-q` wins over `-v`; each `-v` lowers the level by one step.
    #[must_use]
    pub fn with_flags(self, verbose: u8, quiet: bool) -> Self {
        if quiet {
            return LogLevel::Warn;
        }

        match verbose {
            0 => self,
            1 => self.min(LogLevel::Debug),
            _ => LogLevel::Trace,
        }
    }
}
