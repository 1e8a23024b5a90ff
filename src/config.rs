use std::env;

use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use tracing::Level;

const LOG_LEVEL_VAR: &str = "DDB_MODEL_LOG_LEVEL";
const FORMAT_VAR: &str = "DDB_MODEL_FORMAT";

/// How a converted record is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// DynamoDB JSON request shape, keyed by wire member names.
    Document,
    /// `Debug` rendering of the `aws-sdk-dynamodb` builder.
    Sdk,
    /// The plain record itself, as JSON.
    Record,
}

/// Settings read from the environment (and `.env`, loaded by `main`).
///
/// - `DDB_MODEL_LOG_LEVEL`: `trace`, `debug`, `info`, `warn` or `error`. Defaults to `info`.
/// - `DDB_MODEL_FORMAT`: default output format, `document`, `sdk` or `record`.
///   Defaults to `document`.
#[derive(Debug, Clone)]
pub struct Settings {
    pub log_level: Level,
    pub format: Format,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            format: Format::Document,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            settings.log_level = level
                .parse()
                .with_context(|| format!("{LOG_LEVEL_VAR}={level:?}"))?;
        }

        if let Some(format) = lookup(FORMAT_VAR) {
            settings.format = Format::from_str(&format, true)
                .map_err(|e| anyhow!("{FORMAT_VAR}={format:?}: {e}"))?;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(vars: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() -> Result<()> {
        let settings = settings_from(&[])?;
        assert_eq!(settings.log_level, Level::INFO);
        assert_eq!(settings.format, Format::Document);
        Ok(())
    }

    #[test]
    fn test_overrides() -> Result<()> {
        let settings = settings_from(&[(LOG_LEVEL_VAR, "debug"), (FORMAT_VAR, "SDK")])?;
        assert_eq!(settings.log_level, Level::DEBUG);
        assert_eq!(settings.format, Format::Sdk);
        Ok(())
    }

    #[test]
    fn test_invalid_values() {
        assert!(settings_from(&[(LOG_LEVEL_VAR, "loud")]).is_err());
        assert!(settings_from(&[(FORMAT_VAR, "yaml")]).is_err());
    }
}
