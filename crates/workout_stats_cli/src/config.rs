use std::path::PathBuf;
use std::str::FromStr;

use crate::CliError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rendered one-line message
    #[default]
    Text,
    /// One serialized summary per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::Config(format!(
                "WORKOUT_STATS_FORMAT must be `text` or `json`, got `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Batch file with packages; the built-in reference packages are used when unset.
    pub input: Option<PathBuf>,
    pub format: OutputFormat,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Reads configuration values through `get` instead of the process environment, so tests
    /// can supply their own lookups.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, CliError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let input = get("WORKOUT_STATS_INPUT")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let format = match get("WORKOUT_STATS_FORMAT") {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };
        let log_level = get("WORKOUT_STATS_LOG_LEVEL")
            .or_else(|| get("RUST_LOG"))
            .unwrap_or_else(|| "info".into());
        Ok(Self {
            input,
            format,
            log_level,
        })
    }
}
