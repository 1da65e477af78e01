use crate::error::FilterError;
use log::LevelFilter;

pub const LOG_ENV: &str = "FILTER_PROMPTS_LOG";
pub const PRETTY_ENV: &str = "FILTER_PROMPTS_PRETTY";

/// Settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: LevelFilter,
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            pretty: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, FilterError> {
        Self::from_vars(
            std::env::var(LOG_ENV).ok().as_deref(),
            std::env::var(PRETTY_ENV).ok().as_deref(),
        )
    }

    fn from_vars(log: Option<&str>, pretty: Option<&str>) -> Result<Self, FilterError> {
        let mut config = Self::default();

        if let Some(level) = log.map(str::trim).filter(|s| !s.is_empty()) {
            config.log_level = level.parse().map_err(|_| {
                FilterError::ConfigError(format!("{LOG_ENV} has unknown level '{level}'"))
            })?;
        }

        if let Some(flag) = pretty.map(str::trim).filter(|s| !s.is_empty()) {
            config.pretty = parse_flag(flag).ok_or_else(|| {
                FilterError::ConfigError(format!("{PRETTY_ENV} must be a boolean, got '{flag}'"))
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
