use chrono::NaiveDate;
use std::env;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HABIT_GRID_START_DATE must be YYYY-MM-DD, got `{value}`: {source}")]
    InvalidStartDate {
        value: String,
        source: chrono::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Initial visible month; today when unset.
    pub start_date: Option<NaiveDate>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("PORT").ok().as_deref(),
            env::var("HABIT_GRID_START_DATE").ok().as_deref(),
        )
    }

    pub fn from_values(port: Option<&str>, start_date: Option<&str>) -> Result<Self, ConfigError> {
        let port = port
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let start_date = match start_date.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => Some(NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| {
                ConfigError::InvalidStartDate {
                    value: value.to_string(),
                    source,
                }
            })?),
            None => None,
        };

        Ok(Self { port, start_date })
    }
}
