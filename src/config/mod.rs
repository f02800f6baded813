pub mod file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// The reference session the client binds every query to. 2023 Singapore
/// GP race; the first session with complete headshot data.
pub const DEFAULT_SESSION_KEY: u32 = 9158;
pub const DEFAULT_YEAR: u32 = 2023;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "paddock")]
#[command(about = "Fetch, aggregate and query OpenF1 session telemetry")]
pub struct CliConfig {
    #[arg(long, default_value = "https://api.openf1.org/v1")]
    pub base_url: String,

    /// Reference session all queries bind to.
    #[arg(long, default_value_t = DEFAULT_SESSION_KEY)]
    pub session_key: u32,

    #[arg(long, default_value_t = DEFAULT_YEAR)]
    pub year: u32,

    /// Most recent laps to keep per driver.
    #[arg(long, default_value = "10")]
    pub lap_limit: usize,

    /// Most recent sessions to list.
    #[arg(long, default_value = "5")]
    pub session_limit: usize,

    #[arg(long, default_value = "10")]
    pub request_timeout_secs: u64,

    /// Driver number to show a detail view for.
    #[arg(long)]
    pub driver: Option<u32>,

    /// Free-text filter applied to the driver roster.
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn session_key(&self) -> u32 {
        self.session_key
    }

    fn year(&self) -> u32 {
        self.year
    }

    fn lap_limit(&self) -> usize {
        self.lap_limit
    }

    fn session_limit(&self) -> usize {
        self.session_limit
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_positive_number("lap_limit", self.lap_limit, 1)?;
        validation::validate_positive_number("session_limit", self.session_limit, 1)?;
        validation::validate_range("request_timeout_secs", self.request_timeout_secs, 1, 120)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            base_url: "https://api.openf1.org/v1".to_string(),
            session_key: DEFAULT_SESSION_KEY,
            year: DEFAULT_YEAR,
            lap_limit: 10,
            session_limit: 5,
            request_timeout_secs: 10,
            driver: None,
            search: None,
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut config = base_config();
        config.base_url = "not-a-url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_lap_limit_rejected() {
        let mut config = base_config();
        config.lap_limit = 0;
        assert!(config.validate().is_err());
    }
}
