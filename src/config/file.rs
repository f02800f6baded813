use crate::config::{DEFAULT_SESSION_KEY, DEFAULT_YEAR};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PaddockError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML-backed configuration, for running the client with a checked-in
/// profile instead of CLI flags. `${VAR}` references are substituted
/// from the environment before parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub source: SourceConfig,
    pub limits: Option<LimitsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub base_url: String,
    pub session_key: Option<u32>,
    pub year: Option<u32>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub laps: Option<usize>,
    pub sessions: Option<usize>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| PaddockError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// Replace `${VAR_NAME}` with the environment value; unset variables are
/// left as-is so validation can flag them.
fn substitute_env_vars(content: &str) -> String {
    let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();
    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

impl ConfigProvider for FileConfig {
    fn base_url(&self) -> &str {
        &self.source.base_url
    }

    fn session_key(&self) -> u32 {
        self.source.session_key.unwrap_or(DEFAULT_SESSION_KEY)
    }

    fn year(&self) -> u32 {
        self.source.year.unwrap_or(DEFAULT_YEAR)
    }

    fn lap_limit(&self) -> usize {
        self.limits.as_ref().and_then(|l| l.laps).unwrap_or(10)
    }

    fn session_limit(&self) -> usize {
        self.limits.as_ref().and_then(|l| l.sessions).unwrap_or(5)
    }

    fn request_timeout_secs(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(10)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.base_url", &self.source.base_url)?;
        if let Some(laps) = self.limits.as_ref().and_then(|l| l.laps) {
            validation::validate_positive_number("limits.laps", laps, 1)?;
        }
        if let Some(sessions) = self.limits.as_ref().and_then(|l| l.sessions) {
            validation::validate_positive_number("limits.sessions", sessions, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_config() {
        let toml_content = r#"
[source]
base_url = "https://api.openf1.org/v1"
session_key = 9222
year = 2023

[limits]
laps = 15
sessions = 3
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.base_url(), "https://api.openf1.org/v1");
        assert_eq!(config.session_key(), 9222);
        assert_eq!(config.lap_limit(), 15);
        assert_eq!(config.session_limit(), 3);
    }

    #[test]
    fn test_defaults_fill_missing_values() {
        let toml_content = r#"
[source]
base_url = "https://api.openf1.org/v1"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.session_key(), DEFAULT_SESSION_KEY);
        assert_eq!(config.year(), DEFAULT_YEAR);
        assert_eq!(config.lap_limit(), 10);
        assert_eq!(config.request_timeout_secs(), 10);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PADDOCK_TEST_BASE_URL", "https://mirror.example.com/v1");

        let toml_content = r#"
[source]
base_url = "${PADDOCK_TEST_BASE_URL}"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_url(), "https://mirror.example.com/v1");

        std::env::remove_var("PADDOCK_TEST_BASE_URL");
    }

    #[test]
    fn test_invalid_url_fails_validation() {
        let toml_content = r#"
[source]
base_url = "invalid-url"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[source]
base_url = "https://api.openf1.org/v1"
session_key = 9158
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = FileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.session_key(), 9158);
    }
}
