use crate::core::locale::Labels;
use crate::core::ConfigProvider;
use crate::utils::error::{BoardError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TRANSFERS_ENDPOINT: &str = "http://localhost:8080/api/transfers";
pub const DEFAULT_TEAMS_ENDPOINT: &str = "http://localhost:8080/api/teams";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_OUTPUT_FILENAME: &str = "index.html";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub labels: Labels,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_transfers_endpoint")]
    pub transfers_endpoint: String,
    #[serde(default = "default_teams_endpoint")]
    pub teams_endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
    pub filename: Option<String>,
}

fn default_transfers_endpoint() -> String {
    DEFAULT_TRANSFERS_ENDPOINT.to_string()
}

fn default_teams_endpoint() -> String {
    DEFAULT_TEAMS_ENDPOINT.to_string()
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            transfers_endpoint: default_transfers_endpoint(),
            teams_endpoint: default_teams_endpoint(),
            timeout_seconds: None,
            headers: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            filename: None,
        }
    }
}

impl BoardConfig {
    /// Loads and parses a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BoardError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BoardError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown names stay literal.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BoardError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_filename(&self) -> &str {
        self.output
            .filename
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_FILENAME)
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("source.transfers_endpoint", &self.source.transfers_endpoint)?;
        validation::validate_url("source.teams_endpoint", &self.source.teams_endpoint)?;

        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_range("source.timeout_seconds", timeout, 1, 300)?;
        }

        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_non_empty_string("output.filename", self.output_filename())?;

        Ok(())
    }
}

impl ConfigProvider for BoardConfig {
    fn transfers_endpoint(&self) -> &str {
        &self.source.transfers_endpoint
    }

    fn teams_endpoint(&self) -> &str {
        &self.source.teams_endpoint
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.source.timeout_seconds.map(Duration::from_secs)
    }

    fn headers(&self) -> Option<&HashMap<String, String>> {
        self.source.headers.as_ref()
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[source]
transfers_endpoint = "https://news.example.com/api/transfers"
teams_endpoint = "https://news.example.com/api/teams"
timeout_seconds = 10

[source.headers]
X-Api-Key = "abc"

[output]
path = "./site"
filename = "transfery.html"

[labels]
arrival = "Arrival"
"#;

        let config = BoardConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.transfers_endpoint(), "https://news.example.com/api/transfers");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(
            config.headers().and_then(|h| h.get("X-Api-Key")).map(String::as_str),
            Some("abc")
        );
        assert_eq!(config.output_filename(), "transfery.html");
        assert_eq!(config.labels.arrival, "Arrival");
        assert_eq!(config.labels.departure, "Odejście");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = BoardConfig::from_toml_str("").unwrap();

        assert_eq!(config.transfers_endpoint(), DEFAULT_TRANSFERS_ENDPOINT);
        assert_eq!(config.teams_endpoint(), DEFAULT_TEAMS_ENDPOINT);
        assert_eq!(config.output_path(), DEFAULT_OUTPUT_PATH);
        assert_eq!(config.output_filename(), DEFAULT_OUTPUT_FILENAME);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TRANSFER_BOARD_TEST_HOST", "https://test.api.com");

        let toml_content = r#"
[source]
transfers_endpoint = "${TRANSFER_BOARD_TEST_HOST}/api/transfers"
teams_endpoint = "${TRANSFER_BOARD_UNSET_VARIABLE}/api/teams"
"#;

        let config = BoardConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.transfers_endpoint, "https://test.api.com/api/transfers");
        assert_eq!(
            config.source.teams_endpoint,
            "${TRANSFER_BOARD_UNSET_VARIABLE}/api/teams"
        );

        std::env::remove_var("TRANSFER_BOARD_TEST_HOST");
    }

    #[test]
    fn test_config_validation() {
        let config = BoardConfig::from_toml_str(
            r#"
[source]
transfers_endpoint = "invalid-url"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = BoardConfig::from_toml_str(
            r#"
[source]
timeout_seconds = 0
"#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = BoardConfig::from_toml_str("[source").unwrap_err();
        assert!(matches!(err, BoardError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\npath = \"./from-file\"\n")
            .unwrap();

        let config = BoardConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_path(), "./from-file");
    }
}
