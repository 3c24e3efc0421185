use super::loader::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Environment variable that overrides any configured access token.
pub const TOKEN_ENV: &str = "OMNIBAR_WIT_TOKEN";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OmnibarConfig {
    #[serde(default)]
    pub nlu: NluConfig,
    #[serde(default)]
    pub server: ServerConfig,
    /// Extra site keywords, merged over the builtin table.
    #[serde(default)]
    pub sites: BTreeMap<String, String>,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NluConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default = "default_token_file")]
    pub token_file: PathBuf,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for NluConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_version: default_api_version(),
            access_token: None,
            token_file: default_token_file(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl NluConfig {
    /// The access token from `OMNIBAR_WIT_TOKEN`, the inline value, or the
    /// first line of the token file, in that order. A token file that does
    /// not exist is not an error.
    pub fn resolve_token(&self) -> Result<Option<String>, ConfigError> {
        self.token_with_env(std::env::var(TOKEN_ENV).ok())
    }

    pub(crate) fn token_with_env(&self, env: Option<String>) -> Result<Option<String>, ConfigError> {
        let explicit = env
            .into_iter()
            .chain(self.access_token.clone())
            .map(|t| t.trim().to_string())
            .find(|t| !t.is_empty());
        if explicit.is_some() {
            return Ok(explicit);
        }

        if !self.token_file.exists() {
            return Ok(None);
        }
        let content =
            std::fs::read_to_string(&self.token_file).map_err(|source| ConfigError::TokenFile {
                path: self.token_file.clone(),
                source,
            })?;
        Ok(content
            .lines()
            .next()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string))
    }
}

fn default_endpoint() -> String {
    "https://api.wit.ai/message".to_string()
}

fn default_api_version() -> String {
    "20170307".to_string()
}

fn default_token_file() -> PathBuf {
    PathBuf::from(".config")
}

fn default_timeout_ms() -> u64 {
    10000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub pretty: bool,
}
