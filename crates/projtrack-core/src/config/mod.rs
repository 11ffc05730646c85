//! Configuration management with file persistence

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::llm::GEMINI_BASE_URL;
use crate::storage::{DatabaseConfig, default_database_path};

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "PROJTRACK_CONFIG_DIR";

/// Environment variable holding the summarizer API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the listen port
pub const PORT_ENV: &str = "PORT";

/// Projtrack configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub summarizer: SummarizerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// `host:port` listen address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Database file; the platform data directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: None,
            max_connections: crate::storage::database::DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseSettings {
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_database_path)
    }

    /// Pool settings for `Database::new`
    pub fn to_database_config(&self) -> DatabaseConfig {
        DatabaseConfig::with_path(self.resolved_path()).max_connections(self.max_connections)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Only read so that a key written to the file can be rejected
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.0-flash".to_string(),
            base_url: GEMINI_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl SummarizerConfig {
    pub fn resolved_api_key(&self) -> anyhow::Result<Option<String>> {
        self.resolved_api_key_with(|name| env::var(name).ok())
    }

    /// Resolve the API key through `lookup` instead of the process environment
    pub fn resolved_api_key_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Option<String>> {
        self.enforce_env_only()?;
        Ok(lookup(API_KEY_ENV).filter(|key| !key.trim().is_empty()))
    }

    pub fn redacted_api_key(&self) -> anyhow::Result<Option<String>> {
        self.resolved_api_key().map(|opt| opt.map(|key| redact(&key)))
    }

    pub fn enforce_env_only(&self) -> anyhow::Result<()> {
        if self.api_key.is_some() {
            return Err(anyhow!(
                "API keys must be provided via the {} environment variable, not stored in configuration",
                API_KEY_ENV
            ));
        }
        Ok(())
    }
}

/// Show only the last four characters of a secret
pub fn redact(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        "***".to_string()
    } else {
        let suffix: String = chars[chars.len() - 4..].iter().collect();
        format!("***{}", suffix)
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Self::config_dir_with(|name| env::var(name).ok())
    }

    pub fn config_dir_with(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<PathBuf> {
        let dir = if let Some(custom_dir) = lookup(CONFIG_DIR_ENV) {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("projtrack")
        };
        Ok(dir)
    }

    /// Get the config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location, or defaults if absent
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load `config.toml` from a specific directory
    pub fn load_from_dir(dir: &Path) -> anyhow::Result<Self> {
        Self::load_from(&dir.join("config.toml"))
    }

    /// Load configuration from a file, or defaults if it doesn't exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "Loaded configuration");
            Ok(config)
        } else {
            // Return default config without creating file
            Ok(Config::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a file, creating its directory
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Apply `PORT` from the process environment
    pub fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        self.apply_env_overrides_with(|name| env::var(name).ok())
    }

    pub fn apply_env_overrides_with(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<()> {
        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid {} value: {}", PORT_ENV, port))?;
        }
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        self.summarizer.enforce_env_only()?;
        if self.database.max_connections == 0 {
            return Err(anyhow!("database.max_connections must be at least 1"));
        }
        if self.summarizer.timeout_secs == 0 {
            return Err(anyhow!("summarizer.timeout_secs must be at least 1"));
        }
        Ok(())
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> anyhow::Result<String> {
        match key {
            "server.host" => Ok(self.server.host.clone()),
            "server.port" => Ok(self.server.port.to_string()),

            "database.path" => Ok(self.database.resolved_path().display().to_string()),
            "database.max_connections" => Ok(self.database.max_connections.to_string()),

            "summarizer.model" => Ok(self.summarizer.model.clone()),
            "summarizer.base_url" => Ok(self.summarizer.base_url.clone()),
            "summarizer.timeout_secs" => Ok(self.summarizer.timeout_secs.to_string()),

            // API key (special handling - show redacted)
            "summarizer.api_key" | "api_key" => match self.summarizer.redacted_api_key()? {
                Some(redacted) => Ok(redacted),
                None => Ok(format!("(not set - use {} env var)", API_KEY_ENV)),
            },

            _ => Err(anyhow!("Unknown configuration key: {}", key)),
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "server.host" => {
                if value.trim().is_empty() {
                    return Err(anyhow!("Host cannot be empty"));
                }
                self.server.host = value.trim().to_string();
            }
            "server.port" => {
                self.server.port = value
                    .parse()
                    .with_context(|| format!("Invalid port value: {}", value))?;
            }

            "database.path" => {
                self.database.path = Some(PathBuf::from(value));
            }
            "database.max_connections" => {
                let max: u32 = value
                    .parse()
                    .with_context(|| format!("Invalid max_connections value: {}", value))?;
                if max == 0 {
                    return Err(anyhow!("max_connections must be at least 1"));
                }
                self.database.max_connections = max;
            }

            "summarizer.model" => {
                self.summarizer.model = value.to_string();
            }
            "summarizer.base_url" => {
                self.summarizer.base_url = value.trim_end_matches('/').to_string();
            }
            "summarizer.timeout_secs" => {
                let secs: u64 = value
                    .parse()
                    .with_context(|| format!("Invalid timeout_secs value: {}", value))?;
                if secs == 0 {
                    return Err(anyhow!("timeout_secs must be at least 1"));
                }
                self.summarizer.timeout_secs = secs;
            }

            // API key cannot be set via config
            "summarizer.api_key" | "api_key" => {
                return Err(anyhow!(
                    "API keys cannot be stored in configuration. Set the {} environment variable instead.",
                    API_KEY_ENV
                ));
            }

            _ => {
                return Err(anyhow!("Unknown configuration key: {}", key));
            }
        }
        Ok(())
    }

    /// List all configuration keys and their values
    pub fn list(&self) -> anyhow::Result<Vec<(String, String)>> {
        let keys = [
            "server.host",
            "server.port",
            "database.path",
            "database.max_connections",
            "summarizer.model",
            "summarizer.base_url",
            "summarizer.timeout_secs",
            "summarizer.api_key",
        ];

        keys.into_iter()
            .map(|key| {
                let value = self.get(key)?;
                Ok((key.to_string(), value))
            })
            .collect()
    }
}
