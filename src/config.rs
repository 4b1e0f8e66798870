use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime configuration for the recipe fetcher and CLI
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Only URLs starting with this prefix are accepted by the CLI
    #[serde(default = "default_url_prefix")]
    pub allowed_url_prefix: String,
    /// User agent sent with recipe page requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            allowed_url_prefix: default_url_prefix(),
            user_agent: default_user_agent(),
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_url_prefix() -> String {
    "https://www.allrecipes.com/recipe/".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE__ALLOWED_URL_PREFIX
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.allowed_url_prefix, "https://www.allrecipes.com/recipe/");
        assert_eq!(config.timeout, 30);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let result = AppConfig::load();
        // No config.toml and no RECIPE__ variables in the test environment
        // means every field falls back to its serde default
        if let Ok(config) = result {
            assert_eq!(config.timeout, default_timeout());
        }
    }
}
