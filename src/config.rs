use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub roster: RosterSettings,
    pub cache: CacheSettings,
    pub scoring: ScoringSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterSettings {
    pub endpoint: String,
    pub api_key: String,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub ttl_secs: Option<u64>,
    pub max_capacity: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_gender_weight")]
    pub gender: f64,
    #[serde(default = "default_concern_weight")]
    pub concern: f64,
    #[serde(default = "default_language_weight")]
    pub language: f64,
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_availability_weight")]
    pub availability: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            gender: default_gender_weight(),
            concern: default_concern_weight(),
            language: default_language_weight(),
            budget: default_budget_weight(),
            availability: default_availability_weight(),
        }
    }
}

fn default_gender_weight() -> f64 { 2.0 }
fn default_concern_weight() -> f64 { 3.0 }
fn default_language_weight() -> f64 { 2.0 }
fn default_budget_weight() -> f64 { 2.0 }
fn default_availability_weight() -> f64 { 1.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with SANA_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with SANA_)
            // e.g., SANA_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SANA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SANA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply well-known environment overrides for the directory API
///
/// Deploys set `ROSTER_API_URL`/`ROSTER_API_KEY` directly; the prefixed
/// `SANA_ROSTER__*` variables are the fallback spelling.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let endpoint = env::var("ROSTER_API_URL")
        .or_else(|_| env::var("SANA_ROSTER__ENDPOINT"))
        .ok();
    let api_key = env::var("ROSTER_API_KEY")
        .or_else(|_| env::var("SANA_ROSTER__API_KEY"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(endpoint) = endpoint {
        builder = builder.set_override("roster.endpoint", endpoint)?;
    }
    if let Some(api_key) = api_key {
        builder = builder.set_override("roster.api_key", api_key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.gender, 2.0);
        assert_eq!(weights.concern, 3.0);
        assert_eq!(weights.language, 2.0);
        assert_eq!(weights.budget, 2.0);
        assert_eq!(weights.availability, 1.0);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }
}
