//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PLAYOFF` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a runnable server.
//!
//! # Example
//!
//! ```no_run
//! use playoff::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.port);
//! ```

mod chat;
mod cover_art;
mod error;
mod server;
mod voting;

pub use chat::ChatConfig;
pub use cover_art::CoverArtConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{AllowedOrigins, Environment, LogFormat, ServerConfig};
pub use voting::VotingConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Roster size and seeding
    #[serde(default)]
    pub voting: VotingConfig,

    /// Chat history window
    #[serde(default)]
    pub chat: ChatConfig,

    /// Cover art lookups
    #[serde(default)]
    pub cover_art: CoverArtConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PLAYOFF` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PLAYOFF__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PLAYOFF__VOTING__MAX_SONGS=20` -> `voting.max_songs = 20`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PLAYOFF")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.voting.validate()?;
        self.chat.validate()?;
        self.cover_art.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("PLAYOFF__SERVER__PORT");
        env::remove_var("PLAYOFF__SERVER__ENVIRONMENT");
        env::remove_var("PLAYOFF__SERVER__LOG_FORMAT");
        env::remove_var("PLAYOFF__VOTING__MAX_SONGS");
        env::remove_var("PLAYOFF__VOTING__SEED_DEMO_ROSTER");
        env::remove_var("PLAYOFF__COVER_ART__ITUNES_ENABLED");
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.voting.max_songs, 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PLAYOFF__SERVER__PORT", "3000");
        env::set_var("PLAYOFF__SERVER__LOG_FORMAT", "json");
        env::set_var("PLAYOFF__VOTING__MAX_SONGS", "20");
        env::set_var("PLAYOFF__VOTING__SEED_DEMO_ROSTER", "false");
        env::set_var("PLAYOFF__COVER_ART__ITUNES_ENABLED", "false");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.voting.max_songs, 20);
        assert!(!config.voting.seed_demo_roster);
        assert!(!config.cover_art.itunes_enabled);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PLAYOFF__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_validate_reports_first_invalid_section() {
        let mut config = AppConfig::default();
        config.voting.max_songs = 0;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidRosterSize { .. })
        ));
    }
}
