// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based service configuration

use crate::constants::env_config;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// SQLite connection string for the plan store
    pub database_url: String,
    /// Explicit engine config file, if any
    pub engine_config_path: Option<String>,
    /// Signed-in user, if any
    pub user_id: Option<String>,
    pub log_level: String,
    /// Buffer size of the plan event channel
    pub event_channel_capacity: usize,
}

impl ServiceConfig {
    /// Load configuration from environment variables, reading `.env` first when present
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenv::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        let config = Self {
            database_url: env_config::database_url(),
            engine_config_path: env_config::engine_config_path(),
            user_id: env_config::user_id(),
            log_level: env_config::log_level(),
            event_channel_capacity: env_config::event_channel_capacity(),
        };

        config.validate()?;
        info!("Service configuration loaded");
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.database_url.is_empty() {
            return Err(anyhow::anyhow!("DATABASE_URL cannot be empty"));
        }

        if !self.database_url.starts_with("sqlite:") {
            return Err(anyhow::anyhow!(
                "Unsupported database URL '{}': only sqlite is available",
                self.database_url
            ));
        }

        if self.event_channel_capacity == 0 {
            return Err(anyhow::anyhow!("EVENT_CHANNEL_CAPACITY must be positive"));
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging
    pub fn summary(&self) -> String {
        format!(
            "Stride Planner Configuration:\n\
             - Database: {}\n\
             - Engine config: {}\n\
             - User: {}\n\
             - Log Level: {}",
            self.database_url,
            self.engine_config_path.as_deref().unwrap_or("default lookup"),
            if self.user_id.is_some() { "signed in" } else { "anonymous" },
            self.log_level,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ServiceConfig {
        ServiceConfig {
            database_url: "sqlite::memory:".to_string(),
            engine_config_path: None,
            user_id: Some("runner-1".to_string()),
            log_level: "info".to_string(),
            event_channel_capacity: 16,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = sample();
        assert!(config.validate().is_ok());

        config.database_url = "postgres://localhost/plans".to_string();
        assert!(config.validate().is_err());

        config = sample();
        config.event_channel_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_summary_hides_user_id() {
        let summary = sample().summary();
        assert!(summary.contains("signed in"));
        assert!(!summary.contains("runner-1"));
    }
}
