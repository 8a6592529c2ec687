//! # Configuration
//!
//! Typed configuration for the feed core. Hosts construct [`CoreConfig`]
//! directly or deserialize it from their own config file, then hand it to
//! the service bootstrap. A provider section left out means that service is
//! simply not registered; syncing it reports an unregistered-source error
//! instead of failing bootstrap.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// SoundCloud connector settings
#[derive(Debug, Clone, Deserialize)]
pub struct SoundCloudConfig {
    /// Account whose track feed is synchronized
    pub user: String,
    /// API client id, sent as a query parameter
    pub client_id: String,
}

/// YouTube connector settings
#[derive(Debug, Clone, Deserialize)]
pub struct YouTubeConfig {
    /// Base URL of the uploads relay this deployment consumes
    pub base_url: String,
    /// Channel whose uploads feed is synchronized
    pub channel: String,
    /// Relay API key, sent as a query parameter
    pub api_key: String,
}

/// Top-level configuration for the feed core
#[derive(Debug, Clone, Deserialize)]
pub struct CoreConfig {
    /// Path to the SQLite database file
    pub database_path: PathBuf,

    /// SoundCloud source settings
    #[serde(default)]
    pub soundcloud: Option<SoundCloudConfig>,

    /// YouTube source settings
    #[serde(default)]
    pub youtube: Option<YouTubeConfig>,
}

impl CoreConfig {
    /// Create a configuration with no provider sections
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            soundcloud: None,
            youtube: None,
        }
    }

    pub fn with_soundcloud(mut self, soundcloud: SoundCloudConfig) -> Self {
        self.soundcloud = Some(soundcloud);
        self
    }

    pub fn with_youtube(mut self, youtube: YouTubeConfig) -> Self {
        self.youtube = Some(youtube);
        self
    }

    /// Validate that every configured section is usable.
    ///
    /// # Errors
    ///
    /// Returns a [`Error::Config`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.database_path.as_os_str().is_empty() {
            return Err(Error::Config("database_path must not be empty".to_string()));
        }

        if let Some(soundcloud) = &self.soundcloud {
            if soundcloud.user.is_empty() {
                return Err(Error::Config("soundcloud.user must not be empty".to_string()));
            }
            if soundcloud.client_id.is_empty() {
                return Err(Error::Config(
                    "soundcloud.client_id must not be empty".to_string(),
                ));
            }
        }

        if let Some(youtube) = &self.youtube {
            if youtube.base_url.is_empty() {
                return Err(Error::Config("youtube.base_url must not be empty".to_string()));
            }
            if youtube.channel.is_empty() {
                return Err(Error::Config("youtube.channel must not be empty".to_string()));
            }
            if youtube.api_key.is_empty() {
                return Err(Error::Config("youtube.api_key must not be empty".to_string()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_validates() {
        let config = CoreConfig::new("feed.db");
        assert!(config.validate().is_ok());
        assert!(config.soundcloud.is_none());
        assert!(config.youtube.is_none());
    }

    #[test]
    fn test_empty_database_path_rejected() {
        let config = CoreConfig::new("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_client_id_rejected() {
        let config = CoreConfig::new("feed.db").with_soundcloud(SoundCloudConfig {
            user: "niewiederschlafen".to_string(),
            client_id: String::new(),
        });

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("client_id"));
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "database_path": "feed.db",
            "soundcloud": {
                "user": "niewiederschlafen",
                "client_id": "abc123"
            }
        }"#;

        let config: CoreConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.soundcloud.unwrap().user, "niewiederschlafen");
        assert!(config.youtube.is_none());
    }
}
