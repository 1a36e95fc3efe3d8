use anyhow::{Context, Result};
use std::time::Duration;

use crate::i18n::{LanguageProvider, SupportedLanguages};

#[derive(Debug, Clone)]
pub struct Config {
    // Notification service
    pub service_url: String,
    pub request_timeout: Duration,

    // Messages
    pub supported_languages: SupportedLanguages,
}

impl Config {
    /// Load configuration from the environment (and `.env`, if present).
    pub fn from_env() -> Result<Self> {
        // Load .env file (ignored when not present)
        let _ = dotenvy::dotenv();

        Ok(Self {
            service_url: std::env::var("MECE_SERVICE_URL")
                .context("MECE_SERVICE_URL not set")?,
            request_timeout: Duration::from_secs(
                std::env::var("MECE_REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            ),

            supported_languages: match std::env::var("MECE_SUPPORTED_LANGUAGES") {
                Ok(list) => SupportedLanguages::parse_list(&list)
                    .context("MECE_SUPPORTED_LANGUAGES is invalid")?,
                Err(_) => SupportedLanguages::default(),
            },
        })
    }
}

impl LanguageProvider for Config {
    fn supported_languages(&self) -> SupportedLanguages {
        self.supported_languages.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("MECE_SERVICE_URL");
        std::env::remove_var("MECE_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("MECE_SUPPORTED_LANGUAGES");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        std::env::set_var("MECE_SERVICE_URL", "https://mece.example.com/api/messages");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.service_url, "https://mece.example.com/api/messages");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.supported_languages.codes(), vec!["fi", "en", "sv"]);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("MECE_SERVICE_URL", "https://mece.example.com");
        std::env::set_var("MECE_REQUEST_TIMEOUT_SECS", "600");
        std::env::set_var("MECE_SUPPORTED_LANGUAGES", "en, fi");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.request_timeout, Duration::from_secs(600));
        assert_eq!(config.supported_languages().codes(), vec!["en", "fi"]);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout_uses_default() {
        clear_env();
        std::env::set_var("MECE_SERVICE_URL", "https://mece.example.com");
        std::env::set_var("MECE_REQUEST_TIMEOUT_SECS", "soon");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.request_timeout, Duration::from_secs(30));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_url() {
        clear_env();
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("MECE_SERVICE_URL"));
    }

    #[test]
    #[serial]
    fn test_from_env_empty_language_list() {
        clear_env();
        std::env::set_var("MECE_SERVICE_URL", "https://mece.example.com");
        std::env::set_var("MECE_SUPPORTED_LANGUAGES", " , ");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("MECE_SUPPORTED_LANGUAGES"));

        clear_env();
    }
}
