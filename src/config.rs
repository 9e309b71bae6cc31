use crate::constants::REST_API_BASE_URL;
use crate::error::ConfigError;
use crate::utils::config::{get_env_or_default, require_env};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the LuxMed Patient Portal
pub struct Credentials {
    /// Username of the patient account
    pub username: String,
    /// Password of the patient account
    pub password: String,
    /// Language code sent in the `accept-language` header, e.g. "pl" or "en"
    pub language: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the LuxMed mobile REST API
    pub base_url: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the LuxMed API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Loads the configuration from environment variables.
    ///
    /// `LUXMED_USERNAME`, `LUXMED_PASSWORD` and `LUXMED_LANGUAGE` are
    /// required; a missing one fails with [`ConfigError::MissingKey`]
    /// before any request is made. `LUXMED_BASE_URL` optionally
    /// overrides the portal URL. A `.env` file is honored when present.
    ///
    /// # Returns
    ///
    /// The loaded configuration, or the first missing key
    pub fn from_env() -> Result<Self, ConfigError> {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = require_env("LUXMED_USERNAME")?;
        let password = require_env("LUXMED_PASSWORD")?;
        let language = require_env("LUXMED_LANGUAGE")?;

        Ok(Config {
            credentials: Credentials {
                username,
                password,
                language,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("LUXMED_BASE_URL", String::from(REST_API_BASE_URL)),
            },
        })
    }
}
