/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_ACCOUNTS_BASE_URL, DEFAULT_REST_TIMEOUT};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Credentials for the Schwab Trader API
///
/// Token acquisition and refresh happen outside this crate; only a ready
/// bearer token is carried here.
pub struct Credentials {
    /// OAuth access token sent as a bearer token. Never serialized.
    #[serde(skip_serializing, default)]
    pub access_token: Option<String>,
}

impl Credentials {
    /// Returns `true` when an access token is configured
    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the accounts resource
    pub accounts_base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            accounts_base_url: DEFAULT_ACCOUNTS_BASE_URL.to_string(),
            timeout: DEFAULT_REST_TIMEOUT,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the accounts client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// A `.env` file is loaded first when present. Unset variables fall back
    /// to the crate defaults.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let access_token: Option<String> = get_env_or_none("SCHWAB_ACCESS_TOKEN");
        if access_token.is_none() {
            warn!("SCHWAB_ACCESS_TOKEN not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { access_token },
            rest_api: RestApiConfig {
                accounts_base_url: get_env_or_default(
                    "SCHWAB_ACCOUNTS_BASE_URL",
                    String::from(DEFAULT_ACCOUNTS_BASE_URL),
                ),
                timeout: get_env_or_default("SCHWAB_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
        }
    }

    /// Creates a configuration without reading the environment
    ///
    /// # Arguments
    /// * `accounts_base_url` - Base URL of the accounts resource
    /// * `access_token` - Optional bearer token
    pub fn with_base_url(accounts_base_url: impl Into<String>, access_token: Option<String>) -> Self {
        Config {
            credentials: Credentials { access_token },
            rest_api: RestApiConfig {
                accounts_base_url: accounts_base_url.into(),
                ..RestApiConfig::default()
            },
        }
    }

    /// Sets the request timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.rest_api.timeout = timeout;
        self
    }
}
