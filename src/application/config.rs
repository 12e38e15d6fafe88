/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{DEFAULT_API_HOST, DEFAULT_CUSTOMER_TYPE, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Application credentials issued by the broker
pub struct Credentials {
    /// Application key
    pub app_key: String,
    /// Application secret, never serialized
    #[serde(skip_serializing, default)]
    pub app_secret: String,
    /// Default account number (8 or 10 characters)
    pub account_number: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// API host, scheme and port included
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Credentials context of one client
///
/// Each account gets its own `Config`; nothing is shared between clients.
pub struct Config {
    /// Application credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Customer type sent in the `custtype` header
    pub customer_type: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration from the environment, `.env` file included
    ///
    /// Reads `KIS_APP_KEY`, `KIS_APP_SECRET`, `KIS_ACCOUNT_NUMBER`, `KIS_API_HOST`,
    /// `KIS_REST_TIMEOUT` and `KIS_CUSTOMER_TYPE`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let app_key = get_env_or_default("KIS_APP_KEY", String::new());
        let app_secret = get_env_or_default("KIS_APP_SECRET", String::new());
        if app_key.is_empty() {
            error!("KIS_APP_KEY not found in environment variables or .env file");
        }
        if app_secret.is_empty() {
            error!("KIS_APP_SECRET not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                app_key,
                app_secret,
                account_number: get_env_or_none("KIS_ACCOUNT_NUMBER"),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("KIS_API_HOST", String::from(DEFAULT_API_HOST)),
                timeout: get_env_or_default("KIS_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            customer_type: get_env_or_default(
                "KIS_CUSTOMER_TYPE",
                String::from(DEFAULT_CUSTOMER_TYPE),
            ),
        }
    }

    /// Builds an explicit configuration without reading the environment
    pub fn with_credentials(base_url: &str, app_key: &str, app_secret: &str) -> Self {
        Config {
            credentials: Credentials {
                app_key: app_key.to_string(),
                app_secret: app_secret.to_string(),
                account_number: None,
            },
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            customer_type: String::from(DEFAULT_CUSTOMER_TYPE),
        }
    }

    /// Sets the default account number
    #[must_use]
    pub fn with_account_number(mut self, account_number: &str) -> Self {
        self.credentials.account_number = Some(account_number.to_string());
        self
    }

    /// Sets the request timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.rest_api.timeout = timeout;
        self
    }
}
