/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::DebugPretty;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Grant type of the access token request
pub const CLIENT_CREDENTIALS: &str = "client_credentials";

/// Body of the access token request
#[derive(DebugPretty, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenRequest {
    /// Always `client_credentials`
    pub grant_type: String,
    /// Application key
    pub appkey: String,
    /// Application secret
    pub appsecret: String,
}

impl TokenRequest {
    /// Token request for the given app credentials
    pub fn new(app_key: &str, app_secret: &str) -> Self {
        Self {
            grant_type: CLIENT_CREDENTIALS.to_string(),
            appkey: app_key.trim().to_string(),
            appsecret: app_secret.trim().to_string(),
        }
    }
}

/// Access token returned by the broker
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AccessToken {
    /// Bearer token
    pub access_token: String,
    /// Token type (typically "Bearer")
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
    /// Expiry time as reported by the broker (`YYYY-MM-DD HH:MM:SS`, local time)
    #[serde(default, rename = "access_token_token_expired")]
    pub expires_at: Option<String>,
    /// Timestamp when this token was received
    #[serde(skip, default = "chrono::Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl AccessToken {
    /// Checks if the token is expired or will expire within `margin_seconds`
    #[must_use]
    pub fn is_expired(&self, margin_seconds: i64) -> bool {
        let expiry_time = self.created_at + chrono::Duration::seconds(self.expires_in);
        expiry_time - chrono::Duration::seconds(margin_seconds) <= Utc::now()
    }
}

/// Response of the hashkey endpoint
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct HashKeyResponse {
    /// Body as understood by the broker
    #[serde(rename = "BODY", default)]
    pub body: Map<String, Value>,
    /// Signature to send in the `hashkey` header
    #[serde(rename = "HASH")]
    pub hash: String,
}
