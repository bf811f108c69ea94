use chrono::{DateTime, Utc};

use super::scopes::TokenScope;

/// Device-code session details for one login attempt.
///
/// Created by [`AuthorizationClient::start`](super::client::AuthorizationClient::start)
/// and immutable afterwards. `token_uri` is the polling endpoint the service
/// handed back for this session; `expires_at` is derived from the wire
/// `expires_in` and bounds the wait client-side.
#[derive(Debug, Clone)]
pub struct DeviceCodeSession {
    pub token_name: String,
    pub hostname: String,
    pub scopes: Vec<TokenScope>,
    pub verification_uri: String,
    pub user_code: String,
    pub device_code: String,
    pub token_uri: String,
    pub expires_at: DateTime<Utc>,
}

/// Outcome of a single poll of the token endpoint.
#[derive(Debug, Clone)]
pub enum DeviceCodePoll {
    Pending,
    Authorized { access_token: String },
    Expired,
}
