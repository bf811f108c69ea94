use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::device_code::{DeviceCodePoll, DeviceCodeSession};
use super::error::AuthError;
use super::scopes::TokenScope;

const CLIENT_NAME: &str = "studio-cli";
const DEVICE_LOGIN_PATH: &str = "/api/v1/device-login";
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Seam between the command handlers and the Studio authorization service.
///
/// Tests substitute a fake; production uses [`StudioAuthClient`].
#[async_trait]
pub trait AuthorizationClient: Send + Sync {
    /// Begin a device login, returning the session the user must authorize.
    ///
    /// Single attempt: a malformed or unreachable response propagates without
    /// retry.
    async fn start(
        &self,
        token_name: &str,
        hostname: &str,
        scopes: &[TokenScope],
    ) -> Result<DeviceCodeSession, AuthError>;

    /// Block until the session is authorized or the device code expires.
    ///
    /// `Ok(None)` means the device code expired before the user completed
    /// authorization; a fresh login must start a new session.
    async fn await_completion(
        &self,
        session: &DeviceCodeSession,
    ) -> Result<Option<String>, AuthError>;
}

/// HTTP client for the Studio device-login endpoints.
///
/// # Example
/// ```no_run
/// use studio_cli::auth::{AuthorizationClient, StudioAuthClient, DEFAULT_SCOPES};
///
/// # async fn example() -> Result<(), studio_cli::auth::AuthError> {
/// let client = StudioAuthClient::new();
/// let session = client
///     .start("my-token", "https://studio.datachain.ai", &DEFAULT_SCOPES)
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct StudioAuthClient {
    client: reqwest::Client,
    client_name: String,
    poll_interval: Duration,
}

impl StudioAuthClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            client_name: CLIENT_NAME.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Poll the token endpoint once.
    pub async fn poll_once(
        &self,
        session: &DeviceCodeSession,
    ) -> Result<DeviceCodePoll, AuthError> {
        if Utc::now() >= session.expires_at {
            return Ok(DeviceCodePoll::Expired);
        }
        let resp = self
            .client
            .post(&session.token_uri)
            .json(&json!({ "code": session.device_code }))
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            let payload: AccessTokenResponse = resp.json().await?;
            return Ok(DeviceCodePoll::Authorized {
                access_token: payload.access_token,
            });
        }
        if status == StatusCode::BAD_REQUEST {
            let payload: PollErrorResponse = resp.json().await?;
            return match payload.detail.as_str() {
                "authorization_pending" => Ok(DeviceCodePoll::Pending),
                "authorization_expired" => Ok(DeviceCodePoll::Expired),
                other => Err(AuthError::InvalidResponse(format!(
                    "Device token poll error: {other}"
                ))),
            };
        }
        Err(AuthError::InvalidResponse(format!(
            "Device token poll failed with status {status}"
        )))
    }
}

impl Default for StudioAuthClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthorizationClient for StudioAuthClient {
    async fn start(
        &self,
        token_name: &str,
        hostname: &str,
        scopes: &[TokenScope],
    ) -> Result<DeviceCodeSession, AuthError> {
        let url = format!("{}{DEVICE_LOGIN_PATH}", hostname.trim_end_matches('/'));
        debug!(token_name, hostname, "starting device login");
        let resp = self
            .client
            .post(&url)
            .json(&json!({
                "client_name": self.client_name,
                "token_name": token_name,
                "scopes": scopes.iter().map(ToString::to_string).collect::<Vec<_>>(),
            }))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(AuthError::InvalidResponse(format!(
                "Device login request failed with status {}",
                resp.status()
            )));
        }
        let payload: DeviceLoginResponse = resp.json().await?;
        let expires_at = Utc::now() + chrono::Duration::seconds(payload.expires_in as i64);
        Ok(DeviceCodeSession {
            token_name: token_name.to_string(),
            hostname: hostname.to_string(),
            scopes: scopes.to_vec(),
            verification_uri: payload.verification_uri,
            user_code: payload.user_code,
            device_code: payload.device_code,
            token_uri: payload.token_uri,
            expires_at,
        })
    }

    async fn await_completion(
        &self,
        session: &DeviceCodeSession,
    ) -> Result<Option<String>, AuthError> {
        loop {
            match self.poll_once(session).await? {
                DeviceCodePoll::Pending => {
                    debug!(interval = ?self.poll_interval, "authorization pending");
                    tokio::time::sleep(self.poll_interval).await;
                }
                DeviceCodePoll::Authorized { access_token } => return Ok(Some(access_token)),
                DeviceCodePoll::Expired => return Ok(None),
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct DeviceLoginResponse {
    device_code: String,
    user_code: String,
    verification_uri: String,
    token_uri: String,
    expires_in: u64,
}

#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct PollErrorResponse {
    detail: String,
}
