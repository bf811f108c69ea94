use thiserror::Error;

use crate::config::ConfigError;

/// Normalized authentication errors for the Studio login flow.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Not logged in to Studio.")]
    NotLoggedIn,
    #[error("failed to authenticate: This 'device_code' has expired.(expired_token)")]
    Expired,
    #[error("Invalid scope: {0}")]
    InvalidScope(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }
}

impl From<std::io::Error> for AuthError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}
