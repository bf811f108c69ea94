//! Login parameter resolution and out-of-band instruction presentation.

use tracing::debug;

use crate::config::Settings;
use crate::util::names::random_name;

use super::device_code::DeviceCodeSession;
use super::error::AuthError;
use super::scopes::{parse_scopes, TokenScope, DEFAULT_SCOPES};

/// Resolved parameters for one login attempt.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub token_name: String,
    pub hostname: String,
    pub scopes: Vec<TokenScope>,
}

/// Resolve the login parameters from explicit arguments and [`Settings`].
///
/// Name falls back to a freshly generated one, hostname to the settings
/// default (env override or built-in), scopes to the full default set.
pub fn resolve_request(
    name: Option<&str>,
    hostname: Option<&str>,
    scopes_csv: Option<&str>,
    settings: &Settings,
) -> Result<LoginRequest, AuthError> {
    let token_name = match name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => random_name(),
    };
    let hostname = match hostname {
        Some(hostname) if !hostname.trim().is_empty() => hostname.to_string(),
        _ => settings.studio_url.clone(),
    };
    let scopes = match scopes_csv.map(str::trim) {
        Some(csv) if !csv.is_empty() => parse_scopes(csv)?,
        _ => DEFAULT_SCOPES.to_vec(),
    };
    debug!(token_name, hostname, "resolved login request");
    Ok(LoginRequest {
        token_name,
        hostname,
        scopes,
    })
}

/// Present the out-of-band authorization instructions for a session.
///
/// Returns whether a browser was opened. A failed launch falls back to
/// printing the manual-entry instructions; it never becomes an error.
pub fn present_instructions(
    session: &DeviceCodeSession,
    prefer_manual: bool,
    open_browser: impl FnOnce(&str) -> bool,
) -> bool {
    let mut opened = false;
    if !prefer_manual {
        println!(
            "A web browser has been opened at \n{}.\n\
             Please continue the login in the web browser.\n\
             If no web browser is available or if the web browser fails to open,\n\
             use device code flow with `studio login --use-device-code`.",
            session.verification_uri
        );
        let url = format!("{}?code={}", session.verification_uri, session.user_code);
        opened = open_browser(&url);
    }
    if !opened {
        println!(
            "Please open the following url in your browser.\n{}",
            session.verification_uri
        );
        println!(
            "And enter the user code below {} to authorize.",
            session.user_code
        );
    }
    opened
}

/// Browser opener used outside tests.
pub fn system_browser(url: &str) -> bool {
    webbrowser::open(url).is_ok()
}
