//! Command handlers for login, logout, and token.
//!
//! Handlers take the authorization client and credential store as trait
//! objects so tests can substitute fakes, and return the process exit code
//! (0 success, 1 expected failure). Every failure surfaces as a single
//! user-facing message here at the command boundary.

use crate::auth::client::AuthorizationClient;
use crate::auth::error::AuthError;
use crate::auth::login::{present_instructions, resolve_request, system_browser};
use crate::auth::store::CredentialStore;
use crate::config::Settings;

use super::LoginArgs;

/// Run the full login flow, opening the platform browser when possible.
pub async fn login(
    client: &dyn AuthorizationClient,
    store: &dyn CredentialStore,
    settings: &Settings,
    args: &LoginArgs,
) -> i32 {
    login_with_opener(client, store, settings, args, system_browser).await
}

/// Login flow with an injectable browser opener.
pub async fn login_with_opener(
    client: &dyn AuthorizationClient,
    store: &dyn CredentialStore,
    settings: &Settings,
    args: &LoginArgs,
    open_browser: impl FnOnce(&str) -> bool,
) -> i32 {
    let request = match resolve_request(
        args.name.as_deref(),
        args.hostname.as_deref(),
        args.scopes.as_deref(),
        settings,
    ) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };

    let session = match client
        .start(&request.token_name, &request.hostname, &request.scopes)
        .await
    {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };

    present_instructions(&session, args.use_device_code, open_browser);

    let access_token = match client.await_completion(&session).await {
        Ok(Some(token)) => token,
        Ok(None) => {
            println!("{}", AuthError::Expired);
            return 1;
        }
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };

    if let Err(err) = store.save(&session.hostname, &access_token) {
        eprintln!("{err}");
        return 1;
    }

    println!(
        "Authentication successful. The token will be available as {} in Studio profile.",
        session.token_name
    );
    0
}

/// Handle `studio logout`.
pub fn logout(store: &dyn CredentialStore) -> i32 {
    match store.clear() {
        Ok(()) => {
            println!("Logged out from Studio");
            0
        }
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

/// Handle `studio token`.
pub fn token(store: &dyn CredentialStore) -> i32 {
    match store.read_token() {
        Ok(Some(token)) => {
            println!("{token}");
            0
        }
        Ok(None) => {
            eprintln!("{}", AuthError::NotLoggedIn);
            1
        }
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}
