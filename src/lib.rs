//! Studio authentication CLI.
//!
//! Links a local installation to a Studio instance through the OAuth
//! device-authorization grant: `studio login` starts a device session, opens
//! (or prints) the verification URL, waits for out-of-band approval, and
//! stores the issued token in the local config store. `studio token` prints
//! the stored token and `studio logout` revokes it.
//!
//! # Quick Start
//!
//! ```no_run
//! use studio_cli::auth::{AuthorizationClient, StudioAuthClient, DEFAULT_SCOPES};
//!
//! # async fn example() -> Result<(), studio_cli::auth::AuthError> {
//! let client = StudioAuthClient::new();
//! let session = client
//!     .start("ci-token", "https://studio.datachain.ai", &DEFAULT_SCOPES)
//!     .await?;
//! println!("visit {} and enter {}", session.verification_uri, session.user_code);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod util;
