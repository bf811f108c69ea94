//! Device-code login flow and credential storage.

pub mod client;
pub mod device_code;
pub mod error;
pub mod login;
pub mod scopes;
pub mod store;

pub use client::{AuthorizationClient, StudioAuthClient};
pub use device_code::{DeviceCodePoll, DeviceCodeSession};
pub use error::AuthError;
pub use scopes::{TokenScope, DEFAULT_SCOPES};
pub use store::{ConfigCredentialStore, CredentialStore};
