//! Shared test doubles.

use std::sync::Mutex;

use studio_cli::auth::{AuthError, CredentialStore};

/// Credential store backed by process memory, for handler tests that do not
/// care about on-disk layout.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    credential: Mutex<Option<(String, String)>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credential(&self) -> Option<(String, String)> {
        self.credential.lock().unwrap().clone()
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn save(&self, hostname: &str, token: &str) -> Result<(), AuthError> {
        *self.credential.lock().unwrap() = Some((hostname.to_string(), token.to_string()));
        Ok(())
    }

    fn read_token(&self) -> Result<Option<String>, AuthError> {
        Ok(self
            .credential
            .lock()
            .unwrap()
            .as_ref()
            .map(|(_, token)| token.clone()))
    }

    fn clear(&self) -> Result<(), AuthError> {
        let mut guard = self.credential.lock().unwrap();
        if guard.is_none() {
            return Err(AuthError::NotLoggedIn);
        }
        *guard = None;
        Ok(())
    }
}
