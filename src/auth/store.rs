use crate::config::{ConfigScope, ConfigStore};

use super::error::AuthError;

/// Persistence seam for the stored Studio credential.
pub trait CredentialStore: Send + Sync {
    /// Write the credential, replacing any previous one.
    fn save(&self, hostname: &str, token: &str) -> Result<(), AuthError>;
    /// Read the stored token, if any.
    fn read_token(&self) -> Result<Option<String>, AuthError>;
    /// Delete the stored token, keeping the stored URL.
    ///
    /// Fails with [`AuthError::NotLoggedIn`] when no token is stored, leaving
    /// the store untouched.
    fn clear(&self) -> Result<(), AuthError>;
}

/// Credential store over the `studio` namespace of the "global" config scope.
#[derive(Debug, Clone)]
pub struct ConfigCredentialStore {
    store: ConfigStore,
}

impl ConfigCredentialStore {
    pub fn new(store: ConfigStore) -> Self {
        Self { store }
    }
}

impl CredentialStore for ConfigCredentialStore {
    fn save(&self, hostname: &str, token: &str) -> Result<(), AuthError> {
        self.store.edit(ConfigScope::Global, |doc| {
            doc.studio.token = Some(token.to_string());
            doc.studio.url = Some(hostname.to_string());
            Ok::<_, AuthError>(())
        })
    }

    fn read_token(&self) -> Result<Option<String>, AuthError> {
        let doc = self.store.read(ConfigScope::Global)?;
        Ok(doc.studio.token)
    }

    fn clear(&self) -> Result<(), AuthError> {
        self.store.edit(ConfigScope::Global, |doc| {
            if doc.studio.token.is_none() {
                return Err(AuthError::NotLoggedIn);
            }
            doc.studio.token = None;
            Ok(())
        })
    }
}
