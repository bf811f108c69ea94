//! Process settings and the scoped on-disk config store.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Built-in Studio instance used when neither `--hostname` nor the
/// environment supplies one.
pub const DEFAULT_STUDIO_URL: &str = "https://studio.datachain.ai";

/// Environment variable overriding the default Studio hostname.
pub const STUDIO_URL_ENV: &str = "STUDIO_URL";

/// Errors from the scoped config store.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Settings captured once at process start; resolution happens here rather
/// than through ambient env lookups deeper in the flow.
#[derive(Debug, Clone)]
pub struct Settings {
    pub studio_url: String,
    pub config_dir: PathBuf,
}

impl Settings {
    /// Read settings from the environment (loading `.env` if present).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let studio_url = std::env::var(STUDIO_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STUDIO_URL.to_string());
        Self {
            studio_url,
            config_dir: default_config_dir(),
        }
    }
}

/// Named persistence scopes of the config store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    Global,
}

impl ConfigScope {
    fn file_name(self) -> &'static str {
        match self {
            ConfigScope::Global => "config.toml",
        }
    }
}

/// On-disk config document. Only the `studio` table is interpreted here;
/// unrecognized keys survive edits untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default, skip_serializing_if = "StudioSection::is_empty")]
    pub studio: StudioSection,
    #[serde(flatten)]
    pub rest: toml::Table,
}

/// The `studio` namespace: absence of `token` is the canonical
/// "not logged in" state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudioSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl StudioSection {
    fn is_empty(&self) -> bool {
        self.token.is_none() && self.url.is_none()
    }
}

/// Scoped TOML store with transactional edits.
///
/// An edit holds an exclusive advisory lock for its whole duration, so
/// concurrent `login`/`logout`/`token` processes serialize instead of
/// interleaving a partial write with a read. The commit is a temp-file
/// rename: the store holds either the previous document or the new one,
/// never a half-written file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    base_dir: PathBuf,
}

impl ConfigStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn scope_path(&self, scope: ConfigScope) -> PathBuf {
        self.base_dir.join(scope.file_name())
    }

    /// Read a scope without mutating it. A missing file is an empty document.
    pub fn read(&self, scope: ConfigScope) -> Result<ConfigDocument, ConfigError> {
        let path = self.scope_path(scope);
        if !path.exists() {
            return Ok(ConfigDocument::default());
        }
        let _lock = self.lock(false)?;
        load_document(&path)
    }

    /// Transactionally edit a scope.
    ///
    /// The closure sees the current document; on `Ok` its changes are
    /// committed atomically, on `Err` nothing is written. The lock is
    /// released on every exit path.
    pub fn edit<T, E>(
        &self,
        scope: ConfigScope,
        apply: impl FnOnce(&mut ConfigDocument) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<ConfigError>,
    {
        let _lock = self.lock(true)?;
        let path = self.scope_path(scope);
        let mut document = load_document(&path)?;
        let out = apply(&mut document)?;
        self.commit(scope, &document)?;
        Ok(out)
    }

    fn commit(&self, scope: ConfigScope, document: &ConfigDocument) -> Result<(), ConfigError> {
        let path = self.scope_path(scope);
        let tmp = self.base_dir.join(format!("{}.tmp", scope.file_name()));
        let serialized = toml::to_string(document)?;
        fs::write(&tmp, serialized)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))?;
        }
        fs::rename(&tmp, &path)?;
        debug!(path = %path.display(), "committed config edit");
        Ok(())
    }

    fn lock(&self, exclusive: bool) -> Result<LockGuard, ConfigError> {
        fs::create_dir_all(&self.base_dir)?;
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(self.base_dir.join(".lock"))?;
        if exclusive {
            file.lock_exclusive()?;
        } else {
            file.lock_shared()?;
        }
        Ok(LockGuard { file })
    }
}

/// Advisory lock held for the duration of a read or edit.
struct LockGuard {
    file: File,
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

fn load_document(path: &Path) -> Result<ConfigDocument, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigDocument::default())
        }
        Err(err) => return Err(ConfigError::Io(err)),
    };
    Ok(toml::from_str(&raw)?)
}

fn default_config_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".studio"))
        .unwrap_or_else(|| PathBuf::from(".studio"))
}
