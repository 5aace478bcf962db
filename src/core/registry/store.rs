//! TOML-backed durable store for the identity registry.
//!
//! On-disk format:
//!
//! ```toml
//! default = "kc"
//!
//! [users.kc]
//! name = "Krerkkiat Chusap"
//! email = "kc@example.com"
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::model::Registry;
use crate::errors::RegistryError;

/// Environment variable overriding the store location.
pub const STORE_ENV: &str = "GIT_COMMIT_AS_STORE";

/// Resolve the registry file path: `$GIT_COMMIT_AS_STORE` if set, otherwise
/// `<config dir>/git-commit-as/identities.toml`.
///
/// # Errors
/// Returns an I/O error if the platform config directory cannot be determined.
pub fn default_store_path() -> Result<PathBuf, RegistryError> {
    if let Ok(path) = std::env::var(STORE_ENV)
        && !path.is_empty()
    {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or_else(|| {
        RegistryError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "could not determine the user config directory",
        ))
    })?;
    Ok(base.join("git-commit-as").join("identities.toml"))
}

/// Load the registry from `path`.
///
/// A missing file is not an error: first use starts from an empty registry.
///
/// # Errors
/// Returns `CorruptStore` if the file exists but cannot be parsed, or `Io`
/// if it cannot be read. The file is never modified on the load path.
pub fn load(path: &Path) -> Result<Registry, RegistryError> {
    if !path.exists() {
        debug!(path = %path.display(), "no registry file; starting empty");
        return Ok(Registry::default());
    }

    let contents = fs::read_to_string(path)?;
    let registry: Registry =
        toml::from_str(&contents).map_err(|e| RegistryError::CorruptStore {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;

    debug!(path = %path.display(), count = registry.len(), "loaded registry");
    Ok(registry)
}

/// Persist the registry to `path` atomically.
///
/// Writes to a tempfile in the destination directory and renames it into
/// place, so a crash mid-write never leaves a partial store behind.
///
/// # Errors
/// Returns `Io` on write/rename failure or `Encode` if serialization fails.
pub fn save(path: &Path, registry: &Registry) -> Result<(), RegistryError> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let encoded = toml::to_string_pretty(registry)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(encoded.as_bytes())?;
    tmp.persist(path).map_err(|e| RegistryError::Io(e.error))?;

    debug!(path = %path.display(), count = registry.len(), "saved registry");
    Ok(())
}
