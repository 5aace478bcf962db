use std::path::PathBuf;

use anyhow::Result;

use crate::core::registry;

/// Per-invocation context. Nothing here outlives one command; the registry
/// itself is reloaded from disk by each command that needs it.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub store_path: PathBuf,
}

impl AppContext {
    pub const fn new(store_path: PathBuf) -> Self {
        Self { store_path }
    }

    /// Convenience constructor resolving the store path from the environment.
    ///
    /// # Errors
    /// Returns an error if the store location cannot be determined.
    pub fn from_env() -> Result<Self> {
        let store_path = registry::default_store_path()?;
        Ok(Self::new(store_path))
    }
}
