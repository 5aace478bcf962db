//! Selection of the effective identity for one invocation.

use tracing::debug;

use super::model::{Identity, Registry};
use crate::errors::RegistryError;

/// Determine which identity applies: an explicitly requested key wins,
/// otherwise the registry's stored default. No other heuristics.
///
/// # Errors
/// Returns `UnknownKey` for a miss on the requested (or default) key, and
/// `NoDefaultSet` when nothing was requested and no default is configured.
pub fn resolve<'a>(
    registry: &'a Registry,
    requested: Option<&str>,
) -> Result<&'a Identity, RegistryError> {
    let key = match requested {
        Some(key) => key,
        None => registry.default_key().ok_or(RegistryError::NoDefaultSet)?,
    };
    let identity = registry.lookup(key)?;
    debug!(key, %identity, "resolved identity");
    Ok(identity)
}
