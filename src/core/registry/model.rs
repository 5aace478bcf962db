//! In-memory registry of known identities.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::RegistryError;

/// One known user: a display name and email address attributable to commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    name: String,
    email: String,
}

impl Identity {
    /// Build an identity, rejecting empty or newline-containing fields.
    ///
    /// # Errors
    /// Returns `InvalidIdentity` if either field is empty or embeds a newline.
    pub fn new(name: &str, email: &str) -> Result<Self, RegistryError> {
        validate_field("name", name)?;
        validate_field("email", email)?;
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    /// Parse a `NAME;EMAIL` pair, as accepted by `commit --raw`.
    ///
    /// # Errors
    /// Returns `InvalidIdentity` unless the input has exactly two
    /// semicolon-separated fields that pass the usual validation.
    pub fn from_semicolon_separated(text: &str) -> Result<Self, RegistryError> {
        let tokens: Vec<&str> = text.split(';').collect();
        if tokens.len() != 2 {
            return Err(RegistryError::InvalidIdentity(format!(
                "expected two fields, one for user.name and one for user.email; found {}: {:?}",
                tokens.len(),
                tokens
            )));
        }
        Self::new(tokens[0], tokens[1])
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

fn validate_field(field: &str, value: &str) -> Result<(), RegistryError> {
    if value.is_empty() {
        return Err(RegistryError::InvalidIdentity(format!(
            "{field} must not be empty"
        )));
    }
    if value.contains('\n') || value.contains('\r') {
        return Err(RegistryError::InvalidIdentity(format!(
            "{field} must not contain a newline"
        )));
    }
    Ok(())
}

/// The full set of known identities plus an optional default selection.
///
/// `BTreeMap` keeps listing order stable across invocations. Field order
/// matters for the TOML encoding: the top-level `default` value must be
/// emitted before the `[users.*]` tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default: Option<String>,
    #[serde(default)]
    users: BTreeMap<String, Identity>,
}

impl Registry {
    /// Register a new identity under `key`.
    ///
    /// # Errors
    /// Returns `InvalidIdentity` for a malformed key or `DuplicateKey` if the
    /// key is already taken; the registry is unchanged on error.
    pub fn add(&mut self, key: &str, identity: Identity) -> Result<(), RegistryError> {
        if key.is_empty() || key.chars().any(char::is_whitespace) {
            return Err(RegistryError::InvalidIdentity(
                "key must be non-empty and contain no whitespace".to_string(),
            ));
        }
        if self.users.contains_key(key) {
            return Err(RegistryError::DuplicateKey(key.to_string()));
        }
        self.users.insert(key.to_string(), identity);
        Ok(())
    }

    /// Delete the identity under `key`, clearing the default if it named it.
    ///
    /// # Errors
    /// Returns `UnknownKey` if absent.
    pub fn remove(&mut self, key: &str) -> Result<Identity, RegistryError> {
        let removed = self
            .users
            .remove(key)
            .ok_or_else(|| RegistryError::UnknownKey(key.to_string()))?;
        if self.default.as_deref() == Some(key) {
            self.default = None;
        }
        Ok(removed)
    }

    /// Look up the identity under `key`.
    ///
    /// # Errors
    /// Returns `UnknownKey` if absent.
    pub fn lookup(&self, key: &str) -> Result<&Identity, RegistryError> {
        self.users
            .get(key)
            .ok_or_else(|| RegistryError::UnknownKey(key.to_string()))
    }

    /// Mark `key` as the default selection.
    ///
    /// # Errors
    /// Returns `UnknownKey` if no identity is registered under it.
    pub fn set_default(&mut self, key: &str) -> Result<(), RegistryError> {
        if !self.users.contains_key(key) {
            return Err(RegistryError::UnknownKey(key.to_string()));
        }
        self.default = Some(key.to_string());
        Ok(())
    }

    #[must_use]
    pub fn default_key(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Identities in stable (key-sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Identity)> {
        self.users.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Identity {
        Identity::new("Alice A", "alice@x.test").unwrap()
    }

    #[test]
    fn add_then_lookup() {
        let mut reg = Registry::default();
        reg.add("alice", alice()).unwrap();
        assert_eq!(reg.lookup("alice").unwrap(), &alice());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn duplicate_key_leaves_first_entry_unchanged() {
        let mut reg = Registry::default();
        reg.add("alice", alice()).unwrap();
        let second = Identity::new("Imposter", "evil@x.test").unwrap();
        let err = reg.add("alice", second).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateKey(k) if k == "alice"));
        assert_eq!(reg.lookup("alice").unwrap().name(), "Alice A");
    }

    #[test]
    fn remove_unknown_key() {
        let mut reg = Registry::default();
        let err = reg.remove("bob").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownKey(k) if k == "bob"));
    }

    #[test]
    fn remove_clears_default() {
        let mut reg = Registry::default();
        reg.add("alice", alice()).unwrap();
        reg.set_default("alice").unwrap();
        assert_eq!(reg.default_key(), Some("alice"));
        reg.remove("alice").unwrap();
        assert_eq!(reg.default_key(), None);
    }

    #[test]
    fn remove_other_key_keeps_default() {
        let mut reg = Registry::default();
        reg.add("alice", alice()).unwrap();
        reg.add("bob", Identity::new("Bob B", "bob@x.test").unwrap())
            .unwrap();
        reg.set_default("alice").unwrap();
        reg.remove("bob").unwrap();
        assert_eq!(reg.default_key(), Some("alice"));
    }

    #[test]
    fn set_default_requires_known_key() {
        let mut reg = Registry::default();
        let err = reg.set_default("ghost").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownKey(_)));
        assert_eq!(reg.default_key(), None);
    }

    #[test]
    fn listing_order_is_key_sorted() {
        let mut reg = Registry::default();
        reg.add("zed", Identity::new("Zed Z", "zed@x.test").unwrap())
            .unwrap();
        reg.add("alice", alice()).unwrap();
        let keys: Vec<&str> = reg.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["alice", "zed"]);
    }

    #[test]
    fn rejects_empty_and_multiline_fields() {
        assert!(matches!(
            Identity::new("", "a@x.test"),
            Err(RegistryError::InvalidIdentity(_))
        ));
        assert!(matches!(
            Identity::new("Alice", ""),
            Err(RegistryError::InvalidIdentity(_))
        ));
        assert!(matches!(
            Identity::new("Alice\nMallory", "a@x.test"),
            Err(RegistryError::InvalidIdentity(_))
        ));
    }

    #[test]
    fn rejects_whitespace_key() {
        let mut reg = Registry::default();
        let err = reg.add("bad key", alice()).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidIdentity(_)));
    }

    #[test]
    fn parses_semicolon_separated_pair() {
        let id = Identity::from_semicolon_separated("Alice A;alice@x.test").unwrap();
        assert_eq!(id.name(), "Alice A");
        assert_eq!(id.email(), "alice@x.test");
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(matches!(
            Identity::from_semicolon_separated("no-semicolon"),
            Err(RegistryError::InvalidIdentity(_))
        ));
        assert!(matches!(
            Identity::from_semicolon_separated("a;b;c"),
            Err(RegistryError::InvalidIdentity(_))
        ));
    }
}
