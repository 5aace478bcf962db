//! Error types for git-commit-as.
//!
//! Each subsystem has its own error type derived with `thiserror`; command
//! handlers propagate them through `anyhow` and `main` maps them back to
//! distinct process exit codes.

use thiserror::Error;

/// Errors from the identity registry (store, manager, resolver).
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry file exists but could not be parsed.
    #[error("registry file at '{path}' is corrupt: {detail}")]
    CorruptStore { path: String, detail: String },

    /// Reading or writing the registry file failed.
    #[error("registry I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the registry for persistence failed.
    #[error("failed to encode registry: {0}")]
    Encode(#[from] toml::ser::Error),

    /// An identity with this key is already registered.
    #[error("identity '{0}' already exists")]
    DuplicateKey(String),

    /// The identity fields do not satisfy the registry invariants.
    #[error("invalid identity: {0}")]
    InvalidIdentity(String),

    /// No identity with this key is registered.
    #[error("unknown identity '{0}'")]
    UnknownKey(String),

    /// No key was requested and no default identity is configured.
    #[error("no default identity set; pass a key or run `git-commit-as set-default <KEY>`")]
    NoDefaultSet,
}

impl RegistryError {
    /// Process exit code for this error kind.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::CorruptStore { .. } => 2,
            Self::Io(_) | Self::Encode(_) => 3,
            Self::DuplicateKey(_) => 4,
            Self::InvalidIdentity(_) => 5,
            Self::UnknownKey(_) => 6,
            Self::NoDefaultSet => 7,
        }
    }
}

/// Errors from dispatching to the external `git` binary.
///
/// These cover failure to launch only; git running and exiting non-zero is
/// not an error here, its status is propagated unchanged.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The `git` binary was not found on `$PATH`.
    #[error("git binary not found on PATH")]
    ToolNotFound,

    /// Launching `git` failed for another OS-level reason.
    #[error("failed to launch git: {0}")]
    Launch(#[source] std::io::Error),
}

impl DispatchError {
    /// Process exit code for this error kind.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ToolNotFound => 8,
            Self::Launch(_) => 9,
        }
    }
}

/// Map any error chain to a process exit code.
///
/// Walks the chain so codes survive `anyhow::Context` wrapping; anything
/// outside the taxonomy reports the generic code 1.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<RegistryError>() {
            return e.exit_code();
        }
        if let Some(e) = cause.downcast_ref::<DispatchError>() {
            return e.exit_code();
        }
    }
    1
}
