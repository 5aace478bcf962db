//! Dispatch to the external `git` binary.

use std::io::ErrorKind;
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::core::registry::Identity;
use crate::errors::DispatchError;

/// Run `git commit` as `identity`, with the identity supplied as
/// invocation-scoped `-c` overrides so git's own configuration is never
/// touched. Remaining arguments are forwarded to git unmodified.
///
/// # Errors
/// Fails only if git cannot be launched; a non-zero git exit is reported
/// through the returned status.
pub fn commit_as(identity: &Identity, git_args: &[String]) -> Result<ExitStatus, DispatchError> {
    let mut cmd = Command::new("git");
    cmd.arg("-c")
        .arg(format!("user.name={}", identity.name()))
        .arg("-c")
        .arg(format!("user.email={}", identity.email()))
        .arg("commit")
        .args(git_args);
    debug!(%identity, ?git_args, "dispatching git commit");
    run(cmd)
}

/// Write `identity` into git's global configuration (`user.name` and
/// `user.email`), persisting across future git invocations.
///
/// # Errors
/// Fails only if git cannot be launched. If the `user.name` write exits
/// non-zero, the `user.email` write is skipped and that status is returned.
pub fn set_global_identity(identity: &Identity) -> Result<ExitStatus, DispatchError> {
    debug!(%identity, "setting global git identity");

    let mut name_cmd = Command::new("git");
    name_cmd.args(["config", "--global", "user.name", identity.name()]);
    let status = run(name_cmd)?;
    if !status.success() {
        return Ok(status);
    }

    let mut email_cmd = Command::new("git");
    email_cmd.args(["config", "--global", "user.email", identity.email()]);
    run(email_cmd)
}

/// Launch git with inherited stdio and wait for it, distinguishing
/// launch failures from the tool's own non-zero exit.
fn run(mut cmd: Command) -> Result<ExitStatus, DispatchError> {
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    match cmd.status() {
        Ok(status) => Ok(status),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(DispatchError::ToolNotFound),
        Err(e) => Err(DispatchError::Launch(e)),
    }
}
