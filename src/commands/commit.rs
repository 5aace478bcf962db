use anyhow::Result;

use super::Command;
use crate::app::context::AppContext;
use crate::core::git;
use crate::core::registry::{self, Identity};

pub struct CommitCommand<'a> {
    pub key: Option<&'a str>,
    pub raw: Option<&'a str>,
    pub git_args: &'a [String],
}

impl Command for CommitCommand<'_> {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        // Fail early with a clear message rather than letting git commit
        // complain from an unexpected directory.
        git::repo_root()?;

        let identity = if let Some(raw) = self.raw {
            Identity::from_semicolon_separated(raw)?
        } else {
            let reg = registry::load(&ctx.store_path)?;
            registry::resolve(&reg, self.key)?.clone()
        };

        let status = git::commit_as(&identity, self.git_args)?;
        if !status.success() {
            // Relay git's own exit code unchanged.
            std::process::exit(status.code().unwrap_or(1));
        }
        Ok(())
    }
}
