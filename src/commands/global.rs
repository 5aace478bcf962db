use anyhow::Result;

use super::Command;
use crate::app::context::AppContext;
use crate::core::git;
use crate::core::registry;

pub struct GlobalCommand<'a> {
    pub key: Option<&'a str>,
}

impl Command for GlobalCommand<'_> {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        let reg = registry::load(&ctx.store_path)?;
        let identity = registry::resolve(&reg, self.key)?;

        let status = git::set_global_identity(identity)?;
        if !status.success() {
            std::process::exit(status.code().unwrap_or(1));
        }
        println!("Global git identity is now {identity}");
        Ok(())
    }
}
