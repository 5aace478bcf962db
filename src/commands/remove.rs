use anyhow::Result;

use super::Command;
use crate::app::context::AppContext;
use crate::core::registry;

pub struct RemoveCommand<'a> {
    pub key: &'a str,
}

impl Command for RemoveCommand<'_> {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        let mut reg = registry::load(&ctx.store_path)?;
        let was_default = reg.default_key() == Some(self.key);
        let removed = reg.remove(self.key)?;
        registry::save(&ctx.store_path, &reg)?;
        println!("Removed '{}' ({})", self.key, removed);
        if was_default {
            println!("Cleared the default identity");
        }
        Ok(())
    }
}
