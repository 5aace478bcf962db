use anyhow::Result;

use super::Command;
use crate::app::context::AppContext;
use crate::core::registry;

pub struct SetDefaultCommand<'a> {
    pub key: &'a str,
}

impl Command for SetDefaultCommand<'_> {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        let mut reg = registry::load(&ctx.store_path)?;
        reg.set_default(self.key)?;
        registry::save(&ctx.store_path, &reg)?;
        println!("Default identity is now '{}'", self.key);
        Ok(())
    }
}
