use anyhow::Result;

use super::Command;
use crate::app::context::AppContext;
use crate::core::registry::{self, Identity};

pub struct AddCommand<'a> {
    pub key: &'a str,
    pub name: &'a str,
    pub email: &'a str,
}

impl Command for AddCommand<'_> {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        let identity = Identity::new(self.name, self.email)?;
        let mut reg = registry::load(&ctx.store_path)?;
        reg.add(self.key, identity.clone())?;
        registry::save(&ctx.store_path, &reg)?;
        println!("Added '{}' as {}", self.key, identity);
        Ok(())
    }
}
