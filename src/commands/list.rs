use anyhow::Result;

use super::Command;
use crate::app::context::AppContext;
use crate::core::registry;

pub struct ListCommand;

impl Command for ListCommand {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        let reg = registry::load(&ctx.store_path)?;
        if reg.is_empty() {
            println!("No identities registered; run `git-commit-as add <KEY> <NAME> <EMAIL>`");
            return Ok(());
        }
        for (key, identity) in reg.iter() {
            let marker = if reg.default_key() == Some(key) {
                '*'
            } else {
                ' '
            };
            println!("{marker} {key}\t{identity}");
        }
        Ok(())
    }
}
