use anyhow::Result;

use crate::{
    app::context::AppContext,
    cli::{Cli, Commands},
};

pub mod add;
pub mod commit;
pub mod global;
pub mod list;
pub mod remove;
pub mod set_default;

/// Unified interface implemented by each subcommand handler.
pub trait Command {
    /// Execute the subcommand.
    ///
    /// # Errors
    /// Returns an error if the command fails.
    fn run(&self, ctx: &AppContext) -> Result<()>;
}

/// Central dispatcher: routes parsed CLI to subcommand handlers.
///
/// # Errors
/// Returns an error if the invoked subcommand fails.
pub fn dispatch(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_env()?;

    match &cli.command {
        Commands::Add { key, name, email } => {
            let cmd = add::AddCommand { key, name, email };
            cmd.run(&ctx)
        }
        Commands::Remove { key } => {
            let cmd = remove::RemoveCommand { key };
            cmd.run(&ctx)
        }
        Commands::List => list::ListCommand.run(&ctx),
        Commands::SetDefault { key } => {
            let cmd = set_default::SetDefaultCommand { key };
            cmd.run(&ctx)
        }
        Commands::Commit { key, raw, git_args } => {
            let cmd = commit::CommitCommand {
                key: key.as_deref(),
                raw: raw.as_deref(),
                git_args,
            };
            cmd.run(&ctx)
        }
        Commands::Global { key } => {
            let cmd = global::GlobalCommand {
                key: key.as_deref(),
            };
            cmd.run(&ctx)
        }
    }
}
