use clap::{ArgAction, Parser, Subcommand};

/// git-commit-as command-line interface
#[derive(Parser, Debug, Clone)]
#[command(name = "git-commit-as", version, about = "Commit as one of several known identities on a shared account", long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv). `RUST_LOG` overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Register an identity under a short key
    Add {
        /// Short unique key, e.g. a login or initials
        #[arg(value_name = "KEY")]
        key: String,

        /// Display name passed to git as user.name
        #[arg(value_name = "NAME")]
        name: String,

        /// Email address passed to git as user.email
        #[arg(value_name = "EMAIL")]
        email: String,
    },

    /// Delete a registered identity (clears the default if it named it)
    Remove {
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// List registered identities; the default is marked with '*'
    List,

    /// Set the default identity used when no key is given
    SetDefault {
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Run `git commit` as a registered (or raw) identity
    ///
    /// The identity is applied with per-invocation `-c user.name=…`
    /// overrides; git's own configuration is left untouched.
    Commit {
        /// Key of the identity to commit as (defaults to the registry default)
        #[arg(value_name = "KEY", conflicts_with = "raw")]
        key: Option<String>,

        /// Ad-hoc identity as a semicolon-separated pair, bypassing the registry
        #[arg(short, long, value_name = "NAME;EMAIL")]
        raw: Option<String>,

        /// Arguments forwarded to `git commit` unmodified, e.g. `-- -m "msg"`
        #[arg(last = true, value_name = "GIT_ARGS")]
        git_args: Vec<String>,
    },

    /// Write a registered identity into git's global configuration
    Global {
        /// Key of the identity to install (defaults to the registry default)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
}
