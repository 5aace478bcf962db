use clap::Parser;
use git_commit_as::cli::Cli;
use git_commit_as::commands;
use git_commit_as::errors;
use git_commit_as::logging::init::init_tracing;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_tracing(cli.verbose) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }

    if let Err(err) = commands::dispatch(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(errors::exit_code(&err));
    }
}
