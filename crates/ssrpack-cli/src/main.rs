//! ssrpack CLI - assemble the server-side rendering bundle configuration.
//!
//! This is the main entry point. It handles command-line argument parsing,
//! logging initialization, and command dispatch.

use clap::Parser;
use ssrpack_cli::{cli, commands, logger};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    match args.command {
        cli::Command::Show(show_args) => commands::show_execute(show_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    }
}
