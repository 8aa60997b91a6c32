//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ssrpack",
    version,
    about = "Assemble the server-side rendering bundle configuration"
)]
pub struct Cli {
    /// Enable debug-level logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Only show errors
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available ssrpack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the configuration and print it as JSON
    ///
    /// Resolves the request, looks the environment up in the registry and
    /// writes the full configuration record to stdout for the bundler.
    Show(RequestArgs),

    /// Validate a request without printing the configuration
    ///
    /// Exits non-zero when an invariant is violated or the environment is
    /// unknown, so CI can gate on it.
    Check(RequestArgs),
}

/// The partial build request plus registry selection
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Target environment (defaults to "dev")
    #[arg(long, value_name = "ENV")]
    pub env: Option<String>,

    /// Produce pre-built assets (defaults to true outside "dev")
    ///
    /// Takes an explicit value so "unset" and "false" stay distinct:
    ///   ssrpack show --build false
    #[arg(long, value_name = "BOOL")]
    pub build: Option<bool>,

    /// Size-optimize the output (defaults to true outside "dev")
    #[arg(long, value_name = "BOOL")]
    pub minify: Option<bool>,

    /// TOML file with the environment registry
    ///
    /// Falls back to the built-in dev/staging/production registry when
    /// omitted.
    #[arg(long, value_name = "FILE")]
    pub registry: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}
