//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `roster`.
#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "Serve an in-memory student registry over HTTP")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP service until interrupted.
    Serve(ConfigArgs),
    /// Print the resolved configuration as YAML and exit.
    Config(ConfigArgs),
}

/// Flags that override file and environment configuration.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// YAML config file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Interface to bind.
    #[arg(long)]
    pub host: Option<String>,
    /// Port to bind; 0 picks an ephemeral port.
    #[arg(short, long)]
    pub port: Option<u16>,
    /// Log filter used when `RUST_LOG` is unset (e.g. `debug`, `roster=trace`).
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
    /// Do not mount `DELETE /__test__/reset`.
    #[arg(long)]
    pub no_test_routes: bool,
}
