use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "retouch")]
#[command(about = "Inspect the local image generation quota")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Config file (defaults to <config_dir>/retouch/config.toml)
	#[arg(long, short = 'c', value_name = "PATH", global = true)]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short = 'v', global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
	/// Show generations used, remaining, and when the window resets
	Status,
	/// Exit with status 1 when no generations are left
	Check,
	/// Print the resolved configuration as TOML
	Config,
}

#[cfg(test)]
mod tests;
