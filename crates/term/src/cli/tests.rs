use std::path::PathBuf;

use clap::Parser;

use super::{Cli, Command};

#[test]
fn parses_subcommand_with_global_flags() {
	let cli = Cli::try_parse_from(["retouch", "status", "--config", "/tmp/retouch.toml", "-v"]).unwrap();
	assert_eq!(cli.command, Command::Status);
	assert_eq!(cli.config, Some(PathBuf::from("/tmp/retouch.toml")));
	assert!(cli.verbose);
}

#[test]
fn subcommand_is_required() {
	assert!(Cli::try_parse_from(["retouch"]).is_err());
	assert!(Cli::try_parse_from(["retouch", "reset"]).is_err());
}

#[test]
fn check_and_config_take_no_arguments() {
	assert_eq!(Cli::try_parse_from(["retouch", "check"]).unwrap().command, Command::Check);
	assert_eq!(Cli::try_parse_from(["retouch", "config"]).unwrap().command, Command::Config);
}
