//! `retouch` command line frontend.
//!
//! Reads the same config and quota record as an editing session, so it can
//! report how many generations are left without touching any image.

mod cli;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use cli::{Cli, Command};
use retouch_editor::SessionConfig;
use retouch_primitives::{SystemClock, TimestampMs};
use retouch_quota::{QuotaStatus, QuotaTracker};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
	let cli = Cli::parse();

	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();

	let config = load_config(cli.config.as_deref())?;

	match cli.command {
		Command::Config => {
			print!("{}", config.to_toml()?);
			Ok(ExitCode::SUCCESS)
		}
		Command::Status => {
			let status = open_quota(&config)?.status()?;
			print!("{}", render_status(&status));
			Ok(ExitCode::SUCCESS)
		}
		Command::Check => {
			let status = open_quota(&config)?.status()?;
			if status.remaining == 0 {
				eprintln!("generation limit reached, resets at {}", format_timestamp(status.resets_at_ms));
				return Ok(ExitCode::FAILURE);
			}
			println!("{} of {} generations left", status.remaining, status.limit);
			Ok(ExitCode::SUCCESS)
		}
	}
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SessionConfig> {
	let path = match path {
		Some(path) => path.to_path_buf(),
		None => match SessionConfig::default_path() {
			Some(path) => path,
			None => {
				debug!("no config directory, using defaults");
				return Ok(SessionConfig::default());
			}
		},
	};
	SessionConfig::load(&path).with_context(|| format!("loading config from {}", path.display()))
}

fn open_quota(config: &SessionConfig) -> anyhow::Result<QuotaTracker> {
	QuotaTracker::open(&config.quota, Arc::new(SystemClock)).context("opening quota record")
}

fn render_status(status: &QuotaStatus) -> String {
	format!(
		"used       {} / {}\nremaining  {}\nresets at  {}\n",
		status.used,
		status.limit,
		status.remaining,
		format_timestamp(status.resets_at_ms)
	)
}

fn format_timestamp(ms: TimestampMs) -> String {
	DateTime::<Utc>::from_timestamp_millis(ms)
		.map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
		.unwrap_or_else(|| format!("{ms} ms"))
}
