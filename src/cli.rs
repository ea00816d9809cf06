use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "Swiss-system tournament bookkeeping", long_about = None)]
pub struct Cli {
	/// Tournament database
	#[arg(
		short,
		long,
		value_name = "FILE",
		env = "TOURNAMENT_DB",
		default_value = "tournament.db"
	)]
	pub database: PathBuf,

	#[arg(short, long, value_name = "FILE")]
	pub output: Option<PathBuf>,

	/// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
	#[arg(long, default_value = "info")]
	pub log_level: String,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Create the tables and views
	Init,
	Register {
		name: String,
	},
	Report {
		winner: i64,
		loser: i64,
	},
	Count,
	Standings {
		#[arg(long)]
		csv: bool,
	},
	Pairings {
		#[arg(long)]
		csv: bool,
	},
	Matches {
		#[arg(long)]
		csv: bool,
	},
	/// Report every match in a `winner,loser` CSV file
	Load {
		#[arg(value_name = "FILE")]
		matches: PathBuf,
	},
	ResetMatches,
	/// Delete every player and every match
	ResetPlayers,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_report_takes_winner_then_loser() {
		let cli = Cli::parse_from(["swiss-tournament", "-d", "t.db", "report", "4", "7"]);

		assert_eq!(cli.database, PathBuf::from("t.db"));
		assert!(matches!(cli.command, Commands::Report { winner: 4, loser: 7 }));
	}

	#[test]
	fn test_subcommands_are_kebab_case() {
		let cli = Cli::parse_from(["swiss-tournament", "reset-players"]);

		assert!(matches!(cli.command, Commands::ResetPlayers));
	}

	#[test]
	fn test_cli_definition_is_valid() {
		use clap::CommandFactory;
		Cli::command().debug_assert();
	}
}
