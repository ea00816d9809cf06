mod cli;

use std::{
	fs::File,
	io::{self, Write},
	path::Path,
};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use swiss_tournament::{output, Tournament};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
	let cli = Cli::parse();

	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.init();

	execute(&cli)
}

/// Runs the command and only then writes its output, so a failed command
/// never truncates the `--output` file.
fn execute(cli: &Cli) -> Result<()> {
	let rendered = run(cli)?;
	emit(cli.output.as_deref(), &rendered)
}

fn run(cli: &Cli) -> Result<Vec<u8>> {
	// Only `init` may create a database; a mistyped path should fail.
	let tournament = match cli.command {
		Commands::Init => Tournament::open(&cli.database),
		_ => Ok(Tournament::new(&cli.database)),
	}
	.with_context(|| format!("could not open {}", cli.database.display()))?;

	let mut out = Vec::new();

	match &cli.command {
		Commands::Init => {}
		Commands::Register { name } => {
			let id = tournament.register_player(name)?;
			writeln!(out, "{id}")?;
		}
		Commands::Report { winner, loser } => tournament
			.report_match(*winner, *loser)
			.with_context(|| format!("could not report #{winner} beating #{loser}"))?,
		Commands::Count => writeln!(out, "{}", tournament.count_players()?)?,
		Commands::Standings { csv } => {
			let standings = tournament.player_standings()?;
			if *csv {
				output::write_csv(&mut out, &standings)?;
			} else {
				out.write_all(output::standings_string(&standings).as_bytes())?;
			}
		}
		Commands::Pairings { csv } => {
			let pairings = tournament.swiss_pairings()?;
			if *csv {
				output::write_csv(&mut out, &pairings)?;
			} else {
				out.write_all(output::pairings_string(&pairings).as_bytes())?;
			}
		}
		Commands::Matches { csv } => {
			let matches = tournament.matches()?;
			if *csv {
				output::write_csv(&mut out, &matches)?;
			} else {
				out.write_all(output::matches_string(&matches).as_bytes())?;
			}
		}
		Commands::Load { matches } => {
			let file = File::open(matches)
				.with_context(|| format!("could not open {}", matches.display()))?;
			let loaded = tournament
				.load_matches(file)
				.with_context(|| format!("could not load {}", matches.display()))?;
			writeln!(out, "{loaded}")?;
		}
		Commands::ResetMatches => tournament.delete_matches()?,
		Commands::ResetPlayers => tournament.delete_players()?,
	}

	Ok(out)
}

fn emit(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
	let mut out = match path {
		Some(path) => Box::new(
			File::create(path).with_context(|| format!("could not create {}", path.display()))?,
		) as Box<dyn Write>,
		None => Box::new(io::stdout()) as Box<dyn Write>,
	};

	out.write_all(bytes)?;
	out.flush()?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::TempDir;

	fn cli(dir: &TempDir, args: &[&str]) -> Cli {
		let database = dir.path().join("tournament.db");
		let output = dir.path().join("out.txt");
		let mut argv = vec![
			"swiss-tournament".to_string(),
			"-d".to_string(),
			database.display().to_string(),
			"-o".to_string(),
			output.display().to_string(),
		];
		argv.extend(args.iter().map(|arg| arg.to_string()));
		Cli::parse_from(argv)
	}

	#[test]
	fn test_failed_command_leaves_no_output_file() {
		let dir = TempDir::new().unwrap();
		let tournament = Tournament::open(dir.path().join("tournament.db")).unwrap();
		for name in ["Ada", "Bea", "Cy"] {
			tournament.register_player(name).unwrap();
		}

		assert!(execute(&cli(&dir, &["pairings"])).is_err());
		assert!(!dir.path().join("out.txt").exists());
	}

	#[test]
	fn test_reads_do_not_create_a_database() {
		let dir = TempDir::new().unwrap();

		assert!(execute(&cli(&dir, &["count"])).is_err());
		assert!(!dir.path().join("tournament.db").exists());
	}

	#[test]
	fn test_init_then_count_writes_output() {
		let dir = TempDir::new().unwrap();
		execute(&cli(&dir, &["init"])).unwrap();
		execute(&cli(&dir, &["register", "Ada"])).unwrap();

		execute(&cli(&dir, &["count"])).unwrap();

		let written = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
		assert_eq!(written, "1\n");
	}

	#[test]
	fn test_matches_export_as_csv() {
		let dir = TempDir::new().unwrap();
		let tournament = Tournament::open(dir.path().join("tournament.db")).unwrap();
		let a = tournament.register_player("Ada").unwrap();
		let b = tournament.register_player("Bea").unwrap();
		tournament.report_match(a, b).unwrap();

		execute(&cli(&dir, &["matches", "--csv"])).unwrap();

		let written = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
		let mut lines = written.lines();
		assert_eq!(lines.next(), Some("id,winner,loser,reported_at"));
		assert!(lines.next().unwrap().starts_with(&format!("1,{a},{b},")));
	}
}
