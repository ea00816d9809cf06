use std::io::Write;

use serde::Serialize;

use crate::{
	data::{Match, Pairing, PlayerStanding},
	error::Result,
};

pub fn standings_string(standings: &[PlayerStanding]) -> String {
	let mut string = String::from("# Standings\n```");

	for (rank, standing) in standings.iter().enumerate() {
		string.push_str(&format!(
			"\n{}: {} (#{}) - {} wins / {} played",
			rank + 1,
			standing.name,
			standing.id,
			standing.wins,
			standing.matches
		));
	}

	string.push_str("\n```\n");
	string
}

pub fn pairings_string(pairings: &[Pairing]) -> String {
	let mut string = String::from("# Pairings\n```");

	for (board, pairing) in pairings.iter().enumerate() {
		string.push_str(&format!(
			"\n{}: {} (#{}) vs {} (#{})",
			board + 1,
			pairing.name1,
			pairing.id1,
			pairing.name2,
			pairing.id2
		));
	}

	string.push_str("\n```\n");
	string
}

pub fn matches_string(matches: &[Match]) -> String {
	let mut string = String::from("# Matches\n```");

	for m in matches {
		string.push_str(&format!(
			"\n{}: #{} beat #{} at {}",
			m.id,
			m.winner,
			m.loser,
			m.reported_at.format("%Y-%m-%d %H:%M:%S")
		));
	}

	string.push_str("\n```\n");
	string
}

/// Writes one CSV row per record, with a header taken from the field names.
pub fn write_csv<W: Write, T: Serialize>(out: W, rows: &[T]) -> Result<()> {
	let mut wtr = csv::Writer::from_writer(out);
	for row in rows {
		wtr.serialize(row)?;
	}
	wtr.flush()?;

	Ok(())
}
