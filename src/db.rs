use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Result};

use crate::data::{Match, Pairing, PlayerStanding};

pub fn create_schema(conn: &Connection) -> Result<()> {
	conn.execute(
		"CREATE TABLE IF NOT EXISTS players (
			id   INTEGER PRIMARY KEY AUTOINCREMENT,
			name TEXT    NOT NULL
		);",
		[],
	)?;

	conn.execute(
		"CREATE TABLE IF NOT EXISTS matches (
			id          INTEGER PRIMARY KEY AUTOINCREMENT,
			winner      INTEGER REFERENCES players (id)
			                    NOT NULL,
			loser       INTEGER REFERENCES players (id)
			                    NOT NULL,
			reported_at         NOT NULL
		);",
		[],
	)?;

	conn.execute(
		"CREATE VIEW IF NOT EXISTS standing AS
		 SELECT players.id,
		        players.name,
		        COUNT(CASE WHEN matches.winner = players.id THEN 1 END) AS win_count,
		        COUNT(matches.id) AS match_count
		   FROM players
		   LEFT JOIN matches
		     ON matches.winner = players.id OR matches.loser = players.id
		  GROUP BY players.id, players.name;",
		[],
	)?;

	// Consecutive ranks (1, 2), (3, 4), ... share a board.
	conn.execute(
		"CREATE VIEW IF NOT EXISTS pairing AS
		 WITH ranked AS (
		     SELECT id,
		            name,
		            ROW_NUMBER() OVER (
		                ORDER BY win_count DESC, match_count ASC, id ASC
		            ) AS position
		       FROM standing
		 )
		 SELECT (a.position + 1) / 2 AS board,
		        a.id   AS id1,
		        a.name AS name1,
		        b.id   AS id2,
		        b.name AS name2
		   FROM ranked a
		   JOIN ranked b ON b.position = a.position + 1
		  WHERE a.position % 2 = 1;",
		[],
	)?;

	Ok(())
}

pub fn enable_foreign_keys(conn: &Connection) -> Result<()> {
	conn.execute_batch("PRAGMA foreign_keys = ON;")
}

pub fn new_player(conn: &Connection, name: &str) -> Result<i64> {
	let mut stmt = conn.prepare("INSERT INTO players (name) VALUES (?1);")?;
	stmt.execute([name])?;

	Ok(conn.last_insert_rowid())
}

pub fn count_players(conn: &Connection) -> Result<i64> {
	conn.query_row("SELECT COUNT(*) FROM players;", [], |row| row.get(0))
}

pub fn new_match(
	conn: &Connection,
	winner: i64,
	loser: i64,
	reported_at: DateTime<Utc>,
) -> Result<()> {
	let mut stmt = conn.prepare(
		"INSERT INTO matches (winner, loser, reported_at)
		 VALUES (?1, ?2, ?3);",
	)?;
	stmt.execute(params![winner, loser, reported_at])?;

	Ok(())
}

pub fn delete_matches(conn: &Connection) -> Result<usize> {
	conn.execute("DELETE FROM matches;", [])
}

pub fn delete_players(conn: &Connection) -> Result<usize> {
	conn.execute("DELETE FROM players;", [])
}

pub fn get_standings(conn: &Connection) -> Result<Vec<PlayerStanding>> {
	let mut stmt = conn.prepare(
		"SELECT id, name, win_count, match_count
		   FROM standing
		  ORDER BY win_count DESC, match_count ASC, id ASC;",
	)?;

	let rows = stmt.query_map([], |row| {
		Ok(PlayerStanding {
			id: row.get(0)?,
			name: row.get(1)?,
			wins: row.get(2)?,
			matches: row.get(3)?,
		})
	})?;

	rows.collect()
}

pub fn get_pairings(conn: &Connection) -> Result<Vec<Pairing>> {
	let mut stmt = conn.prepare(
		"SELECT id1, name1, id2, name2
		   FROM pairing
		  ORDER BY board;",
	)?;

	let rows = stmt.query_map([], |row| {
		Ok(Pairing {
			id1: row.get(0)?,
			name1: row.get(1)?,
			id2: row.get(2)?,
			name2: row.get(3)?,
		})
	})?;

	rows.collect()
}

pub fn get_matches(conn: &Connection) -> Result<Vec<Match>> {
	let mut stmt = conn.prepare(
		"SELECT id, winner, loser, reported_at
		   FROM matches
		  ORDER BY id;",
	)?;

	let rows = stmt.query_map([], |row| {
		Ok(Match {
			id: row.get(0)?,
			winner: row.get(1)?,
			loser: row.get(2)?,
			reported_at: row.get(3)?,
		})
	})?;

	rows.collect()
}
