//! Stateless access to a tournament database.
//!
//! [`Tournament`] only remembers where the database lives. Every operation
//! opens its own connection, runs inside a single transaction and closes the
//! connection again before returning. A failed operation rolls its
//! transaction back, so nothing is ever half written.

use std::{io::Read, path::PathBuf};

use chrono::Utc;
use rusqlite::{Connection, OpenFlags, Transaction};
use tracing::{debug, info};

use crate::{
	data::{Match, MatchRecord, Pairing, PlayerStanding},
	db,
	error::{Error, Result},
};

#[derive(Debug, Clone)]
pub struct Tournament {
	path: PathBuf,
}

impl Tournament {
	/// Points at an existing database without touching it. Operations
	/// fail if the file is missing instead of creating an empty one.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Points at a database, creating its tables and views if missing.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
		let tournament = Self::new(path);
		tournament.create_schema()?;

		Ok(tournament)
	}

	pub fn create_schema(&self) -> Result<()> {
		debug!(path = %self.path.display(), "creating schema");
		self.transaction_with(OpenFlags::default(), |tx| Ok(db::create_schema(tx)?))
	}

	/// Removes every match; players stay registered with a clean record.
	pub fn delete_matches(&self) -> Result<()> {
		let deleted = self.transaction(|tx| Ok(db::delete_matches(tx)?))?;
		info!(deleted, "deleted matches");

		Ok(())
	}

	/// Removes every player together with every match they played.
	pub fn delete_players(&self) -> Result<()> {
		let (matches, players) = self.transaction(|tx| {
			let matches = db::delete_matches(tx)?;
			let players = db::delete_players(tx)?;
			Ok((matches, players))
		})?;
		info!(matches, players, "deleted players");

		Ok(())
	}

	pub fn count_players(&self) -> Result<i64> {
		self.transaction(|tx| Ok(db::count_players(tx)?))
	}

	/// Registers a player and returns the id the database assigned.
	/// Names need not be unique.
	pub fn register_player(&self, name: &str) -> Result<i64> {
		let id = self.transaction(|tx| Ok(db::new_player(tx, name)?))?;
		info!(id, name, "registered player");

		Ok(id)
	}

	/// Records that `winner` beat `loser`.
	///
	/// Nothing stops a player from meeting the same opponent twice or
	/// playing themselves; an id with no registered player is rejected
	/// with [`Error::Constraint`].
	pub fn report_match(&self, winner: i64, loser: i64) -> Result<()> {
		self.transaction(|tx| Ok(db::new_match(tx, winner, loser, Utc::now())?))?;
		info!(winner, loser, "reported match");

		Ok(())
	}

	/// Every registered player, most wins first. Equal wins rank the
	/// player with fewer matches played higher, then the lower id.
	pub fn player_standings(&self) -> Result<Vec<PlayerStanding>> {
		let standings = self.transaction(|tx| Ok(db::get_standings(tx)?))?;
		debug!(players = standings.len(), "read standings");

		Ok(standings)
	}

	/// Pairs the players ranked 1 and 2, 3 and 4, and so on.
	///
	/// Fails with [`Error::OddPlayerCount`] rather than leave someone out.
	pub fn swiss_pairings(&self) -> Result<Vec<Pairing>> {
		let pairings = self.transaction(|tx| {
			let players = db::count_players(tx)?;
			if players % 2 != 0 {
				return Err(Error::OddPlayerCount(players));
			}

			Ok(db::get_pairings(tx)?)
		})?;
		debug!(pairs = pairings.len(), "read pairings");

		Ok(pairings)
	}

	pub fn matches(&self) -> Result<Vec<Match>> {
		self.transaction(|tx| Ok(db::get_matches(tx)?))
	}

	/// Reports every match in a `winner,loser` CSV file. Either all rows
	/// are recorded or, if any row is malformed or names an unknown
	/// player, none are.
	pub fn load_matches<R: Read>(&self, reader: R) -> Result<usize> {
		let mut rdr = csv::Reader::from_reader(reader);

		let loaded = self.transaction(|tx| {
			let reported_at = Utc::now();
			let mut loaded = 0;
			for record in rdr.deserialize() {
				let record: MatchRecord = record?;
				db::new_match(tx, record.winner, record.loser, reported_at)?;
				loaded += 1;
			}
			Ok(loaded)
		})?;
		info!(loaded, "loaded matches");

		Ok(loaded)
	}

	fn connect(&self, flags: OpenFlags) -> Result<Connection> {
		let conn = Connection::open_with_flags(&self.path, flags)?;
		db::enable_foreign_keys(&conn)?;

		Ok(conn)
	}

	fn transaction<T>(&self, op: impl FnOnce(&Transaction) -> Result<T>) -> Result<T> {
		let flags = OpenFlags::default() - OpenFlags::SQLITE_OPEN_CREATE;
		self.transaction_with(flags, op)
	}

	// The connection is dropped, and thereby closed, on every path out.
	fn transaction_with<T>(
		&self,
		flags: OpenFlags,
		op: impl FnOnce(&Transaction) -> Result<T>,
	) -> Result<T> {
		let mut conn = self.connect(flags)?;
		let tx = conn.transaction()?;
		let value = op(&tx)?;
		tx.commit()?;

		Ok(value)
	}
}
