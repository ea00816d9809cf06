use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the ranking, as read from the `standing` view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerStanding {
	pub id: i64,
	pub name: String,
	pub wins: i64,
	pub matches: i64,
}

/// Two players adjacent in the standings, to meet in the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
	pub id1: i64,
	pub name1: String,
	pub id2: i64,
	pub name2: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
	pub id: i64,
	pub winner: i64,
	pub loser: i64,
	pub reported_at: DateTime<Utc>,
}

/// A match result as it appears in an imported CSV file.
#[derive(Debug, Deserialize)]
pub struct MatchRecord {
	pub winner: i64,
	pub loser: i64,
}
