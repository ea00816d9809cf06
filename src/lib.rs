//! Bookkeeping for a Swiss-system tournament kept in SQLite.
//!
//! Ranking and pairing are computed by the `standing` and `pairing` views;
//! [`Tournament`] is a thin, stateless client around them.

pub mod data;
pub mod db;
pub mod error;
pub mod output;
pub mod tournament;

pub use data::{Match, MatchRecord, Pairing, PlayerStanding};
pub use error::{Error, Result};
pub use tournament::Tournament;
