use rusqlite::ErrorCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	#[error("database error: {0}")]
	Database(#[source] rusqlite::Error),

	#[error("constraint violated: {0}")]
	Constraint(String),

	#[error("cannot pair an odd number of players ({0})")]
	OddPlayerCount(i64),

	#[error("csv error: {0}")]
	Csv(#[from] csv::Error),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for Error {
	fn from(err: rusqlite::Error) -> Self {
		match err.sqlite_error_code() {
			Some(ErrorCode::ConstraintViolation) => Error::Constraint(err.to_string()),
			_ => Error::Database(err),
		}
	}
}
