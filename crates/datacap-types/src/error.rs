//! Error types shared across the subsystem

use std::fmt;

pub type DcResult<T> = std::result::Result<T, Error>;

/// Errors surfaced by the privilege facade and its adapters.
///
/// Adapter implementations collapse their backend-specific failures into
/// these variants after logging the details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// The requested record does not exist (e.g. unknown username)
	NotFound,
	/// The caller lacks the privilege for the attempted operation
	PermissionDenied,
	/// A database operation failed
	DbError,
	/// No ambient project is active and none was supplied
	NoProjectContext,
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::DbError => write!(f, "database error"),
			Error::NoProjectContext => write!(f, "no active project context"),
		}
	}
}

impl std::error::Error for Error {}

// vim: ts=4
