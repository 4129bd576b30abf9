//! Core identifier types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Project identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ProjectId(pub i64);

impl fmt::Display for ProjectId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<i64> for ProjectId {
	fn from(id: i64) -> Self {
		ProjectId(id)
	}
}

// vim: ts=4
