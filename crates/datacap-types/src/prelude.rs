//! Common imports used throughout the subsystem

pub use crate::error::{DcResult, Error};
pub use crate::types::ProjectId;

pub use tracing::{debug, error, info, trace, warn};

// vim: ts=4
