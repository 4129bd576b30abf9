//! Adapter that resolves per-project permission sets for a user.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::prelude::*;

/// Per-project rights of a user.
///
/// Flag values are carried exactly as the platform stores them: TEXT columns
/// where the string `"1"` means granted. Consumers must compare against the
/// string form; the stored representation is not an integer or a boolean.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectRights {
	/// Right to modify the project's data-collection instrument definitions
	pub design: Option<Box<str>>,
	/// Right to manage other users' access within the project
	pub user_rights: Option<Box<str>>,
	/// Right to create new records in the project
	pub record_create: Option<Box<str>>,
}

/// A Datacap rights adapter
///
/// Resolves project-level permission sets and the ambient project of the
/// current operation. In the server this is backed by the request context
/// and the rights store; tests substitute a double.
#[async_trait]
pub trait RightsAdapter: Debug + Send + Sync {
	/// Reads the rights of a user, keyed by project.
	///
	/// `project_ids: None` means all projects the user has rights in.
	/// Projects where the user has no rights row are absent from the result.
	async fn user_rights(
		&self,
		project_ids: Option<&[ProjectId]>,
		username: &str,
	) -> DcResult<HashMap<ProjectId, ProjectRights>>;

	/// The project id of the ambient operation context.
	///
	/// Returns `Error::NoProjectContext` when no project is active.
	fn require_project_id(&self) -> DcResult<ProjectId>;
}

// vim: ts=4
