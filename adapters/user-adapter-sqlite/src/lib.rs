//! SQLite-backed adapter for the Datacap user/privilege subsystem.
//!
//! Implements both the user-information store and the project-rights lookup
//! over a single SQLite database, using the same table layout the host
//! platform maintains (`user_information`, `user_rights`).

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use datacap::prelude::*;
use datacap::rights_adapter::{ProjectRights, RightsAdapter};
use datacap::user_adapter::{UserAdapter, UserInfo};

mod rights;
mod schema;
mod user;
mod utils;

use crate::utils::inspect;

/// SQLite implementation of `UserAdapter` and `RightsAdapter`
#[derive(Debug)]
pub struct UserAdapterSqlite {
	db: SqlitePool,
	active_project: Option<ProjectId>,
}

impl UserAdapterSqlite {
	/// Opens (and if necessary creates and migrates) the database at `path`
	pub async fn new<P: AsRef<Path>>(path: P) -> DcResult<Self> {
		let opts = SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(SqliteJournalMode::Wal);
		let db = SqlitePoolOptions::new()
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.or(Err(Error::DbError))?;

		schema::init_db(&db).await.inspect_err(inspect).or(Err(Error::DbError))?;
		info!("User store initialized");

		Ok(Self { db, active_project: None })
	}

	/// Sets the ambient project used when a rights check is made without an
	/// explicit project id. In the server this comes from the request
	/// context; without it `require_project_id` fails.
	pub fn with_active_project(mut self, project_id: ProjectId) -> Self {
		self.active_project = Some(project_id);
		self
	}
}

#[async_trait]
impl UserAdapter for UserAdapterSqlite {
	async fn read_user_info(&self, username: &str) -> DcResult<UserInfo> {
		user::read_user_info(&self.db, username).await
	}
}

#[async_trait]
impl RightsAdapter for UserAdapterSqlite {
	async fn user_rights(
		&self,
		project_ids: Option<&[ProjectId]>,
		username: &str,
	) -> DcResult<HashMap<ProjectId, ProjectRights>> {
		rights::user_rights(&self.db, project_ids, username).await
	}

	fn require_project_id(&self) -> DcResult<ProjectId> {
		self.active_project.ok_or(Error::NoProjectContext)
	}
}

// vim: ts=4
