//! Project rights lookup

use std::collections::HashMap;

use sqlx::{Row, SqlitePool};

use crate::utils::*;
use datacap::prelude::*;
use datacap::rights_adapter::ProjectRights;

/// Read a user's rights, keyed by project.
///
/// `project_ids: None` returns rights for every project the user has a
/// rights row in. Flag columns come back verbatim as stored ('1' = granted).
pub(crate) async fn user_rights(
	db: &SqlitePool,
	project_ids: Option<&[ProjectId]>,
	username: &str,
) -> DcResult<HashMap<ProjectId, ProjectRights>> {
	let rows = match project_ids {
		None => {
			sqlx::query(
				"SELECT project_id, design, user_rights, record_create
				FROM user_rights WHERE username = ?1",
			)
			.bind(username)
			.fetch_all(db)
			.await
		}
		Some(ids) => {
			// Bind ?2..?n+1 for the project id list
			let placeholders =
				(0..ids.len()).map(|i| format!("?{}", i + 2)).collect::<Vec<_>>().join(", ");
			let sql = format!(
				"SELECT project_id, design, user_rights, record_create
				FROM user_rights WHERE username = ?1 AND project_id IN ({})",
				placeholders
			);
			let mut query = sqlx::query(&sql).bind(username);
			for id in ids {
				query = query.bind(id.0);
			}
			query.fetch_all(db).await
		}
	};
	let rows = rows.inspect_err(inspect).or(Err(Error::DbError))?;

	let mut rights = HashMap::with_capacity(rows.len());
	for row in rows {
		let project_id: i64 = row.try_get("project_id").inspect_err(inspect).or(Err(Error::DbError))?;
		rights.insert(
			ProjectId(project_id),
			ProjectRights {
				design: row.try_get("design").inspect_err(inspect).or(Err(Error::DbError))?,
				user_rights: row.try_get("user_rights").inspect_err(inspect).or(Err(Error::DbError))?,
				record_create: row.try_get("record_create").inspect_err(inspect).or(Err(Error::DbError))?,
			},
		);
	}
	Ok(rights)
}

// vim: ts=4
