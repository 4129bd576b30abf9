//! User-information lookup

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::utils::*;
use datacap::prelude::*;
use datacap::user_adapter::UserInfo;

/// Reads an admin attribute column.
///
/// A column that does not exist in the row (the database predates the
/// schema version that introduced it) reads the same as NULL: the attribute
/// is absent and the privilege fallback applies.
fn attr_col(row: &SqliteRow, col: &str) -> Option<i64> {
	row.try_get::<Option<i64>, _>(col).unwrap_or(None)
}

/// Read the user-information row for a username
pub(crate) async fn read_user_info(db: &SqlitePool, username: &str) -> DcResult<UserInfo> {
	let res = sqlx::query("SELECT * FROM user_information WHERE username = ?1")
		.bind(username)
		.fetch_one(db)
		.await;

	map_res(res, |row| {
		Ok(UserInfo {
			username: row.try_get("username")?,
			user_email: row.try_get("user_email")?,
			super_user: attr_col(row, "super_user"),
			account_manager: attr_col(row, "account_manager"),
			admin_rights: attr_col(row, "admin_rights"),
			access_system_config: attr_col(row, "access_system_config"),
			access_system_upgrade: attr_col(row, "access_system_upgrade"),
			access_external_module_install: attr_col(row, "access_external_module_install"),
			access_admin_dashboards: attr_col(row, "access_admin_dashboards"),
		})
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use sqlx::SqlitePool;

	/// A pre-upgrade database: user_information without the fine-grained
	/// admin columns. The adapter never creates one of these itself, but it
	/// must read rows from host-managed databases that look like this.
	async fn legacy_db() -> SqlitePool {
		let db = SqlitePool::connect("sqlite::memory:").await.unwrap();
		sqlx::query(
			"CREATE TABLE user_information (
				username text NOT NULL,
				user_email text,
				super_user integer,
				account_manager integer,
				admin_rights integer,
				PRIMARY KEY(username)
			)",
		)
		.execute(&db)
		.await
		.unwrap();
		db
	}

	#[tokio::test]
	async fn missing_columns_read_as_absent() {
		let db = legacy_db().await;
		sqlx::query(
			"INSERT INTO user_information (username, user_email, super_user) VALUES (?1, ?2, 1)",
		)
		.bind("root")
		.bind("root@example.org")
		.execute(&db)
		.await
		.unwrap();

		let info = read_user_info(&db, "root").await.unwrap();
		assert_eq!(info.super_user, Some(1));
		assert_eq!(info.account_manager, None);
		assert_eq!(info.access_system_config, None);
		assert_eq!(info.access_admin_dashboards, None);
		assert_eq!(info.user_email.as_deref(), Some("root@example.org"));
	}

	#[tokio::test]
	async fn unknown_username_is_not_found() {
		let db = legacy_db().await;
		assert_eq!(read_user_info(&db, "nobody").await, Err(Error::NotFound));
	}
}

// vim: ts=4
