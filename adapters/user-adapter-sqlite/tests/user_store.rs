//! Integration tests for the user-information store
//!
//! Covers row reads against the current schema, migration from a legacy
//! (version 1) database, and missing-row handling.

#[cfg(test)]
mod tests {
	use std::path::Path;

	use sqlx::SqlitePool;
	use sqlx::sqlite::SqliteConnectOptions;
	use tempfile::TempDir;

	use datacap::prelude::*;
	use datacap::user_adapter::UserAdapter;
	use datacap_user_adapter_sqlite::UserAdapterSqlite;

	/// Open a second connection to the adapter's database for test setup
	async fn open_db(path: &Path) -> SqlitePool {
		let opts = SqliteConnectOptions::new().filename(path);
		SqlitePool::connect_with(opts).await.expect("Failed to open test db")
	}

	#[tokio::test]
	async fn reads_full_user_row() {
		let tmp = TempDir::new().unwrap();
		let db_path = tmp.path().join("users.db");
		let adapter = UserAdapterSqlite::new(&db_path).await.expect("Failed to create adapter");

		let db = open_db(&db_path).await;
		sqlx::query(
			"INSERT INTO user_information
				(username, user_email, super_user, account_manager, admin_rights,
				access_system_config, access_system_upgrade,
				access_external_module_install, access_admin_dashboards)
			VALUES (?1, ?2, 0, 1, 0, 1, 0, NULL, 1)",
		)
		.bind("carla")
		.bind("carla@example.org")
		.execute(&db)
		.await
		.expect("Failed to insert user");

		let info = adapter.read_user_info("carla").await.expect("Failed to read user");
		assert_eq!(info.username.as_ref(), "carla");
		assert_eq!(info.user_email.as_deref(), Some("carla@example.org"));
		assert_eq!(info.super_user, Some(0));
		assert_eq!(info.account_manager, Some(1));
		assert_eq!(info.admin_rights, Some(0));
		assert_eq!(info.access_system_config, Some(1));
		assert_eq!(info.access_system_upgrade, Some(0));
		assert_eq!(info.access_external_module_install, None);
		assert_eq!(info.access_admin_dashboards, Some(1));
	}

	#[tokio::test]
	async fn unknown_username_is_not_found() {
		let tmp = TempDir::new().unwrap();
		let adapter = UserAdapterSqlite::new(tmp.path().join("users.db"))
			.await
			.expect("Failed to create adapter");

		assert_eq!(adapter.read_user_info("nobody").await, Err(Error::NotFound));
	}

	#[tokio::test]
	async fn schema_init_is_idempotent() {
		let tmp = TempDir::new().unwrap();
		let db_path = tmp.path().join("users.db");

		let _first = UserAdapterSqlite::new(&db_path).await.expect("Failed on first open");
		// Second open must not re-run the column migrations
		let _second = UserAdapterSqlite::new(&db_path).await.expect("Failed on second open");
	}

	#[tokio::test]
	async fn migrates_legacy_database() {
		let tmp = TempDir::new().unwrap();
		let db_path = tmp.path().join("users.db");

		// Build a version 1 database by hand: no fine-grained admin columns
		{
			let opts = SqliteConnectOptions::new().filename(&db_path).create_if_missing(true);
			let db = SqlitePool::connect_with(opts).await.expect("Failed to create legacy db");
			sqlx::query(
				"CREATE TABLE vars (key text NOT NULL, value text NOT NULL, PRIMARY KEY(key))",
			)
			.execute(&db)
			.await
			.unwrap();
			sqlx::query("INSERT INTO vars (key, value) VALUES ('db_version', '1')")
				.execute(&db)
				.await
				.unwrap();
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
			sqlx::query(
				"CREATE TABLE user_rights (
					project_id integer NOT NULL,
					username text NOT NULL,
					design text,
					user_rights text,
					record_create text,
					PRIMARY KEY(project_id, username)
				)",
			)
			.execute(&db)
			.await
			.unwrap();
			sqlx::query("INSERT INTO user_information (username, super_user) VALUES ('root', 1)")
				.execute(&db)
				.await
				.unwrap();
			db.close().await;
		}

		let adapter = UserAdapterSqlite::new(&db_path).await.expect("Failed to migrate");
		let info = adapter.read_user_info("root").await.expect("Failed to read user");

		assert_eq!(info.super_user, Some(1));
		// Added by the migration, NULL for existing rows
		assert_eq!(info.access_system_config, None);
		assert_eq!(info.access_admin_dashboards, None);
	}
}

// vim: ts=4
