//! Database schema initialization and migrations

use sqlx::{Sqlite, SqlitePool, Transaction};

/// Get the current database version from vars table
async fn get_db_version(tx: &mut Transaction<'_, Sqlite>) -> i64 {
	sqlx::query_scalar::<_, String>("SELECT value FROM vars WHERE key = 'db_version'")
		.fetch_optional(&mut **tx)
		.await
		.ok()
		.flatten()
		.and_then(|v| v.parse().ok())
		.unwrap_or(0)
}

/// Set the database version in vars table
async fn set_db_version(tx: &mut Transaction<'_, Sqlite>, version: i64) {
	let _ = sqlx::query("INSERT OR REPLACE INTO vars (key, value) VALUES ('db_version', ?)")
		.bind(version.to_string())
		.execute(&mut **tx)
		.await;
}

// Current schema version - update this when adding new migrations
const CURRENT_DB_VERSION: i64 = 2;

/// Initialize the database schema and run migrations
///
/// Version 1 is the legacy schema: user_information carries only the
/// super_user, account_manager and admin_rights attributes. Version 2 adds
/// the fine-grained admin attribute columns. A fresh database runs through
/// both steps, so old and new databases end up column-identical.
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Create vars table first (needed for version tracking)
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS vars (
		key text NOT NULL,
		value text NOT NULL,
		created_at INTEGER DEFAULT (unixepoch()),
		updated_at INTEGER DEFAULT (unixepoch()),
		PRIMARY KEY(key)
	)",
	)
	.execute(&mut *tx)
	.await?;

	let version = get_db_version(&mut tx).await;

	if version < 1 {
		// User information
		sqlx::query(
			"CREATE TABLE IF NOT EXISTS user_information (
				username text NOT NULL,
				user_email text,
				super_user integer,
				account_manager integer,
				admin_rights integer,
				created_at INTEGER DEFAULT (unixepoch()),
				updated_at INTEGER DEFAULT (unixepoch()),
				PRIMARY KEY(username)
			)",
		)
		.execute(&mut *tx)
		.await?;

		// Project rights. Flag columns are TEXT: '1' means granted.
		sqlx::query(
			"CREATE TABLE IF NOT EXISTS user_rights (
				project_id integer NOT NULL,
				username text NOT NULL,
				design text,
				user_rights text,
				record_create text,
				created_at INTEGER DEFAULT (unixepoch()),
				updated_at INTEGER DEFAULT (unixepoch()),
				PRIMARY KEY(project_id, username)
			)",
		)
		.execute(&mut *tx)
		.await?;
	}

	if version < 2 {
		// Fine-grained admin attributes
		for col in [
			"access_system_config",
			"access_system_upgrade",
			"access_external_module_install",
			"access_admin_dashboards",
		] {
			sqlx::query(&format!("ALTER TABLE user_information ADD COLUMN {} integer", col))
				.execute(&mut *tx)
				.await?;
		}
	}

	set_db_version(&mut tx, CURRENT_DB_VERSION).await;

	tx.commit().await?;
	Ok(())
}

// vim: ts=4
