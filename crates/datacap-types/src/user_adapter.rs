//! Adapter that reads user account records from the user-information store.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt::Debug;

use crate::prelude::*;

/// Administrator attributes of a user account.
///
/// Each attribute maps to one column of the user-information table and
/// grants one Control Center capability. Attribute columns were added over
/// several schema versions, so any of them can be absent from a record read
/// from an older database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAttr {
	SuperUser,
	AccountManager,
	AdminRights,
	AccessSystemConfig,
	AccessSystemUpgrade,
	AccessExternalModuleInstall,
	AccessAdminDashboards,
}

impl AdminAttr {
	/// All admin attributes, in schema order. A user with any of these can
	/// access the Control Center.
	pub const ALL: [AdminAttr; 7] = [
		AdminAttr::SuperUser,
		AdminAttr::AccountManager,
		AdminAttr::AdminRights,
		AdminAttr::AccessSystemConfig,
		AdminAttr::AccessSystemUpgrade,
		AdminAttr::AccessExternalModuleInstall,
		AdminAttr::AccessAdminDashboards,
	];

	/// Column name of the attribute in the user-information table
	pub fn as_str(self) -> &'static str {
		match self {
			AdminAttr::SuperUser => "super_user",
			AdminAttr::AccountManager => "account_manager",
			AdminAttr::AdminRights => "admin_rights",
			AdminAttr::AccessSystemConfig => "access_system_config",
			AdminAttr::AccessSystemUpgrade => "access_system_upgrade",
			AdminAttr::AccessExternalModuleInstall => "access_external_module_install",
			AdminAttr::AccessAdminDashboards => "access_admin_dashboards",
		}
	}
}

/// One row of the user-information table.
///
/// Boolean attributes are stored as integer 1 (granted) or 0. `None` means
/// the value is either NULL or the column does not exist in the database
/// (pre-upgrade schema) - the two cases are deliberately not distinguished,
/// since the privilege fallback treats them the same.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserInfo {
	pub username: Box<str>,
	pub user_email: Option<Box<str>>,
	pub super_user: Option<i64>,
	pub account_manager: Option<i64>,
	pub admin_rights: Option<i64>,
	pub access_system_config: Option<i64>,
	pub access_system_upgrade: Option<i64>,
	pub access_external_module_install: Option<i64>,
	pub access_admin_dashboards: Option<i64>,
}

impl UserInfo {
	/// Value of a single admin attribute, `None` when the attribute is
	/// absent from the record
	pub fn admin_attr(&self, attr: AdminAttr) -> Option<i64> {
		match attr {
			AdminAttr::SuperUser => self.super_user,
			AdminAttr::AccountManager => self.account_manager,
			AdminAttr::AdminRights => self.admin_rights,
			AdminAttr::AccessSystemConfig => self.access_system_config,
			AdminAttr::AccessSystemUpgrade => self.access_system_upgrade,
			AdminAttr::AccessExternalModuleInstall => self.access_external_module_install,
			AdminAttr::AccessAdminDashboards => self.access_admin_dashboards,
		}
	}
}

/// A Datacap user store adapter
///
/// Implementations run a single parameterized lookup against the
/// user-information relation and map the zero-or-one result row.
#[async_trait]
pub trait UserAdapter: Debug + Send + Sync {
	/// Reads the user-information record for a username.
	///
	/// Returns `Error::NotFound` when no account with that username exists.
	async fn read_user_info(&self, username: &str) -> DcResult<UserInfo>;
}


// vim: ts=4
