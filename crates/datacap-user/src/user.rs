//! The `UserContext` privilege facade

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::OnceCell;

use datacap_types::prelude::*;
use datacap_types::rights_adapter::{ProjectRights, RightsAdapter};
use datacap_types::user_adapter::{AdminAttr, UserAdapter, UserInfo};

/// Privilege context of a single user account.
///
/// The user-information record is loaded on first attribute access and kept
/// for the lifetime of the instance - it is never refreshed. Callers that
/// need fresh data construct a new `UserContext`. Instances do not share
/// their cache, not even for the same username.
#[derive(Debug)]
pub struct UserContext {
	users: Arc<dyn UserAdapter>,
	rights: Arc<dyn RightsAdapter>,
	username: Box<str>,
	user_info: OnceCell<UserInfo>,
}

impl UserContext {
	/// Creates a context for a username. Performs no I/O.
	pub fn new(
		users: Arc<dyn UserAdapter>,
		rights: Arc<dyn RightsAdapter>,
		username: impl Into<Box<str>>,
	) -> Self {
		Self { users, rights, username: username.into(), user_info: OnceCell::new() }
	}

	/// The username this context was created for
	pub fn username(&self) -> &str {
		&self.username
	}

	/// The user's rights, keyed by project.
	///
	/// `project_ids: None` resolves rights for all projects the user has
	/// access to. The result is passed through from the rights adapter
	/// uninterpreted.
	pub async fn rights(
		&self,
		project_ids: Option<&[ProjectId]>,
	) -> DcResult<HashMap<ProjectId, ProjectRights>> {
		self.rights.user_rights(project_ids, &self.username).await
	}

	/// Whether the user may modify a project's instrument definitions.
	///
	/// Super-users have design rights in every project. For everyone else
	/// the project's rights row decides; when no project id is given, the
	/// ambient project of the current operation is used.
	pub async fn has_design_rights(&self, project_id: Option<ProjectId>) -> DcResult<bool> {
		if self.is_super_user().await? {
			return Ok(true);
		}
		let project_id = match project_id {
			Some(id) => id,
			None => self.rights.require_project_id()?,
		};
		let rights = self.rights(Some(&[project_id])).await?;

		// The design flag is stored as TEXT; only the exact string "1"
		// grants the right.
		Ok(rights.get(&project_id).and_then(|r| r.design.as_deref()) == Some("1"))
	}

	/// Whether the user has full access to all projects in the system with
	/// maximum privileges, including the project-administration pages of
	/// the Control Center
	pub async fn is_super_user(&self) -> DcResult<bool> {
		self.has_admin_attr(AdminAttr::SuperUser).await
	}

	/// Whether the user can access, modify and create user accounts
	/// (Browse Users, Add Users, User Allowlist, Email Users)
	pub async fn is_account_manager(&self) -> DcResult<bool> {
		self.has_admin_attr(AdminAttr::AccountManager).await
	}

	/// Whether the user can access the Administrator Privileges page and
	/// grant admin rights to any user
	pub async fn can_set_administrator_privileges(&self) -> DcResult<bool> {
		self.has_admin_attr(AdminAttr::AdminRights).await
	}

	/// Whether the user can modify settings on the system configuration
	/// pages of the Control Center
	pub async fn can_access_system_config(&self) -> DcResult<bool> {
		self.has_admin_attr(AdminAttr::AccessSystemConfig).await
	}

	/// Whether the user can access the software upgrade tools, including
	/// new-version notifications
	pub async fn can_access_system_upgrade(&self) -> DcResult<bool> {
		self.has_admin_attr(AdminAttr::AccessSystemUpgrade).await
	}

	/// Whether the user can install external modules from the repository
	/// and enable and configure them system-wide
	pub async fn can_access_external_module_install(&self) -> DcResult<bool> {
		self.has_admin_attr(AdminAttr::AccessExternalModuleInstall).await
	}

	/// Whether the user can access the Dashboard pages of the Control
	/// Center
	pub async fn can_access_admin_dashboards(&self) -> DcResult<bool> {
		self.has_admin_attr(AdminAttr::AccessAdminDashboards).await
	}

	/// Whether the user can access the Control Center in any capacity,
	/// i.e. holds at least one admin attribute
	pub async fn can_access_control_center(&self) -> DcResult<bool> {
		for attr in AdminAttr::ALL {
			if self.has_admin_attr(attr).await? {
				return Ok(true);
			}
		}
		Ok(false)
	}

	/// The user's primary e-mail address, if one is on record
	pub async fn email(&self) -> DcResult<Option<&str>> {
		Ok(self.info().await?.user_email.as_deref())
	}

	/// Checks a single admin attribute of the user.
	///
	/// A present attribute grants iff its value is 1. An absent attribute
	/// falls back to the user's super-user flag: records read from
	/// databases predating the fine-grained admin columns only carry
	/// `super_user`, and for those every admin capability collapses to
	/// super-user status. A record missing `super_user` as well denies.
	async fn has_admin_attr(&self, attr: AdminAttr) -> DcResult<bool> {
		let info = self.info().await?;
		Ok(match info.admin_attr(attr) {
			Some(value) => value == 1,
			None => info.super_user == Some(1),
		})
	}

	/// The user-information record, loaded on first use
	async fn info(&self) -> DcResult<&UserInfo> {
		self.user_info
			.get_or_try_init(|| async {
				debug!(username = %self.username, "Loading user information");
				self.users.read_user_info(&self.username).await
			})
			.await
	}
}

// vim: ts=4
