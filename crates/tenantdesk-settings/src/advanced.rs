//! Tenant operator policy flags
//!
//! Same merge-with-defaults contract as the UI settings document, applied to
//! four policy groups. Values come from the tenant backend, not the browser.

use serde::{Deserialize, Serialize};

use crate::merge::{MergePolicy, lenient, pick};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordPolicy {
	pub min_length: u32,
	pub require_uppercase: bool,
	pub require_lowercase: bool,
	pub require_digit: bool,
	pub require_special: bool,
	/// Days until a password expires, 0 means never
	pub expiry_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPolicy {
	pub enabled: bool,
	pub require_email_verification: bool,
	/// Empty list allows every domain
	pub allowed_email_domains: Vec<Box<str>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPolicy {
	pub ttl_minutes: u32,
	pub idle_timeout_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserManagementPolicy {
	pub allow_self_delete: bool,
	pub allow_profile_edit: bool,
	pub allow_username_change: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSettingsDocument {
	pub password_policy: PasswordPolicy,
	pub registration: RegistrationPolicy,
	pub session: SessionPolicy,
	pub user_management: UserManagementPolicy,
}

impl Default for AdvancedSettingsDocument {
	fn default() -> Self {
		AdvancedSettingsDocument {
			password_policy: PasswordPolicy {
				min_length: 8,
				require_uppercase: true,
				require_lowercase: true,
				require_digit: true,
				require_special: false,
				expiry_days: 0,
			},
			registration: RegistrationPolicy {
				enabled: true,
				require_email_verification: true,
				allowed_email_domains: Vec::new(),
			},
			session: SessionPolicy { ttl_minutes: 480, idle_timeout_minutes: 30 },
			user_management: UserManagementPolicy {
				allow_self_delete: false,
				allow_profile_edit: true,
				allow_username_change: false,
			},
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialPasswordPolicy {
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub min_length: Option<u32>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub require_uppercase: Option<bool>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub require_lowercase: Option<bool>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub require_digit: Option<bool>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub require_special: Option<bool>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub expiry_days: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialRegistrationPolicy {
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub enabled: Option<bool>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub require_email_verification: Option<bool>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub allowed_email_domains: Option<Vec<Box<str>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSessionPolicy {
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub ttl_minutes: Option<u32>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub idle_timeout_minutes: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialUserManagementPolicy {
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub allow_self_delete: Option<bool>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub allow_profile_edit: Option<bool>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub allow_username_change: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialAdvancedSettings {
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub password_policy: Option<PartialPasswordPolicy>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub registration: Option<PartialRegistrationPolicy>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub session: Option<PartialSessionPolicy>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub user_management: Option<PartialUserManagementPolicy>,
}

impl From<&AdvancedSettingsDocument> for PartialAdvancedSettings {
	fn from(doc: &AdvancedSettingsDocument) -> Self {
		let pw = &doc.password_policy;
		let reg = &doc.registration;
		let um = &doc.user_management;
		PartialAdvancedSettings {
			password_policy: Some(PartialPasswordPolicy {
				min_length: Some(pw.min_length),
				require_uppercase: Some(pw.require_uppercase),
				require_lowercase: Some(pw.require_lowercase),
				require_digit: Some(pw.require_digit),
				require_special: Some(pw.require_special),
				expiry_days: Some(pw.expiry_days),
			}),
			registration: Some(PartialRegistrationPolicy {
				enabled: Some(reg.enabled),
				require_email_verification: Some(reg.require_email_verification),
				allowed_email_domains: Some(reg.allowed_email_domains.clone()),
			}),
			session: Some(PartialSessionPolicy {
				ttl_minutes: Some(doc.session.ttl_minutes),
				idle_timeout_minutes: Some(doc.session.idle_timeout_minutes),
			}),
			user_management: Some(PartialUserManagementPolicy {
				allow_self_delete: Some(um.allow_self_delete),
				allow_profile_edit: Some(um.allow_profile_edit),
				allow_username_change: Some(um.allow_username_change),
			}),
		}
	}
}

impl AdvancedSettingsDocument {
	pub fn merge(&self, partial: Option<&PartialAdvancedSettings>) -> Self {
		self.merge_with(partial, MergePolicy::Presence)
	}

	pub fn merge_with(&self, partial: Option<&PartialAdvancedSettings>, policy: MergePolicy) -> Self {
		let Some(partial) = partial else {
			return self.clone();
		};

		let pw = partial.password_policy.as_ref();
		let reg = partial.registration.as_ref();
		let sess = partial.session.as_ref();
		let um = partial.user_management.as_ref();
		let base_pw = &self.password_policy;
		let base_reg = &self.registration;
		let base_um = &self.user_management;

		AdvancedSettingsDocument {
			password_policy: PasswordPolicy {
				min_length: pick(pw.and_then(|p| p.min_length.as_ref()), &base_pw.min_length, policy),
				require_uppercase: pick(
					pw.and_then(|p| p.require_uppercase.as_ref()),
					&base_pw.require_uppercase,
					policy,
				),
				require_lowercase: pick(
					pw.and_then(|p| p.require_lowercase.as_ref()),
					&base_pw.require_lowercase,
					policy,
				),
				require_digit: pick(
					pw.and_then(|p| p.require_digit.as_ref()),
					&base_pw.require_digit,
					policy,
				),
				require_special: pick(
					pw.and_then(|p| p.require_special.as_ref()),
					&base_pw.require_special,
					policy,
				),
				expiry_days: pick(pw.and_then(|p| p.expiry_days.as_ref()), &base_pw.expiry_days, policy),
			},
			registration: RegistrationPolicy {
				enabled: pick(reg.and_then(|r| r.enabled.as_ref()), &base_reg.enabled, policy),
				require_email_verification: pick(
					reg.and_then(|r| r.require_email_verification.as_ref()),
					&base_reg.require_email_verification,
					policy,
				),
				allowed_email_domains: pick(
					reg.and_then(|r| r.allowed_email_domains.as_ref()),
					&base_reg.allowed_email_domains,
					policy,
				),
			},
			session: SessionPolicy {
				ttl_minutes: pick(
					sess.and_then(|s| s.ttl_minutes.as_ref()),
					&self.session.ttl_minutes,
					policy,
				),
				idle_timeout_minutes: pick(
					sess.and_then(|s| s.idle_timeout_minutes.as_ref()),
					&self.session.idle_timeout_minutes,
					policy,
				),
			},
			user_management: UserManagementPolicy {
				allow_self_delete: pick(
					um.and_then(|u| u.allow_self_delete.as_ref()),
					&base_um.allow_self_delete,
					policy,
				),
				allow_profile_edit: pick(
					um.and_then(|u| u.allow_profile_edit.as_ref()),
					&base_um.allow_profile_edit,
					policy,
				),
				allow_username_change: pick(
					um.and_then(|u| u.allow_username_change.as_ref()),
					&base_um.allow_username_change,
					policy,
				),
			},
		}
	}
}


// vim: ts=4
