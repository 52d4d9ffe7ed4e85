//! In-memory settings document with an explicit lifecycle
//!
//! A store starts from the static defaults, is overlaid with the user's stored
//! preference, then with tenant defaults from the backend, and is finally
//! mutated by explicit update calls.

use parking_lot::RwLock;

use crate::merge::MergePolicy;
use crate::types::{PartialSettings, SettingsDocument};

pub struct SettingsStore {
	defaults: SettingsDocument,
	policy: MergePolicy,
	current: RwLock<SettingsDocument>,
}

impl SettingsStore {
	pub fn new(defaults: SettingsDocument, policy: MergePolicy) -> Self {
		let current = RwLock::new(defaults.clone());
		Self { defaults, policy, current }
	}

	/// Overlay the persisted user preference
	pub fn load(&self, stored: Option<&PartialSettings>) -> SettingsDocument {
		self.overlay(stored)
	}

	/// Overlay tenant defaults provided by the backend
	pub fn apply_server_defaults(&self, server: Option<&PartialSettings>) -> SettingsDocument {
		self.overlay(server)
	}

	/// Apply an explicit update and return the resulting document
	pub fn update(&self, partial: &PartialSettings) -> SettingsDocument {
		self.overlay(Some(partial))
	}

	/// Drop every overlay and go back to the static defaults
	pub fn reset(&self) -> SettingsDocument {
		let mut current = self.current.write();
		*current = self.defaults.clone();
		current.clone()
	}

	pub fn snapshot(&self) -> SettingsDocument {
		self.current.read().clone()
	}

	pub fn defaults(&self) -> &SettingsDocument {
		&self.defaults
	}

	fn overlay(&self, partial: Option<&PartialSettings>) -> SettingsDocument {
		let mut current = self.current.write();
		*current = current.merge_with(partial, self.policy);
		current.clone()
	}
}


// vim: ts=4
