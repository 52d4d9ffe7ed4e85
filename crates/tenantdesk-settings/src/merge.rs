//! Field-level merge primitives
//!
//! Documents are merged explicitly, field by field, over a fixed set of known
//! fields. The helpers here decide, for a single field, whether the partial
//! value or the base value wins.

use serde::{Deserialize, Deserializer};

/// How an explicitly supplied partial value competes with the base value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergePolicy {
	/// A field supplied in the partial always wins, including `false`, `0` and `""`
	#[default]
	Presence,
	/// Legacy logical-OR merge: blank values (`false`, `0`, `""`) fall back to
	/// the base value as if they were absent
	Truthy,
}

impl std::str::FromStr for MergePolicy {
	type Err = tenantdesk_types::error::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"presence" => Ok(MergePolicy::Presence),
			"truthy" => Ok(MergePolicy::Truthy),
			other => Err(tenantdesk_types::error::Error::ConfigError(format!(
				"unknown merge policy: {}",
				other
			))),
		}
	}
}

/// Values that count as "absent" under [`MergePolicy::Truthy`]
pub trait Blank {
	fn is_blank(&self) -> bool {
		false
	}
}

impl Blank for bool {
	fn is_blank(&self) -> bool {
		!*self
	}
}

impl Blank for u32 {
	fn is_blank(&self) -> bool {
		*self == 0
	}
}

impl Blank for Box<str> {
	fn is_blank(&self) -> bool {
		self.is_empty()
	}
}

// An empty list is still a value
impl<T> Blank for Vec<T> {}

/// Pick the partial value if it counts under `policy`, the base value otherwise
pub fn pick<T: Clone + Blank>(partial: Option<&T>, base: &T, policy: MergePolicy) -> T {
	match (partial, policy) {
		(Some(value), MergePolicy::Presence) => value.clone(),
		(Some(value), MergePolicy::Truthy) if !value.is_blank() => value.clone(),
		_ => base.clone(),
	}
}

/// Deserialize an optional field, turning a malformed value into `None`
///
/// A single bad field must not discard the rest of a settings payload.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
	D: Deserializer<'de>,
	T: serde::de::DeserializeOwned,
{
	let value = serde_json::Value::deserialize(deserializer)?;
	if value.is_null() {
		return Ok(None);
	}
	match T::deserialize(value) {
		Ok(parsed) => Ok(Some(parsed)),
		Err(err) => {
			tracing::debug!("Ignoring malformed settings field: {}", err);
			Ok(None)
		}
	}
}


// vim: ts=4
