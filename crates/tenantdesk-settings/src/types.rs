//! Console settings document
//!
//! The settings document controls UI presentation (theme, layout, locale).
//! `SettingsDocument` is always complete; `PartialSettings` is what arrives
//! from a cookie, an API response or a local cache and may omit anything.

use serde::{Deserialize, Serialize};

use crate::merge::{Blank, MergePolicy, lenient, pick};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
	Light,
	Dark,
	System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skin {
	Default,
	Bordered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
	Vertical,
	Collapsed,
	Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	Ltr,
	Rtl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentWidth {
	Compact,
	Wide,
}

/// Positioning of the navbar and footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarType {
	Fixed,
	Static,
	Hidden,
}

impl Blank for ThemeMode {}
impl Blank for Skin {}
impl Blank for Layout {}
impl Blank for Direction {}
impl Blank for ContentWidth {}
impl Blank for BarType {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
	pub locale: Box<str>,
	pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navbar {
	#[serde(rename = "type")]
	pub bar_type: BarType,
	pub content_width: ContentWidth,
	pub blur: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
	#[serde(rename = "type")]
	pub bar_type: BarType,
	pub content_width: ContentWidth,
	pub detached: bool,
}

/// Complete settings document, every field populated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDocument {
	pub mode: ThemeMode,
	pub skin: Skin,
	pub semi_dark: bool,
	pub layout: Layout,
	pub language: Language,
	pub color_scheme: Box<str>,
	pub navbar: Navbar,
	pub content_width: ContentWidth,
	pub footer: Footer,
}

impl Default for SettingsDocument {
	fn default() -> Self {
		SettingsDocument {
			mode: ThemeMode::System,
			skin: Skin::Default,
			semi_dark: false,
			layout: Layout::Vertical,
			language: Language { locale: "en".into(), direction: Direction::Ltr },
			color_scheme: "#7367F0".into(),
			navbar: Navbar {
				bar_type: BarType::Fixed,
				content_width: ContentWidth::Compact,
				blur: true,
			},
			content_width: ContentWidth::Compact,
			footer: Footer {
				bar_type: BarType::Static,
				content_width: ContentWidth::Compact,
				detached: true,
			},
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialLanguage {
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub locale: Option<Box<str>>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub direction: Option<Direction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialNavbar {
	#[serde(
		rename = "type",
		default,
		deserialize_with = "lenient",
		skip_serializing_if = "Option::is_none"
	)]
	pub bar_type: Option<BarType>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub content_width: Option<ContentWidth>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub blur: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialFooter {
	#[serde(
		rename = "type",
		default,
		deserialize_with = "lenient",
		skip_serializing_if = "Option::is_none"
	)]
	pub bar_type: Option<BarType>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub content_width: Option<ContentWidth>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub detached: Option<bool>,
}

/// Settings payload with any subset of fields. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSettings {
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub mode: Option<ThemeMode>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub skin: Option<Skin>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub semi_dark: Option<bool>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub layout: Option<Layout>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub language: Option<PartialLanguage>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub color_scheme: Option<Box<str>>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub navbar: Option<PartialNavbar>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub content_width: Option<ContentWidth>,
	#[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
	pub footer: Option<PartialFooter>,
}

impl From<&SettingsDocument> for PartialSettings {
	fn from(doc: &SettingsDocument) -> Self {
		PartialSettings {
			mode: Some(doc.mode),
			skin: Some(doc.skin),
			semi_dark: Some(doc.semi_dark),
			layout: Some(doc.layout),
			language: Some(PartialLanguage {
				locale: Some(doc.language.locale.clone()),
				direction: Some(doc.language.direction),
			}),
			color_scheme: Some(doc.color_scheme.clone()),
			navbar: Some(PartialNavbar {
				bar_type: Some(doc.navbar.bar_type),
				content_width: Some(doc.navbar.content_width),
				blur: Some(doc.navbar.blur),
			}),
			content_width: Some(doc.content_width),
			footer: Some(PartialFooter {
				bar_type: Some(doc.footer.bar_type),
				content_width: Some(doc.footer.content_width),
				detached: Some(doc.footer.detached),
			}),
		}
	}
}

impl SettingsDocument {
	/// Merge `partial` over this document using presence semantics
	pub fn merge(&self, partial: Option<&PartialSettings>) -> SettingsDocument {
		self.merge_with(partial, MergePolicy::Presence)
	}

	/// Merge `partial` over this document, field by field
	pub fn merge_with(&self, partial: Option<&PartialSettings>, policy: MergePolicy) -> Self {
		let Some(partial) = partial else {
			return self.clone();
		};

		let language = partial.language.as_ref();
		let navbar = partial.navbar.as_ref();
		let footer = partial.footer.as_ref();

		SettingsDocument {
			mode: pick(partial.mode.as_ref(), &self.mode, policy),
			skin: pick(partial.skin.as_ref(), &self.skin, policy),
			semi_dark: pick(partial.semi_dark.as_ref(), &self.semi_dark, policy),
			layout: pick(partial.layout.as_ref(), &self.layout, policy),
			language: Language {
				locale: pick(
					language.and_then(|l| l.locale.as_ref()),
					&self.language.locale,
					policy,
				),
				direction: pick(
					language.and_then(|l| l.direction.as_ref()),
					&self.language.direction,
					policy,
				),
			},
			color_scheme: pick(partial.color_scheme.as_ref(), &self.color_scheme, policy),
			navbar: Navbar {
				bar_type: pick(navbar.and_then(|n| n.bar_type.as_ref()), &self.navbar.bar_type, policy),
				content_width: pick(
					navbar.and_then(|n| n.content_width.as_ref()),
					&self.navbar.content_width,
					policy,
				),
				blur: pick(navbar.and_then(|n| n.blur.as_ref()), &self.navbar.blur, policy),
			},
			content_width: pick(partial.content_width.as_ref(), &self.content_width, policy),
			footer: Footer {
				bar_type: pick(footer.and_then(|f| f.bar_type.as_ref()), &self.footer.bar_type, policy),
				content_width: pick(
					footer.and_then(|f| f.content_width.as_ref()),
					&self.footer.content_width,
					policy,
				),
				detached: pick(footer.and_then(|f| f.detached.as_ref()), &self.footer.detached, policy),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn partial(value: serde_json::Value) -> PartialSettings {
		serde_json::from_value(value).unwrap()
	}

	#[test]
	fn test_merge_none_is_identity() {
		let defaults = SettingsDocument::default();
		assert_eq!(defaults.merge(None), defaults);
	}

	#[test]
	fn test_merge_empty_partial_is_identity() {
		let defaults = SettingsDocument::default();
		assert_eq!(defaults.merge(Some(&PartialSettings::default())), defaults);
	}

	#[test]
	fn test_merge_overrides_top_level_and_nested() {
		let defaults = SettingsDocument::default();
		let merged = defaults.merge(Some(&partial(json!({
			"mode": "dark",
			"language": { "locale": "ar", "direction": "rtl" },
			"navbar": { "blur": false },
		}))));

		assert_eq!(merged.mode, ThemeMode::Dark);
		assert_eq!(&*merged.language.locale, "ar");
		assert_eq!(merged.language.direction, Direction::Rtl);
		assert!(!merged.navbar.blur);
		// untouched siblings keep their defaults
		assert_eq!(merged.navbar.bar_type, defaults.navbar.bar_type);
		assert_eq!(merged.footer, defaults.footer);
	}

	#[test]
	fn test_partial_nested_group_keeps_missing_siblings() {
		let defaults = SettingsDocument::default();
		let merged = defaults.merge(Some(&partial(json!({ "language": { "locale": "fr" } }))));
		assert_eq!(&*merged.language.locale, "fr");
		assert_eq!(merged.language.direction, Direction::Ltr);
	}

	#[test]
	fn test_unknown_and_malformed_fields_are_ignored() {
		let defaults = SettingsDocument::default();
		let p = partial(json!({
			"mode": "neon",
			"skin": 42,
			"layout": "horizontal",
			"somethingElse": { "deep": true },
		}));
		assert_eq!(p.mode, None);
		assert_eq!(p.skin, None);

		let merged = defaults.merge(Some(&p));
		assert_eq!(merged.mode, defaults.mode);
		assert_eq!(merged.skin, defaults.skin);
		assert_eq!(merged.layout, Layout::Horizontal);
	}

	#[test]
	fn test_null_fields_are_absent() {
		let p = partial(json!({ "mode": null, "language": null }));
		assert_eq!(p, PartialSettings::default());
	}

	#[test]
	fn test_presence_keeps_explicit_false_and_empty() {
		let defaults = SettingsDocument::default();
		let merged = defaults.merge(Some(&partial(json!({
			"footer": { "detached": false },
			"colorScheme": "",
		}))));
		assert!(!merged.footer.detached);
		assert_eq!(&*merged.color_scheme, "");
	}

	#[test]
	fn test_truthy_policy_falls_back_on_falsy() {
		let defaults = SettingsDocument::default();
		let merged = defaults.merge_with(
			Some(&partial(json!({
				"footer": { "detached": false },
				"colorScheme": "",
				"semiDark": true,
			}))),
			MergePolicy::Truthy,
		);
		assert!(merged.footer.detached);
		assert_eq!(merged.color_scheme, defaults.color_scheme);
		assert!(merged.semi_dark);
	}

	#[test]
	fn test_merge_is_idempotent() {
		let defaults = SettingsDocument::default();
		let inputs = [
			partial(json!({})),
			partial(json!({ "mode": "light", "semiDark": true })),
			partial(json!({ "footer": { "type": "hidden", "detached": false } })),
			partial(json!({ "language": { "direction": "rtl" }, "colorScheme": "" })),
		];
		for policy in [MergePolicy::Presence, MergePolicy::Truthy] {
			for input in &inputs {
				let once = defaults.merge_with(Some(input), policy);
				let twice = defaults.merge_with(Some(&PartialSettings::from(&once)), policy);
				assert_eq!(once, twice, "policy {:?}, input {:?}", policy, input);
			}
		}
	}

	#[test]
	fn test_serialized_document_has_every_field() {
		let json = serde_json::to_value(SettingsDocument::default()).unwrap();
		for key in [
			"mode",
			"skin",
			"semiDark",
			"layout",
			"language",
			"colorScheme",
			"navbar",
			"contentWidth",
			"footer",
		] {
			assert!(!json[key].is_null(), "missing {}", key);
		}
		assert_eq!(json["navbar"]["type"], "fixed");
		assert_eq!(json["language"]["direction"], "ltr");
	}
}

// vim: ts=4
