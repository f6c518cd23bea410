//! Declarative dump settings
//!
//! [`DumpSettings`] is the serializable counterpart of [`DumpOptions`]: it can
//! be read from JSON or TOML and turned into options. Custom key transformers
//! cannot be expressed in a file, so only the stock [`KeyCase`]s are offered.
//!
//! ```toml
//! strip_nulls = true
//! key_case = "camel"
//! use_enum_name = false
//!
//! [extra]
//! locale = "en"
//! ```

use crate::case::KeyCase;
use crate::error::{DumpError, DumpResult};
use crate::options::DumpOptions;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Settings that build a [`DumpOptions`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DumpSettings {
	/// Drop mapping entries whose serialized value is null.
	pub strip_nulls: bool,
	/// Casing applied to every mapping key.
	pub key_case: Option<KeyCase>,
	/// Serialize enum members by name; unset keeps the default (`true`).
	pub use_enum_name: Option<bool>,
	/// Depth limit; unset means unbounded.
	pub max_depth: Option<usize>,
	/// Extension options passed through to every serializer.
	pub extra: Map<String, Value>,
}

impl DumpSettings {
	/// Parse settings from JSON text.
	///
	/// # Examples
	///
	/// ```
	/// use typedump_core::settings::DumpSettings;
	///
	/// let settings = DumpSettings::from_json_str(r#"{"strip_nulls": true, "key_case": "snake"}"#).unwrap();
	/// let options = settings.into_options();
	/// assert!(options.strips_nulls());
	/// assert_eq!(options.transform_key("userId"), "user_id");
	/// ```
	pub fn from_json_str(text: &str) -> DumpResult<Self> {
		serde_json::from_str(text).map_err(|error| DumpError::Settings(error.to_string()))
	}

	/// Parse settings from TOML text.
	pub fn from_toml_str(text: &str) -> DumpResult<Self> {
		toml::from_str(text).map_err(|error| DumpError::Settings(error.to_string()))
	}

	/// Read settings from a `.json` or `.toml` file, chosen by extension.
	pub fn from_path(path: impl AsRef<Path>) -> DumpResult<Self> {
		let path = path.as_ref();
		let parse: fn(&str) -> DumpResult<Self> =
			match path.extension().and_then(|extension| extension.to_str()) {
				Some("json") => Self::from_json_str,
				Some("toml") => Self::from_toml_str,
				_ => {
					return Err(DumpError::Settings(format!(
						"unsupported settings file {}, expected .json or .toml",
						path.display()
					)));
				}
			};
		let text = std::fs::read_to_string(path).map_err(|error| {
			DumpError::Settings(format!("cannot read {}: {error}", path.display()))
		})?;
		parse(&text)
	}

	/// Build the options these settings describe.
	pub fn into_options(self) -> DumpOptions {
		let mut options = DumpOptions::new().strip_nulls(self.strip_nulls);
		for (key, value) in self.extra {
			options = options.extra(key, value);
		}
		if let Some(case) = self.key_case {
			options = options.key_case(case);
		}
		if let Some(use_enum_name) = self.use_enum_name {
			options = options.use_enum_name(use_enum_name);
		}
		if let Some(max_depth) = self.max_depth {
			options = options.max_depth(max_depth);
		}
		options
	}
}

impl From<DumpSettings> for DumpOptions {
	fn from(settings: DumpSettings) -> Self {
		settings.into_options()
	}
}
