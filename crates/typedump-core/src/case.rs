//! Stock key transformers
//!
//! Each function is a stateless `&str -> String` conversion suitable for
//! [`DumpOptions::key_transformer`](crate::DumpOptions::key_transformer).

use crate::options::KeyTransformer;
use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// `firstName` → `first_name`
pub fn snake_case(key: &str) -> String {
	key.to_case(Case::Snake)
}

/// `first_name` → `firstName`
pub fn camel_case(key: &str) -> String {
	key.to_case(Case::Camel)
}

/// `first_name` → `FirstName`
pub fn pascal_case(key: &str) -> String {
	key.to_case(Case::Pascal)
}

/// `firstName` → `first-name`
pub fn lisp_case(key: &str) -> String {
	key.to_case(Case::Kebab)
}

/// Named key casing, as accepted in settings files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyCase {
	/// snake_case
	Snake,
	/// camelCase
	Camel,
	/// PascalCase
	Pascal,
	/// lisp-case
	#[serde(alias = "kebab")]
	Lisp,
}

impl KeyCase {
	/// Convert a key to this casing.
	///
	/// # Examples
	///
	/// ```
	/// use typedump_core::case::KeyCase;
	///
	/// assert_eq!(KeyCase::Snake.apply("firstName"), "first_name");
	/// assert_eq!(KeyCase::Camel.apply("first_name"), "firstName");
	/// assert_eq!(KeyCase::Pascal.apply("first_name"), "FirstName");
	/// assert_eq!(KeyCase::Lisp.apply("firstName"), "first-name");
	/// ```
	pub fn apply(&self, key: &str) -> String {
		match self {
			KeyCase::Snake => snake_case(key),
			KeyCase::Camel => camel_case(key),
			KeyCase::Pascal => pascal_case(key),
			KeyCase::Lisp => lisp_case(key),
		}
	}

	/// The conversion as a shareable key transformer
	pub fn transformer(self) -> KeyTransformer {
		match self {
			KeyCase::Snake => Arc::new(snake_case),
			KeyCase::Camel => Arc::new(camel_case),
			KeyCase::Pascal => Arc::new(pascal_case),
			KeyCase::Lisp => Arc::new(lisp_case),
		}
	}
}
