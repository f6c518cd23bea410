//! Options threaded through every recursive dispatch
//!
//! A [`DumpOptions`] is built once per top-level call and only ever lent out
//! by shared reference, so no serializer can alter what its descendants see.

use crate::case::KeyCase;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Key renaming function applied to mapping keys.
pub type KeyTransformer = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Extra option consulted by the enum serializer.
pub const USE_ENUM_NAME: &str = "use_enum_name";

/// Configuration for one dump call
///
/// # Examples
///
/// ```
/// use typedump_core::{DumpOptions, case::KeyCase};
///
/// let options = DumpOptions::new()
///     .strip_nulls(true)
///     .key_case(KeyCase::Snake)
///     .use_enum_name(false);
///
/// assert!(options.strips_nulls());
/// assert_eq!(options.transform_key("firstName"), "first_name");
/// assert!(!options.uses_enum_name());
/// ```
#[derive(Clone, Default)]
pub struct DumpOptions {
	strip_nulls: bool,
	key_transformer: Option<KeyTransformer>,
	extra: Map<String, Value>,
	max_depth: Option<usize>,
}

impl DumpOptions {
	/// Options with every default: keep nulls, keep keys, enum names on.
	pub fn new() -> Self {
		Self::default()
	}

	/// Drop mapping entries whose serialized value is null.
	pub fn strip_nulls(mut self, strip_nulls: bool) -> Self {
		self.strip_nulls = strip_nulls;
		self
	}

	/// Rename every mapping key with `transformer`.
	pub fn key_transformer<F>(mut self, transformer: F) -> Self
	where
		F: Fn(&str) -> String + Send + Sync + 'static,
	{
		self.key_transformer = Some(Arc::new(transformer));
		self
	}

	/// Rename every mapping key with an already shared transformer.
	pub fn shared_key_transformer(mut self, transformer: KeyTransformer) -> Self {
		self.key_transformer = Some(transformer);
		self
	}

	/// Rename every mapping key to one of the stock casings.
	pub fn key_case(mut self, case: KeyCase) -> Self {
		self.key_transformer = Some(case.transformer());
		self
	}

	/// Serialize enum members by name (`true`, the default) or by value.
	pub fn use_enum_name(self, use_enum_name: bool) -> Self {
		self.extra(USE_ENUM_NAME, use_enum_name)
	}

	/// Set an extension option, passed through untouched to every serializer.
	pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.extra.insert(key.into(), value.into());
		self
	}

	/// Fail instead of descending more than `max_depth` levels.
	pub fn max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = Some(max_depth);
		self
	}

	pub fn strips_nulls(&self) -> bool {
		self.strip_nulls
	}

	pub fn transformer(&self) -> Option<&KeyTransformer> {
		self.key_transformer.as_ref()
	}

	/// Apply the key transformer, or return the key unchanged.
	pub fn transform_key(&self, key: &str) -> String {
		match &self.key_transformer {
			Some(transformer) => transformer(key),
			None => key.to_owned(),
		}
	}

	pub fn extras(&self) -> &Map<String, Value> {
		&self.extra
	}

	pub fn get_extra(&self, key: &str) -> Option<&Value> {
		self.extra.get(key)
	}

	/// Boolean extension option, `None` if absent or not a boolean.
	pub fn extra_bool(&self, key: &str) -> Option<bool> {
		self.extra.get(key).and_then(Value::as_bool)
	}

	/// Whether enum members serialize by name. Defaults to `true`.
	pub fn uses_enum_name(&self) -> bool {
		self.extra_bool(USE_ENUM_NAME).unwrap_or(true)
	}

	pub fn depth_limit(&self) -> Option<usize> {
		self.max_depth
	}
}

impl std::fmt::Debug for DumpOptions {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DumpOptions")
			.field("strip_nulls", &self.strip_nulls)
			.field("key_transformer", &self.key_transformer.is_some())
			.field("extra", &self.extra)
			.field("max_depth", &self.max_depth)
			.finish()
	}
}
