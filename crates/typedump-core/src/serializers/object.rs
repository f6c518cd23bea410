use super::mapping::serialize_entries;
use crate::dispatcher::Dispatcher;
use crate::dump::{Dump, Shape};
use crate::error::{DumpError, DumpResult};
use crate::registry::Serializer;
use serde_json::Value;

/// Generic-object fallback
///
/// Serializes a value's fields exactly as the mapping serializer would
/// serialize a mapping of field name to field value, with the same options.
/// Mappings are accepted too; every other shape is a [`DumpError::NotAnObject`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectSerializer;

impl Serializer for ObjectSerializer {
	fn serialize(&self, value: &dyn Dump, dispatcher: &Dispatcher<'_>) -> DumpResult<Value> {
		match value.shape() {
			Shape::Object(fields) | Shape::Mapping(fields) => serialize_entries(fields, dispatcher),
			_ => Err(DumpError::NotAnObject {
				type_name: value.type_name(),
			}),
		}
	}
}
