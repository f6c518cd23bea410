use crate::dispatcher::Dispatcher;
use crate::dump::{Dump, Entries, Shape};
use crate::error::DumpResult;
use crate::registry::Serializer;
use serde_json::{Map, Value};

/// Serializes key-value collections, honouring `strip_nulls` and the key
/// transformer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MappingSerializer;

impl Serializer for MappingSerializer {
	fn serialize(&self, value: &dyn Dump, dispatcher: &Dispatcher<'_>) -> DumpResult<Value> {
		match value.shape() {
			Shape::Mapping(entries) => serialize_entries(entries, dispatcher),
			shape => Err(super::unexpected_shape("a mapping", &shape)),
		}
	}
}

/// Serialize `entries` into a JSON object, in iteration order.
///
/// Each value is dispatched first. When the dispatcher's options strip nulls
/// and the result is null, the entry is dropped; otherwise its key goes
/// through the key transformer. Two keys that transform to the same name
/// collapse into one entry holding the later value.
pub fn serialize_entries(entries: Entries<'_>, dispatcher: &Dispatcher<'_>) -> DumpResult<Value> {
	let options = dispatcher.options();
	let mut map = Map::new();
	for (key, value) in entries {
		let serialized = dispatcher.dispatch(value)?;
		if serialized.is_null() && options.strips_nulls() {
			continue;
		}
		map.insert(options.transform_key(&key), serialized);
	}
	Ok(Value::Object(map))
}
