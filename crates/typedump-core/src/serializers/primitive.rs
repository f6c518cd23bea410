use crate::dispatcher::Dispatcher;
use crate::dump::{Dump, Shape};
use crate::error::DumpResult;
use crate::registry::Serializer;
use serde_json::Value;

/// Identity serializer for null, booleans, numbers and text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimitiveSerializer;

impl Serializer for PrimitiveSerializer {
	fn serialize(&self, value: &dyn Dump, _dispatcher: &Dispatcher<'_>) -> DumpResult<Value> {
		match value.shape() {
			Shape::Primitive(scalar) => Ok(scalar),
			shape => Err(super::unexpected_shape("a primitive", &shape)),
		}
	}
}
