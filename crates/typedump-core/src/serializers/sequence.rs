use crate::dispatcher::Dispatcher;
use crate::dump::{Dump, Shape};
use crate::error::DumpResult;
use crate::registry::Serializer;
use serde_json::Value;

/// Serializes lists, tuples, sets and other iterables element by element
///
/// Order and length are preserved; null elements are kept whatever
/// `strip_nulls` says.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceSerializer;

impl Serializer for SequenceSerializer {
	fn serialize(&self, value: &dyn Dump, dispatcher: &Dispatcher<'_>) -> DumpResult<Value> {
		match value.shape() {
			Shape::Sequence(elements) => elements
				.map(|element| dispatcher.dispatch(element))
				.collect::<DumpResult<Vec<_>>>()
				.map(Value::Array),
			shape => Err(super::unexpected_shape("a sequence", &shape)),
		}
	}
}
