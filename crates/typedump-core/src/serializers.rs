//! Default serializer set
//!
//! One serializer per structural category plus the generic-object fallback.
//! [`Registry::default`](crate::Registry) installs all of them; each is a
//! zero-sized [`Serializer`](crate::Serializer) that may also be registered
//! for specific types.

pub mod datetime;
pub mod enumeration;
pub mod mapping;
pub mod object;
pub mod primitive;
pub mod sequence;

pub use datetime::{DateTimeSerializer, format_rfc3339};
pub use enumeration::EnumSerializer;
pub use mapping::{MappingSerializer, serialize_entries};
pub use object::ObjectSerializer;
pub use primitive::PrimitiveSerializer;
pub use sequence::SequenceSerializer;

use crate::dump::Shape;
use crate::error::DumpError;

/// Error for a serializer handed a value of the wrong shape.
pub(crate) fn unexpected_shape(expected: &str, shape: &Shape<'_>) -> DumpError {
	let found = shape.category().map_or("object", |category| category.as_str());
	DumpError::custom(format!("expected {expected}, found {found}"))
}
