//! The introspection capability a value exposes to the dispatcher
//!
//! Rust has no runtime reflection, so every serializable type implements
//! [`Dump`] (by hand, through the blanket impls in this module, or with
//! `#[derive(Dump)]`). The trait reports the value's exact type, its declared
//! ancestors, its structural [`Category`], and a borrowed [`Shape`] that the
//! default serializers walk.

mod chrono_impls;
mod impls;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;
use std::any::{Any, TypeId};
use std::borrow::Cow;

pub use impls::DumpKey;

/// Elements of a sequence, borrowed from the value being dumped.
pub type Elements<'a> = Box<dyn Iterator<Item = &'a dyn Dump> + 'a>;

/// Entries of a mapping (or fields of an object), in iteration order.
pub type Entries<'a> = Box<dyn Iterator<Item = (Cow<'a, str>, &'a dyn Dump)> + 'a>;

/// Structural categories used when no exact or ancestor serializer is registered
///
/// The declaration order is the resolution priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
	/// Enumeration members
	Enumeration,
	/// Date-time values
	DateTime,
	/// Key-value mappings
	Mapping,
	/// Ordered sequences and other iterables (never text)
	Sequence,
	/// Null, booleans, numbers and text
	Primitive,
}

impl Category {
	/// All categories in the order resolution tests them.
	pub const PRIORITY: [Category; 5] = [
		Category::Enumeration,
		Category::DateTime,
		Category::Mapping,
		Category::Sequence,
		Category::Primitive,
	];

	/// Lowercase name, used in diagnostics
	pub fn as_str(&self) -> &'static str {
		match self {
			Category::Enumeration => "enumeration",
			Category::DateTime => "datetime",
			Category::Mapping => "mapping",
			Category::Sequence => "sequence",
			Category::Primitive => "primitive",
		}
	}
}

impl std::fmt::Display for Category {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single enumeration member: its symbolic name and underlying value.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
	/// Symbolic name, emitted when `use_enum_name` is on.
	pub name: &'static str,
	/// Underlying value, emitted as a string when `use_enum_name` is off.
	pub value: Value,
}

impl EnumMember {
	/// Creates a member from its name and anything convertible to a JSON value.
	pub fn new(name: &'static str, value: impl Into<Value>) -> Self {
		Self {
			name,
			value: value.into(),
		}
	}

	/// String form of the member value
	///
	/// Text values are returned as-is; every other value uses its JSON text.
	pub fn value_string(&self) -> String {
		match &self.value {
			Value::String(s) => s.clone(),
			other => other.to_string(),
		}
	}
}

/// Borrowed structural view of a value
pub enum Shape<'a> {
	/// A scalar that serializes to itself (null, bool, number, string)
	Primitive(Value),
	/// An ordered collection
	Sequence(Elements<'a>),
	/// A key-value collection
	Mapping(Entries<'a>),
	/// A member of an enumeration
	Enumeration(EnumMember),
	/// A point in time with a known (or assumed UTC) offset
	DateTime(DateTime<FixedOffset>),
	/// An arbitrary object, described by its named fields
	Object(Entries<'a>),
}

impl Shape<'_> {
	/// The structural category of this shape, `None` for plain objects.
	pub fn category(&self) -> Option<Category> {
		match self {
			Shape::Primitive(_) => Some(Category::Primitive),
			Shape::Sequence(_) => Some(Category::Sequence),
			Shape::Mapping(_) => Some(Category::Mapping),
			Shape::Enumeration(_) => Some(Category::Enumeration),
			Shape::DateTime(_) => Some(Category::DateTime),
			Shape::Object(_) => None,
		}
	}
}

impl std::fmt::Debug for Shape<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Shape::Primitive(value) => f.debug_tuple("Primitive").field(value).finish(),
			Shape::Sequence(_) => f.write_str("Sequence(..)"),
			Shape::Mapping(_) => f.write_str("Mapping(..)"),
			Shape::Enumeration(member) => f.debug_tuple("Enumeration").field(member).finish(),
			Shape::DateTime(dt) => f.debug_tuple("DateTime").field(dt).finish(),
			Shape::Object(_) => f.write_str("Object(..)"),
		}
	}
}

/// A value the dispatcher can serialize
///
/// Only [`shape`](Dump::shape) is required. Types that are declared
/// subtypes of other registered types override [`ancestors`](Dump::ancestors);
/// transparent wrappers override [`delegate`](Dump::delegate).
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use typedump_core::{Dump, Shape};
///
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl Dump for Point {
///     fn shape(&self) -> Shape<'_> {
///         Shape::Object(Box::new(
///             [
///                 (Cow::Borrowed("x"), &self.x as &dyn Dump),
///                 (Cow::Borrowed("y"), &self.y as &dyn Dump),
///             ]
///             .into_iter(),
///         ))
///     }
/// }
///
/// let dumped = typedump_core::Registry::default()
///     .dump(&Point { x: 1, y: 2 }, &Default::default())
///     .unwrap();
/// assert_eq!(dumped, serde_json::json!({"x": 1, "y": 2}));
/// ```
pub trait Dump: Any {
	/// Structural view used by the default serializers.
	fn shape(&self) -> Shape<'_>;

	/// Structural category, consulted during resolution.
	///
	/// Override when computing the full shape is expensive.
	fn category(&self) -> Option<Category> {
		self.shape().category()
	}

	/// Declared supertypes, most specific first.
	///
	/// Resolution walks this list as given, so it must hold the full chain
	/// (ancestors of ancestors included), not only the direct parents.
	fn ancestors(&self) -> Vec<TypeId> {
		Vec::new()
	}

	/// Full ancestor chain of the type, readable without a value.
	///
	/// `#[derive(Dump)]` with `extends(..)` builds its chain from the parents'
	/// chains through this method and returns it from
	/// [`ancestors`](Dump::ancestors). Hand-written impls that are extended
	/// by derived types override both.
	fn declared_ancestors() -> Vec<TypeId>
	where
		Self: Sized,
	{
		Vec::new()
	}

	/// Inner value this one stands in for, if it is a transparent wrapper.
	fn delegate(&self) -> Option<&dyn Dump> {
		None
	}

	/// Name of the concrete type, for diagnostics.
	fn type_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}
}

/// Linearizes an ancestor chain from direct parents and their own chains.
///
/// Each parent comes before its chain; a type reached twice keeps its first
/// position.
pub fn ancestor_chain(parents: impl IntoIterator<Item = (TypeId, Vec<TypeId>)>) -> Vec<TypeId> {
	let mut chain = Vec::new();
	for (parent, inherited) in parents {
		for id in std::iter::once(parent).chain(inherited) {
			if !chain.contains(&id) {
				chain.push(id);
			}
		}
	}
	chain
}

impl dyn Dump {
	/// `TypeId` of the concrete type behind this trait object.
	pub fn runtime_type_id(&self) -> TypeId {
		let any: &dyn Any = self;
		Any::type_id(any)
	}

	/// Returns `true` if the concrete type is `T`.
	pub fn is<T: Dump>(&self) -> bool {
		let any: &dyn Any = self;
		any.is::<T>()
	}

	/// Downcasts to the concrete type, as serializers registered for a
	/// specific type usually need.
	pub fn downcast_ref<T: Dump>(&self) -> Option<&T> {
		let any: &dyn Any = self;
		any.downcast_ref::<T>()
	}
}

impl<'a> std::fmt::Debug for dyn Dump + 'a {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Dump")
			.field("type", &self.type_name())
			.finish_non_exhaustive()
	}
}
