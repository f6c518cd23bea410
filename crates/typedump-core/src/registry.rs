//! Type registry and serializer resolution
//!
//! A [`Registry`] maps [`TypeKey`]s to serializers. Resolution is total:
//!
//! 1. the value's exact runtime type,
//! 2. each declared ancestor, most specific first,
//! 3. the value's structural [`Category`], if a serializer is registered for it,
//! 4. the generic-object fallback.

use crate::dispatcher::Dispatcher;
use crate::dump::{Category, Dump};
use crate::error::DumpResult;
use crate::options::DumpOptions;
use crate::serializers::{
	DateTimeSerializer, EnumSerializer, MappingSerializer, ObjectSerializer, PrimitiveSerializer,
	SequenceSerializer,
};
use serde_json::Value;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

/// Converts one value into its interchange representation
///
/// Implemented for every closure with the matching signature, so ad-hoc
/// serializers can be registered with [`Registry::register_fn`].
pub trait Serializer: Send + Sync {
	fn serialize(&self, value: &dyn Dump, dispatcher: &Dispatcher<'_>) -> DumpResult<Value>;
}

impl<F> Serializer for F
where
	F: Fn(&dyn Dump, &Dispatcher<'_>) -> DumpResult<Value> + Send + Sync,
{
	fn serialize(&self, value: &dyn Dump, dispatcher: &Dispatcher<'_>) -> DumpResult<Value> {
		self(value, dispatcher)
	}
}

/// Registry key: an exact type or a structural category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKey {
	Type(TypeId),
	Category(Category),
}

impl TypeKey {
	/// Key for the exact type `T`.
	pub fn of<T: ?Sized + 'static>() -> Self {
		TypeKey::Type(TypeId::of::<T>())
	}
}

impl From<Category> for TypeKey {
	fn from(category: Category) -> Self {
		TypeKey::Category(category)
	}
}

/// How a serializer was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	/// Registered for the value's own type
	Exact,
	/// Registered for the given declared ancestor
	Ancestor(TypeId),
	/// Registered for the value's structural category
	Category(Category),
	/// Nothing matched; the generic-object serializer
	Fallback,
}

/// Outcome of [`Registry::resolve`]
#[derive(Clone)]
pub struct Resolved<'r> {
	pub serializer: &'r Arc<dyn Serializer>,
	pub resolution: Resolution,
}

impl std::fmt::Debug for Resolved<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Resolved")
			.field("resolution", &self.resolution)
			.finish_non_exhaustive()
	}
}

/// Serializers keyed by type and category
///
/// Cloning is cheap: serializers are shared.
///
/// # Examples
///
/// ```
/// use typedump_core::{DumpOptions, Registry, TypeKey};
/// use serde_json::{Value, json};
///
/// struct Celsius(f64);
///
/// impl typedump_core::Dump for Celsius {
///     fn shape(&self) -> typedump_core::Shape<'_> {
///         typedump_core::Shape::Primitive(json!(self.0))
///     }
/// }
///
/// let mut registry = Registry::default();
/// registry.register_fn(TypeKey::of::<Celsius>(), |value, _| {
///     let celsius = value.downcast_ref::<Celsius>().unwrap();
///     Ok(Value::String(format!("{}°C", celsius.0)))
/// });
///
/// let dumped = registry.dump(&vec![Celsius(21.5)], &DumpOptions::new()).unwrap();
/// assert_eq!(dumped, json!(["21.5°C"]));
/// ```
#[derive(Clone)]
pub struct Registry {
	serializers: HashMap<TypeKey, Arc<dyn Serializer>>,
	fallback: Arc<dyn Serializer>,
}

impl Registry {
	/// A registry holding only the generic-object fallback.
	pub fn empty() -> Self {
		Self {
			serializers: HashMap::new(),
			fallback: Arc::new(ObjectSerializer),
		}
	}

	/// Insert or replace the serializer for `key`. Last registration wins.
	///
	/// Transparent wrappers are resolved through the value they hold: a key
	/// for `Box<T>`, `Rc<T>`, `Arc<T>` or a boxed `dyn Dump` is never
	/// selected, and a key for `Option<T>` is only reached by `None`. Register
	/// the inner type instead.
	pub fn register(&mut self, key: impl Into<TypeKey>, serializer: impl Serializer + 'static) {
		self.register_shared(key.into(), Arc::new(serializer));
	}

	/// Register a closure for `key`.
	pub fn register_fn<F>(&mut self, key: impl Into<TypeKey>, serializer: F)
	where
		F: Fn(&dyn Dump, &Dispatcher<'_>) -> DumpResult<Value> + Send + Sync + 'static,
	{
		self.register_shared(key.into(), Arc::new(serializer));
	}

	/// Register a serializer for the exact type `T`.
	///
	/// `T` should not be a transparent wrapper, see [`register`](Self::register).
	pub fn register_type<T: Dump>(&mut self, serializer: impl Serializer + 'static) {
		self.register(TypeKey::of::<T>(), serializer);
	}

	/// Register an already shared serializer.
	pub fn register_shared(&mut self, key: TypeKey, serializer: Arc<dyn Serializer>) {
		if self.serializers.insert(key, serializer).is_some() {
			tracing::debug!(?key, "overriding registered serializer");
		}
	}

	/// Replace the generic-object fallback.
	pub fn set_fallback(&mut self, serializer: impl Serializer + 'static) {
		self.fallback = Arc::new(serializer);
	}

	/// Remove the serializer registered for `key`, returning it.
	pub fn unregister(&mut self, key: impl Into<TypeKey>) -> Option<Arc<dyn Serializer>> {
		self.serializers.remove(&key.into())
	}

	pub fn contains(&self, key: impl Into<TypeKey>) -> bool {
		self.serializers.contains_key(&key.into())
	}

	pub fn get(&self, key: impl Into<TypeKey>) -> Option<&Arc<dyn Serializer>> {
		self.serializers.get(&key.into())
	}

	/// Number of registered serializers, not counting the fallback.
	pub fn len(&self) -> usize {
		self.serializers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.serializers.is_empty()
	}

	/// Find the serializer for `value`. Never fails.
	pub fn resolve(&self, value: &dyn Dump) -> Resolved<'_> {
		let resolved = self.lookup(value);
		tracing::trace!(
			type_name = value.type_name(),
			resolution = ?resolved.resolution,
			"resolved serializer"
		);
		resolved
	}

	fn lookup(&self, value: &dyn Dump) -> Resolved<'_> {
		if let Some(serializer) = self.serializers.get(&TypeKey::Type(value.runtime_type_id())) {
			return Resolved {
				serializer,
				resolution: Resolution::Exact,
			};
		}

		for ancestor in value.ancestors() {
			if let Some(serializer) = self.serializers.get(&TypeKey::Type(ancestor)) {
				return Resolved {
					serializer,
					resolution: Resolution::Ancestor(ancestor),
				};
			}
		}

		// Each value reports a single category, so the priority order of
		// `Category::PRIORITY` reduces to one lookup.
		if let Some(category) = value.category()
			&& let Some(serializer) = self.serializers.get(&TypeKey::Category(category))
		{
			return Resolved {
				serializer,
				resolution: Resolution::Category(category),
			};
		}

		Resolved {
			serializer: &self.fallback,
			resolution: Resolution::Fallback,
		}
	}

	/// Dump `value` with this registry as the root of the dispatch tree.
	pub fn dump(&self, value: &dyn Dump, options: &DumpOptions) -> DumpResult<Value> {
		Dispatcher::new(self, options).dispatch(value)
	}
}

impl Default for Registry {
	/// The default serializer set, one serializer per category.
	fn default() -> Self {
		let mut registry = Self::empty();
		registry.register(Category::Enumeration, EnumSerializer);
		registry.register(Category::DateTime, DateTimeSerializer);
		registry.register(Category::Mapping, MappingSerializer);
		registry.register(Category::Sequence, SequenceSerializer);
		registry.register(Category::Primitive, PrimitiveSerializer);
		registry
	}
}

impl std::fmt::Debug for Registry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registry")
			.field("keys", &self.serializers.keys().collect::<Vec<_>>())
			.finish_non_exhaustive()
	}
}
