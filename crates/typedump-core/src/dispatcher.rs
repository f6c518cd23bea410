//! Recursive dispatch
//!
//! A [`Dispatcher`] pairs a registry with the options of one dump call.
//! Serializers receive a dispatcher and call [`Dispatcher::dispatch`] for
//! nested values; the same options reach every level unchanged.

use crate::dump::Dump;
use crate::error::{DumpError, DumpResult};
use crate::options::DumpOptions;
use crate::registry::Registry;
use serde_json::Value;

/// Recursive entry point for one dispatch tree
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'a> {
	registry: &'a Registry,
	options: &'a DumpOptions,
	depth: usize,
}

impl<'a> Dispatcher<'a> {
	/// Root dispatcher at depth 0.
	pub fn new(registry: &'a Registry, options: &'a DumpOptions) -> Self {
		Self {
			registry,
			options,
			depth: 0,
		}
	}

	pub fn registry(&self) -> &'a Registry {
		self.registry
	}

	pub fn options(&self) -> &'a DumpOptions {
		self.options
	}

	/// Nesting level of the values dispatched through this dispatcher.
	///
	/// The root value sits at 0; a serializer handling it receives a
	/// dispatcher at depth 1 for its children.
	pub fn depth(&self) -> usize {
		self.depth
	}

	/// A dispatcher at the same depth that hands `options` to its children
	///
	/// For serializers that deliberately change the options of a subtree.
	pub fn with_options<'o>(&self, options: &'o DumpOptions) -> Dispatcher<'o>
	where
		'a: 'o,
	{
		Dispatcher {
			registry: self.registry,
			options,
			depth: self.depth,
		}
	}

	/// Serialize `value` with the serializer the registry resolves for it.
	///
	/// Transparent wrappers are unwrapped first. Errors reported by the
	/// serializer are annotated with the value's type, unless an inner value
	/// already claimed them.
	pub fn dispatch(&self, value: &dyn Dump) -> DumpResult<Value> {
		let mut value = value;
		while let Some(inner) = value.delegate() {
			value = inner;
		}

		if let Some(max_depth) = self.options.depth_limit()
			&& self.depth > max_depth
		{
			return Err(DumpError::MaxDepthExceeded {
				type_name: value.type_name(),
				max_depth,
			});
		}

		let resolved = self.registry.resolve(value);
		let child = Dispatcher {
			depth: self.depth + 1,
			..*self
		};

		resolved
			.serializer
			.serialize(value, &child)
			.map_err(|error| {
				let error = error.annotate(value.type_name());
				tracing::debug!(
					type_name = value.type_name(),
					resolution = ?resolved.resolution,
					%error,
					"serializer failed"
				);
				error
			})
	}
}
