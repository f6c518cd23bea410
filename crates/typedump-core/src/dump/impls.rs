//! `Dump` implementations for standard library and `serde_json` types

use super::{Category, Dump, Shape};
use indexmap::IndexMap;
use serde_json::Value;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

/// Types usable as mapping keys
///
/// Interchange mappings are keyed by text, so every key is rendered as a
/// string before the key transformer sees it.
pub trait DumpKey {
	fn dump_key(&self) -> Cow<'_, str>;
}

impl DumpKey for String {
	fn dump_key(&self) -> Cow<'_, str> {
		Cow::Borrowed(self.as_str())
	}
}

impl DumpKey for &'static str {
	fn dump_key(&self) -> Cow<'_, str> {
		Cow::Borrowed(self)
	}
}

impl DumpKey for Cow<'static, str> {
	fn dump_key(&self) -> Cow<'_, str> {
		Cow::Borrowed(self.as_ref())
	}
}

impl DumpKey for Arc<str> {
	fn dump_key(&self) -> Cow<'_, str> {
		Cow::Borrowed(self)
	}
}

impl DumpKey for char {
	fn dump_key(&self) -> Cow<'_, str> {
		Cow::Owned(self.to_string())
	}
}

macro_rules! impl_display_key {
	($($ty:ty),* $(,)?) => {
		$(
			impl DumpKey for $ty {
				fn dump_key(&self) -> Cow<'_, str> {
					Cow::Owned(self.to_string())
				}
			}
		)*
	};
}

impl_display_key!(
	bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

// ============================================================================
// Primitives
// ============================================================================

macro_rules! impl_primitive {
	($($ty:ty),* $(,)?) => {
		$(
			impl Dump for $ty {
				fn shape(&self) -> Shape<'_> {
					Shape::Primitive(Value::from(*self))
				}

				fn category(&self) -> Option<Category> {
					Some(Category::Primitive)
				}
			}
		)*
	};
}

impl_primitive!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Dump for () {
	fn shape(&self) -> Shape<'_> {
		Shape::Primitive(Value::Null)
	}

	fn category(&self) -> Option<Category> {
		Some(Category::Primitive)
	}
}

impl Dump for char {
	fn shape(&self) -> Shape<'_> {
		Shape::Primitive(Value::String(self.to_string()))
	}

	fn category(&self) -> Option<Category> {
		Some(Category::Primitive)
	}
}

impl Dump for String {
	fn shape(&self) -> Shape<'_> {
		Shape::Primitive(Value::String(self.clone()))
	}

	fn category(&self) -> Option<Category> {
		Some(Category::Primitive)
	}
}

impl Dump for &'static str {
	fn shape(&self) -> Shape<'_> {
		Shape::Primitive(Value::String((*self).to_owned()))
	}

	fn category(&self) -> Option<Category> {
		Some(Category::Primitive)
	}
}

impl Dump for Cow<'static, str> {
	fn shape(&self) -> Shape<'_> {
		Shape::Primitive(Value::String(self.to_string()))
	}

	fn category(&self) -> Option<Category> {
		Some(Category::Primitive)
	}
}

impl Dump for Arc<str> {
	fn shape(&self) -> Shape<'_> {
		Shape::Primitive(Value::String(self.to_string()))
	}

	fn category(&self) -> Option<Category> {
		Some(Category::Primitive)
	}
}

// ============================================================================
// Transparent wrappers
// ============================================================================

impl<T: Dump> Dump for Option<T> {
	fn shape(&self) -> Shape<'_> {
		match self {
			Some(inner) => inner.shape(),
			None => Shape::Primitive(Value::Null),
		}
	}

	fn category(&self) -> Option<Category> {
		match self {
			Some(inner) => inner.category(),
			None => Some(Category::Primitive),
		}
	}

	fn delegate(&self) -> Option<&dyn Dump> {
		self.as_ref().map(|inner| inner as &dyn Dump)
	}
}

macro_rules! impl_pointer {
	($($ptr:ident),* $(,)?) => {
		$(
			impl<T: Dump> Dump for $ptr<T> {
				fn shape(&self) -> Shape<'_> {
					(**self).shape()
				}

				fn category(&self) -> Option<Category> {
					(**self).category()
				}

				fn delegate(&self) -> Option<&dyn Dump> {
					Some(&**self)
				}
			}
		)*
	};
}

impl_pointer!(Box, Rc, Arc);

impl Dump for Box<dyn Dump> {
	fn shape(&self) -> Shape<'_> {
		(**self).shape()
	}

	fn category(&self) -> Option<Category> {
		(**self).category()
	}

	fn delegate(&self) -> Option<&dyn Dump> {
		Some(&**self)
	}
}

impl Dump for Arc<dyn Dump + Send + Sync> {
	fn shape(&self) -> Shape<'_> {
		(**self).shape()
	}

	fn category(&self) -> Option<Category> {
		(**self).category()
	}

	fn delegate(&self) -> Option<&dyn Dump> {
		Some(&**self)
	}
}

// ============================================================================
// Sequences
// ============================================================================

macro_rules! impl_sequence {
	($($coll:ident<T $(: $bound:ident)?>),* $(,)?) => {
		$(
			impl<T: Dump $(+ $bound)?> Dump for $coll<T> {
				fn shape(&self) -> Shape<'_> {
					Shape::Sequence(Box::new(self.iter().map(|item| item as &dyn Dump)))
				}

				fn category(&self) -> Option<Category> {
					Some(Category::Sequence)
				}
			}
		)*
	};
}

impl_sequence!(Vec<T>, VecDeque<T>, LinkedList<T>, BTreeSet<T: Ord>);

impl<T: Dump, S: 'static> Dump for HashSet<T, S> {
	fn shape(&self) -> Shape<'_> {
		Shape::Sequence(Box::new(self.iter().map(|item| item as &dyn Dump)))
	}

	fn category(&self) -> Option<Category> {
		Some(Category::Sequence)
	}
}

impl<T: Dump, const N: usize> Dump for [T; N] {
	fn shape(&self) -> Shape<'_> {
		Shape::Sequence(Box::new(self.iter().map(|item| item as &dyn Dump)))
	}

	fn category(&self) -> Option<Category> {
		Some(Category::Sequence)
	}
}

impl<T: Dump> Dump for Box<[T]> {
	fn shape(&self) -> Shape<'_> {
		Shape::Sequence(Box::new(self.iter().map(|item| item as &dyn Dump)))
	}

	fn category(&self) -> Option<Category> {
		Some(Category::Sequence)
	}
}

macro_rules! impl_tuple {
	($(($($name:ident . $idx:tt),+)),* $(,)?) => {
		$(
			impl<$($name: Dump),+> Dump for ($($name,)+) {
				fn shape(&self) -> Shape<'_> {
					Shape::Sequence(Box::new([$(&self.$idx as &dyn Dump),+].into_iter()))
				}

				fn category(&self) -> Option<Category> {
					Some(Category::Sequence)
				}
			}
		)*
	};
}

impl_tuple!(
	(A.0),
	(A.0, B.1),
	(A.0, B.1, C.2),
	(A.0, B.1, C.2, D.3),
	(A.0, B.1, C.2, D.3, E.4),
	(A.0, B.1, C.2, D.3, E.4, F.5),
	(A.0, B.1, C.2, D.3, E.4, F.5, G.6),
	(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7),
);

// ============================================================================
// Mappings
// ============================================================================

impl<K: DumpKey + 'static, V: Dump, S: BuildHasher + 'static> Dump for HashMap<K, V, S> {
	fn shape(&self) -> Shape<'_> {
		Shape::Mapping(Box::new(
			self.iter()
				.map(|(key, value)| (key.dump_key(), value as &dyn Dump)),
		))
	}

	fn category(&self) -> Option<Category> {
		Some(Category::Mapping)
	}
}

impl<K: DumpKey + 'static, V: Dump> Dump for BTreeMap<K, V> {
	fn shape(&self) -> Shape<'_> {
		Shape::Mapping(Box::new(
			self.iter()
				.map(|(key, value)| (key.dump_key(), value as &dyn Dump)),
		))
	}

	fn category(&self) -> Option<Category> {
		Some(Category::Mapping)
	}
}

impl<K: DumpKey + 'static, V: Dump, S: BuildHasher + 'static> Dump for IndexMap<K, V, S> {
	fn shape(&self) -> Shape<'_> {
		Shape::Mapping(Box::new(
			self.iter()
				.map(|(key, value)| (key.dump_key(), value as &dyn Dump)),
		))
	}

	fn category(&self) -> Option<Category> {
		Some(Category::Mapping)
	}
}

// ============================================================================
// serde_json
// ============================================================================

impl Dump for Value {
	fn shape(&self) -> Shape<'_> {
		match self {
			Value::Array(items) => {
				Shape::Sequence(Box::new(items.iter().map(|item| item as &dyn Dump)))
			}
			Value::Object(map) => Shape::Mapping(Box::new(
				map.iter()
					.map(|(key, value)| (Cow::Borrowed(key.as_str()), value as &dyn Dump)),
			)),
			scalar => Shape::Primitive(scalar.clone()),
		}
	}

	fn category(&self) -> Option<Category> {
		match self {
			Value::Array(_) => Some(Category::Sequence),
			Value::Object(_) => Some(Category::Mapping),
			_ => Some(Category::Primitive),
		}
	}
}

impl Dump for serde_json::Map<String, Value> {
	fn shape(&self) -> Shape<'_> {
		Shape::Mapping(Box::new(
			self.iter()
				.map(|(key, value)| (Cow::Borrowed(key.as_str()), value as &dyn Dump)),
		))
	}

	fn category(&self) -> Option<Category> {
		Some(Category::Mapping)
	}
}
