//! Process-wide registry
//!
//! Holds one [`Registry`] behind a lock. Every top-level [`dump`] takes an
//! `Arc` snapshot, so a dispatch tree sees a single consistent registry and
//! never holds the lock while serializing. Registration copies the registry
//! if a snapshot is still in use.
//!
//! Register overrides during start-up, before concurrent dumps begin.

use crate::dispatcher::Dispatcher;
use crate::dump::Dump;
use crate::error::DumpResult;
use crate::options::DumpOptions;
use crate::registry::{Registry, Serializer, TypeKey};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

static GLOBAL_REGISTRY: Lazy<RwLock<Arc<Registry>>> =
	Lazy::new(|| RwLock::new(Arc::new(Registry::default())));

/// Snapshot of the global registry.
pub fn registry() -> Arc<Registry> {
	Arc::clone(&GLOBAL_REGISTRY.read())
}

/// Dump `value` with the global registry and default options.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// let scores = BTreeMap::from([("alice", 3), ("bob", 5)]);
/// let dumped = typedump_core::dump(&scores).unwrap();
/// assert_eq!(dumped, serde_json::json!({"alice": 3, "bob": 5}));
/// ```
pub fn dump(value: &dyn Dump) -> DumpResult<Value> {
	dump_with(value, &DumpOptions::default())
}

/// Dump `value` with the global registry and the given options.
pub fn dump_with(value: &dyn Dump, options: &DumpOptions) -> DumpResult<Value> {
	let registry = registry();
	Dispatcher::new(&registry, options).dispatch(value)
}

/// Register `serializer` for `key` in the global registry. Last write wins.
pub fn set_serializer(key: impl Into<TypeKey>, serializer: impl Serializer + 'static) {
	update_registry(|registry| registry.register(key, serializer));
}

/// Register a closure for `key` in the global registry.
pub fn set_serializer_fn<F>(key: impl Into<TypeKey>, serializer: F)
where
	F: Fn(&dyn Dump, &Dispatcher<'_>) -> DumpResult<Value> + Send + Sync + 'static,
{
	update_registry(|registry| registry.register_fn(key, serializer));
}

/// Apply `update` to the global registry under the write lock.
pub fn update_registry<R>(update: impl FnOnce(&mut Registry) -> R) -> R {
	let mut global = GLOBAL_REGISTRY.write();
	update(Arc::make_mut(&mut global))
}

/// Restore the default serializer set.
///
/// This is primarily useful for testing.
pub fn reset_registry() {
	*GLOBAL_REGISTRY.write() = Arc::new(Registry::default());
}
