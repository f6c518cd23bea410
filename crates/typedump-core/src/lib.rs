//! # typedump-core
//!
//! Type-directed serialization dispatch.
//!
//! A value implementing [`Dump`] is converted into a [`serde_json::Value`] by
//! resolving a [`Serializer`] for its runtime type in a [`Registry`] and
//! applying it. Serializers recurse through a [`Dispatcher`], which threads the
//! same [`DumpOptions`] (null stripping, key renaming, extension options)
//! through every level.
//!
//! Resolution tries, in order: the exact type, each declared ancestor, the
//! value's structural [`Category`], and finally the generic-object fallback.
//!
//! ## Examples
//!
//! ```
//! use indexmap::IndexMap;
//! use serde_json::json;
//! use typedump_core::prelude::*;
//!
//! let user = IndexMap::from([("firstName", Some("Ada")), ("nickName", None)]);
//! let options = DumpOptions::new().strip_nulls(true).key_case(KeyCase::Snake);
//!
//! assert_eq!(dump_with(&user, &options).unwrap(), json!({"first_name": "Ada"}));
//! ```
//!
//! ## Feature Flags
//!
//! - `macros` (default): `#[derive(Dump)]`

extern crate self as typedump_core;

pub mod case;
pub mod dispatcher;
pub mod dump;
pub mod error;
pub mod global;
pub mod options;
pub mod prelude;
pub mod registry;
pub mod serializers;
pub mod settings;

pub use dispatcher::Dispatcher;
pub use dump::{Category, Dump, DumpKey, Elements, EnumMember, Entries, Shape};
pub use error::{BoxError, DumpError, DumpResult};
pub use global::{
	dump, dump_with, registry, reset_registry, set_serializer, set_serializer_fn, update_registry,
};
pub use options::{DumpOptions, KeyTransformer, USE_ENUM_NAME};
pub use registry::{Registry, Resolution, Resolved, Serializer, TypeKey};
pub use settings::DumpSettings;

#[cfg(feature = "macros")]
pub use typedump_macros::Dump;
