//! Commonly used items, for glob import.

pub use crate::case::KeyCase;
pub use crate::dispatcher::Dispatcher;
pub use crate::dump::{Category, Dump, DumpKey, EnumMember, Shape};
pub use crate::error::{DumpError, DumpResult};
pub use crate::global::{dump, dump_with, set_serializer, set_serializer_fn};
pub use crate::options::DumpOptions;
pub use crate::registry::{Registry, Serializer, TypeKey};
pub use crate::settings::DumpSettings;

#[cfg(feature = "macros")]
pub use typedump_macros::Dump;
