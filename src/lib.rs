//! # typedump
//!
//! Type-directed serialization of arbitrary Rust values into a generic
//! interchange representation (`serde_json::Value`).
//!
//! Every serializable type implements [`Dump`], usually through
//! `#[derive(Dump)]`. A [`Registry`] resolves a [`Serializer`] for each
//! value by exact type, declared ancestors, structural category, and
//! finally the generic-object fallback. The [`DumpOptions`] of a call reach
//! every nested value unchanged.
//!
//! ## Examples
//!
//! ```
//! use typedump::prelude::*;
//! use serde_json::json;
//!
//! #[derive(Dump)]
//! enum Role {
//!     Admin,
//!     Member,
//! }
//!
//! #[derive(Dump)]
//! struct User {
//!     user_name: String,
//!     role: Role,
//!     email: Option<String>,
//! }
//!
//! let user = User {
//!     user_name: "ada".into(),
//!     role: Role::Admin,
//!     email: None,
//! };
//! let options = DumpOptions::new().strip_nulls(true).key_case(KeyCase::Camel);
//!
//! assert_eq!(
//!     dump_with(&user, &options).unwrap(),
//!     json!({"userName": "ada", "role": "Admin"})
//! );
//! ```
//!
//! ## Feature Flags
//!
//! - `macros` (default): `#[derive(Dump)]`

pub use typedump_core::*;

/// Commonly used items, including the derive macro.
pub mod prelude {
	pub use typedump_core::prelude::*;
}
