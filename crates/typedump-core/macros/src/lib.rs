//! Procedural macros for typedump.
//!
//! This crate provides `#[derive(Dump)]`, which implements the `Dump` trait
//! for structs with named fields and for fieldless enums.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod crate_paths;
mod dump_derive;

/// Derives a `Dump` implementation.
///
/// Structs serialize as objects whose fields appear in declaration order.
/// Fieldless enums serialize as enumeration members.
///
/// # Attributes
///
/// ## Container attributes
///
/// - `#[dump(extends(Base, ...))]` - Direct parents, most specific first.
///   Each parent's own ancestors are inherited, so a serializer registered for
///   any type up the chain applies to this type.
///
/// ## Field attributes
///
/// - `#[dump(skip)]` - Leave the field out
/// - `#[dump(rename = "name")]` - Serialize under a different key
///
/// ## Variant attributes
///
/// - `#[dump(rename = "NAME")]` - Member name
/// - `#[dump(value = literal)]` - Member value (defaults to the discriminant)
///
/// # Example
///
/// ```ignore
/// use typedump::Dump;
///
/// #[derive(Dump)]
/// enum Color {
///     #[dump(rename = "RED")]
///     Red = 1,
///     #[dump(value = "g")]
///     Green,
/// }
///
/// #[derive(Dump)]
/// #[dump(extends(Animal))]
/// struct Dog {
///     name: String,
///     #[dump(rename = "favouriteColor")]
///     color: Option<Color>,
///     #[dump(skip)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// Tuple structs, unions and enums with data-carrying variants are rejected.
#[proc_macro_derive(Dump, attributes(dump))]
pub fn derive_dump(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	dump_derive::derive_dump_impl(input)
		.unwrap_or_else(syn::Error::into_compile_error)
		.into()
}
