//! Helper functions for dynamic crate path resolution using proc_macro_crate

use proc_macro2::TokenStream;
use quote::quote;

/// Resolves the path of the crate exporting `Dump`.
///
/// Prefers the `typedump` facade and falls back to `typedump-core`, either
/// possibly renamed in Cargo.toml.
pub(crate) fn get_typedump_crate() -> syn::Result<TokenStream> {
	use proc_macro_crate::{FoundCrate, crate_name};

	let resolve = |found: FoundCrate, own_name: &str| match found {
		FoundCrate::Itself => {
			let ident = syn::Ident::new(own_name, proc_macro2::Span::call_site());
			quote!(::#ident)
		}
		FoundCrate::Name(name) => {
			let ident = syn::Ident::new(&name, proc_macro2::Span::call_site());
			quote!(::#ident)
		}
	};

	if let Ok(found) = crate_name("typedump") {
		return Ok(resolve(found, "typedump"));
	}

	match crate_name("typedump-core") {
		Ok(found) => Ok(resolve(found, "typedump_core")),
		Err(e) => Err(syn::Error::new(
			proc_macro2::Span::call_site(),
			format!(
				"failed to resolve `typedump` crate: {}. Ensure it is listed in Cargo.toml dependencies.",
				e
			),
		)),
	}
}
