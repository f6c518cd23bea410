//! Derive macro for the Dump trait
//!
//! Structs with named fields become objects listing their fields; fieldless
//! enums become enumeration members.

use crate::crate_paths::get_typedump_crate;
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DataEnum, DeriveInput, Fields, FieldsNamed, Generics};

/// Options from `#[dump(...)]` on the struct or enum itself
#[derive(Default)]
struct ContainerAttrs {
	extends: Vec<syn::Path>,
}

/// Options from `#[dump(...)]` on a field or variant
#[derive(Default)]
struct MemberAttrs {
	skip: bool,
	rename: Option<String>,
	value: Option<syn::Expr>,
}

fn parse_container_attrs(attrs: &[syn::Attribute]) -> syn::Result<ContainerAttrs> {
	let mut parsed = ContainerAttrs::default();
	for attr in attrs.iter().filter(|attr| attr.path().is_ident("dump")) {
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("extends") {
				meta.parse_nested_meta(|ancestor| {
					parsed.extends.push(ancestor.path);
					Ok(())
				})
			} else {
				Err(meta.error("unsupported container attribute, expected `extends(...)`"))
			}
		})?;
	}
	Ok(parsed)
}

fn parse_member_attrs(attrs: &[syn::Attribute]) -> syn::Result<MemberAttrs> {
	let mut parsed = MemberAttrs::default();
	for attr in attrs.iter().filter(|attr| attr.path().is_ident("dump")) {
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("skip") {
				parsed.skip = true;
				Ok(())
			} else if meta.path.is_ident("rename") {
				let name: syn::LitStr = meta.value()?.parse()?;
				parsed.rename = Some(name.value());
				Ok(())
			} else if meta.path.is_ident("value") {
				parsed.value = Some(meta.value()?.parse()?);
				Ok(())
			} else {
				Err(meta.error("unsupported attribute, expected `skip`, `rename` or `value`"))
			}
		})?;
	}
	Ok(parsed)
}

/// Implementation of the Dump derive macro
pub(crate) fn derive_dump_impl(mut input: DeriveInput) -> syn::Result<TokenStream> {
	let krate = get_typedump_crate()?;
	let container = parse_container_attrs(&input.attrs)?;
	add_dump_bounds(&mut input.generics, &krate);

	let name = &input.ident;
	let body = match &input.data {
		Data::Struct(data) => match &data.fields {
			Fields::Named(fields) => struct_body(fields, &krate)?,
			Fields::Unit => quote! {
				fn shape(&self) -> #krate::Shape<'_> {
					#krate::Shape::Object(::std::boxed::Box::new(::std::iter::empty()))
				}
			},
			Fields::Unnamed(_) => {
				return Err(syn::Error::new_spanned(
					name,
					"Dump can only be derived for structs with named fields",
				));
			}
		},
		Data::Enum(data) => enum_body(data, &krate)?,
		Data::Union(_) => {
			return Err(syn::Error::new_spanned(
				name,
				"Dump cannot be derived for unions",
			));
		}
	};

	let ancestors = if container.extends.is_empty() {
		TokenStream::new()
	} else {
		let extends = &container.extends;
		quote! {
			fn declared_ancestors() -> ::std::vec::Vec<::std::any::TypeId> {
				#krate::dump::ancestor_chain([
					#((
						::std::any::TypeId::of::<#extends>(),
						<#extends as #krate::Dump>::declared_ancestors(),
					)),*
				])
			}

			fn ancestors(&self) -> ::std::vec::Vec<::std::any::TypeId> {
				<Self as #krate::Dump>::declared_ancestors()
			}
		}
	};

	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
	Ok(quote! {
		impl #impl_generics #krate::Dump for #name #ty_generics #where_clause {
			#body
			#ancestors
		}
	})
}

/// Every type parameter must itself be dumpable.
fn add_dump_bounds(generics: &mut Generics, krate: &TokenStream) {
	let params: Vec<_> = generics
		.type_params()
		.map(|param| param.ident.clone())
		.collect();
	let where_clause = generics.make_where_clause();
	for param in params {
		where_clause
			.predicates
			.push(syn::parse_quote!(#param: #krate::Dump));
	}
}

fn struct_body(fields: &FieldsNamed, krate: &TokenStream) -> syn::Result<TokenStream> {
	let mut entries = Vec::new();
	for field in &fields.named {
		let attrs = parse_member_attrs(&field.attrs)?;
		if attrs.value.is_some() {
			return Err(syn::Error::new_spanned(
				field,
				"`value` only applies to enum variants",
			));
		}
		if attrs.skip {
			continue;
		}
		let Some(ident) = &field.ident else {
			continue;
		};
		let key = attrs.rename.unwrap_or_else(|| ident.unraw().to_string());
		entries.push(quote! {
			(::std::borrow::Cow::Borrowed(#key), &self.#ident as &dyn #krate::Dump)
		});
	}

	let iter = if entries.is_empty() {
		quote!(::std::iter::empty())
	} else {
		quote!([#(#entries),*].into_iter())
	};

	Ok(quote! {
		fn shape(&self) -> #krate::Shape<'_> {
			#krate::Shape::Object(::std::boxed::Box::new(#iter))
		}
	})
}

fn enum_body(data: &DataEnum, krate: &TokenStream) -> syn::Result<TokenStream> {
	let mut arms = Vec::new();
	for variant in &data.variants {
		if !matches!(variant.fields, Fields::Unit) {
			return Err(syn::Error::new_spanned(
				variant,
				"Dump can only be derived for enums whose variants carry no data",
			));
		}
		let attrs = parse_member_attrs(&variant.attrs)?;
		if attrs.skip {
			return Err(syn::Error::new_spanned(
				variant,
				"enum variants cannot be skipped",
			));
		}

		let ident = &variant.ident;
		let member_name = attrs.rename.unwrap_or_else(|| ident.unraw().to_string());
		let member_value = match attrs.value {
			Some(value) => quote!(#value),
			None => quote!(Self::#ident as i64),
		};
		arms.push(quote! {
			Self::#ident => #krate::EnumMember::new(#member_name, #member_value)
		});
	}

	Ok(quote! {
		fn shape(&self) -> #krate::Shape<'_> {
			#krate::Shape::Enumeration(match self {
				#(#arms,)*
			})
		}

		fn category(&self) -> ::std::option::Option<#krate::Category> {
			::std::option::Option::Some(#krate::Category::Enumeration)
		}
	})
}
