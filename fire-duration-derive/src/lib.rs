mod span;

use ::quote::quote;

use syn::parse_macro_input;
use syn::DeriveInput;

use proc_macro::TokenStream as V1TokenStream;

use proc_macro2::{Ident, Span};

use proc_macro_crate::{crate_name, FoundCrate};
use span::expand_span;

/// Implements `Span`, `Display` and `From<Self> for Duration` for a unit
/// newtype around one `f64` or `i64`.
///
/// ## Example
/// ```ignore
/// #[derive(Span)]
/// #[span(unit = "hours", nanos = 3_600_000_000_000)]
/// pub struct Hour(pub f64);
/// ```
#[proc_macro_derive(Span, attributes(span))]
pub fn derive_span(input: V1TokenStream) -> V1TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	// crate name
	let name =
		crate_name("fire-duration").expect("fire-duration not in dependencies");
	let name = match name {
		FoundCrate::Itself => quote!(crate),
		FoundCrate::Name(n) => {
			let ident = Ident::new(&n, Span::call_site());
			quote!(#ident)
		}
	};

	expand_span(&input, &name).unwrap_or_else(to_compile_error)
}

fn to_compile_error(error: syn::Error) -> V1TokenStream {
	let compile_error = syn::Error::to_compile_error(&error);
	quote!(#compile_error).into()
}
