use ::quote::{quote, ToTokens};

use syn::{DeriveInput, Error, Fields, LitInt, LitStr, Type};

use proc_macro2::{Literal, TokenStream};

type Result<T> = std::result::Result<T, Error>;

macro_rules! err {
	($input:expr, $msg:expr) => {
		Error::new_spanned($input.into_token_stream(), $msg)
	};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
	Hours,
	Minutes,
	Seconds,
	Nanoseconds,
}

impl Unit {
	fn from_lit(lit: &LitStr) -> Result<Self> {
		match lit.value().as_str() {
			"hours" => Ok(Self::Hours),
			"minutes" => Ok(Self::Minutes),
			"seconds" => Ok(Self::Seconds),
			"nanoseconds" => Ok(Self::Nanoseconds),
			_ => Err(err!(
				lit,
				"expected one of hours, minutes, seconds or nanoseconds"
			)),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repr {
	Float,
	Int,
}

struct Attrs {
	unit: Unit,
	nanos: i64,
}

pub fn expand_span(
	input: &DeriveInput,
	name: &TokenStream,
) -> Result<proc_macro::TokenStream> {
	let fields = match &input.data {
		syn::Data::Struct(data) => match &data.fields {
			Fields::Unnamed(fields) if fields.unnamed.len() == 1 => fields,
			f => return Err(err!(f, "expected exactly one unnamed field")),
		},
		_ => return Err(err!(input, "only tuple structs are supported")),
	};

	let field = &fields.unnamed[0];
	let repr = parse_repr(&field.ty)?;
	let Attrs { unit, nanos } = parse_attrs(input)?;

	let ident = &input.ident;
	let (impl_gens, ty_gens, where_clause) = input.generics.split_for_impl();

	let duration = quote!(#name::Duration);
	let span = quote!(#name::Span);

	let to_duration = match repr {
		Repr::Float => {
			let factor = Literal::f64_suffixed(nanos as f64);
			quote!(#duration::from_nanos_f64(self.0 * #factor))
		}
		Repr::Int => {
			let factor = Literal::i64_suffixed(nanos);
			quote!(#duration::from_nanos(self.0.wrapping_mul(#factor)))
		}
	};

	let hours =
		accessor(&span, unit, Unit::Hours, repr, quote!(hours), quote!(f64));
	let minutes = accessor(
		&span,
		unit,
		Unit::Minutes,
		repr,
		quote!(minutes),
		quote!(f64),
	);
	let seconds = accessor(
		&span,
		unit,
		Unit::Seconds,
		repr,
		quote!(seconds),
		quote!(f64),
	);
	let nanoseconds = accessor(
		&span,
		unit,
		Unit::Nanoseconds,
		repr,
		quote!(nanoseconds),
		quote!(i64),
	);

	let toks = quote!(
		impl #impl_gens #span for #ident #ty_gens #where_clause {
			fn to_duration(&self) -> #duration {
				#to_duration
			}

			#hours
			#minutes
			#seconds
			#nanoseconds
		}

		impl #impl_gens std::fmt::Display for #ident #ty_gens #where_clause {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				std::fmt::Display::fmt(&#span::to_duration(self), f)
			}
		}

		impl #impl_gens std::convert::From<#ident #ty_gens> for #duration
		#where_clause
		{
			fn from(v: #ident #ty_gens) -> Self {
				#span::to_duration(&v)
			}
		}
	);

	Ok(toks.into())
}

/// The accessor of the value's own unit returns the stored value untouched,
/// every other accessor goes through the canonical duration.
fn accessor(
	span: &TokenStream,
	own: Unit,
	unit: Unit,
	repr: Repr,
	method: TokenStream,
	ret: TokenStream,
) -> TokenStream {
	let accessor_repr = match unit {
		Unit::Nanoseconds => Repr::Int,
		_ => Repr::Float,
	};

	let body = if own == unit && accessor_repr == repr {
		quote!(self.0)
	} else {
		quote!(#span::#method(&#span::to_duration(self)))
	};

	quote!(
		fn #method(&self) -> #ret {
			#body
		}
	)
}

fn parse_repr(ty: &Type) -> Result<Repr> {
	if let Type::Path(path) = ty {
		if path.qself.is_none() {
			if path.path.is_ident("f64") {
				return Ok(Repr::Float);
			}

			if path.path.is_ident("i64") {
				return Ok(Repr::Int);
			}
		}
	}

	Err(err!(ty, "expected f64 or i64"))
}

fn parse_attrs(input: &DeriveInput) -> Result<Attrs> {
	let mut unit = None;
	let mut nanos = None;

	for attr in input.attrs.iter().filter(|a| a.path().is_ident("span")) {
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("unit") {
				let lit: LitStr = meta.value()?.parse()?;
				unit = Some(Unit::from_lit(&lit)?);
				Ok(())
			} else if meta.path.is_ident("nanos") {
				let lit: LitInt = meta.value()?.parse()?;
				let n: i64 = lit.base10_parse()?;
				if n <= 0 {
					return Err(err!(lit, "nanos needs to be positive"));
				}
				nanos = Some(n);
				Ok(())
			} else {
				Err(meta.error("unsupported span attribute"))
			}
		})?;
	}

	match (unit, nanos) {
		(Some(unit), Some(nanos)) => Ok(Attrs { unit, nanos }),
		(None, _) => Err(err!(input, "#[span(unit = \"..\")] missing")),
		(_, None) => Err(err!(input, "#[span(nanos = ..)] missing")),
	}
}
