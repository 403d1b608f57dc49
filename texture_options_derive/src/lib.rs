use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input};

/// Derives `texture_options::SchemaEnum` for a fieldless enum, along with
/// `Display`, `FromStr` and `TryFrom<i32>` built on top of it.
///
/// Variants may list extra accepted names with `#[schema(alias = "...")]`.
/// Discriminants are exposed as `i32`, so an integer `repr` wider than that
/// is rejected.
#[proc_macro_derive(EnumSchema, attributes(schema))]
pub fn derive_enum_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_enum_schema_impl(input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error().into(),
    }
}

struct VariantDef {
    ident: syn::Ident,
    name: String,
    aliases: Vec<String>,
}

fn parse_variant(variant: &syn::Variant) -> syn::Result<VariantDef> {
    if !matches!(variant.fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(
            variant,
            "EnumSchema can only be derived for enums with unit variants",
        ));
    }

    let mut aliases = Vec::new();
    for attr in variant.attrs.iter().filter(|a| a.path().is_ident("schema")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("alias") {
                let lit: LitStr = meta.value()?.parse()?;
                aliases.push(lit.value());
                Ok(())
            } else {
                Err(meta.error("unsupported schema attribute, expected `alias`"))
            }
        })?;
    }

    Ok(VariantDef {
        ident: variant.ident.clone(),
        name: variant.ident.to_string(),
        aliases,
    })
}

/// Integer reprs whose every discriminant fits in an `i32`.
const I32_COMPATIBLE_REPRS: &[&str] = &["i8", "i16", "i32", "u8", "u16"];

const INTEGER_REPRS: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

fn check_repr(input: &DeriveInput) -> syn::Result<()> {
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            // align(N) and friends carry a parenthesized argument.
            if meta.input.peek(syn::token::Paren) {
                let _content;
                syn::parenthesized!(_content in meta.input);
                return Ok(());
            }

            let Some(ident) = meta.path.get_ident() else {
                return Ok(());
            };
            let repr = ident.to_string();
            if INTEGER_REPRS.contains(&repr.as_str())
                && !I32_COMPATIBLE_REPRS.contains(&repr.as_str())
            {
                return Err(meta.error(format!(
                    "EnumSchema discriminants are i32, `repr({repr})` does not fit"
                )));
            }
            Ok(())
        })?;
    }
    Ok(())
}

fn derive_enum_schema_impl(input: DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let name_str = name.to_string();

    let variants = match &input.data {
        Data::Enum(data) => data
            .variants
            .iter()
            .map(parse_variant)
            .collect::<syn::Result<Vec<_>>>()?,
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "EnumSchema can only be derived for enums",
            ));
        }
    };

    if variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input,
            "EnumSchema requires at least one variant",
        ));
    }

    check_repr(&input)?;

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let idents: Vec<_> = variants.iter().map(|v| &v.ident).collect();
    let names: Vec<_> = variants.iter().map(|v| v.name.as_str()).collect();
    let match_arms = variants.iter().map(|v| {
        let ident = &v.ident;
        let name = &v.name;
        let aliases = &v.aliases;
        quote! {
            #name #( | #aliases )* => ::core::option::Option::Some(Self::#ident),
        }
    });

    let schema_impl = quote! {
        impl #impl_generics ::texture_options::SchemaEnum for #name #ty_generics #where_clause {
            const NAME: &'static str = #name_str;

            const VARIANTS: &'static [(&'static str, i32)] = &[
                #( (#names, Self::#idents as i32), )*
            ];

            const ALL: &'static [Self] = &[
                #( Self::#idents, )*
            ];

            fn to_i32(self) -> i32 {
                self as i32
            }

            fn name(self) -> &'static str {
                match self {
                    #( Self::#idents => #names, )*
                }
            }

            fn from_name(name: &str) -> ::core::option::Option<Self> {
                match name {
                    #( #match_arms )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };

    let text_impl = quote! {
        impl #impl_generics ::core::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<Self as ::texture_options::SchemaEnum>::name(*self))
            }
        }

        impl #impl_generics ::core::str::FromStr for #name #ty_generics #where_clause {
            type Err = ::texture_options::error::Error;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as ::texture_options::SchemaEnum>::from_name(s).ok_or_else(|| {
                    ::texture_options::error::Error::UnknownVariant {
                        kind: #name_str,
                        name: s.to_owned(),
                    }
                })
            }
        }

        impl #impl_generics ::core::convert::TryFrom<i32> for #name #ty_generics #where_clause {
            type Error = ::texture_options::error::Error;

            fn try_from(value: i32) -> ::core::result::Result<Self, Self::Error> {
                <Self as ::texture_options::SchemaEnum>::from_i32(value).ok_or(
                    ::texture_options::error::Error::InvalidDiscriminant {
                        kind: #name_str,
                        value,
                    },
                )
            }
        }
    };

    Ok(quote! {
        #schema_impl
        #text_impl
    }
    .into())
}
