use super::derived_trait_names;
use fxhash::FxHashSet;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::{Attribute, ItemStruct, Lit, LitStr, Meta, MetaNameValue};

/// Expands the `#[item_model]` attribute macro.
pub fn expand_item_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    let ModelArgs { rename_all, default } = match parse_args(args) {
        Ok(args) => args,
        Err(err) => return err,
    };
    let existing = match SerdeContainer::read(&input.attrs) {
        Ok(existing) => existing,
        Err(err) => return err,
    };

    let derive_attr = derive_attr(&derived_trait_names(&input.attrs));
    let rename_attr = match rename_attr(rename_all, &existing) {
        Ok(attr) => attr,
        Err(err) => return err,
    };
    let default_attr =
        if default.unwrap_or(true) && !existing.default { quote! { #[serde(default)] } } else { quote! {} };

    quote! {
        #derive_attr
        #rename_attr
        #default_attr
        #input
    }
}

struct ModelArgs {
    rename_all: Option<LitStr>,
    default: Option<bool>,
}

fn parse_args(args: TokenStream) -> Result<ModelArgs, TokenStream> {
    let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
    let metas = parser.parse2(args).map_err(|err| err.to_compile_error())?;

    let mut parsed = ModelArgs { rename_all: None, default: None };

    for meta in metas {
        let Meta::NameValue(name_value) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "Expected name-value arguments like `rename_all = \"...\"`",
            )
            .to_compile_error());
        };

        if name_value.path.is_ident("rename_all") {
            let Lit::Str(value) = literal(&name_value)? else {
                return Err(invalid(&name_value, "rename_all must be a string literal"));
            };
            parsed.rename_all = Some(only_once(parsed.rename_all, &name_value, value)?);
        } else if name_value.path.is_ident("default") {
            let Lit::Bool(value) = literal(&name_value)? else {
                return Err(invalid(&name_value, "default must be a boolean literal"));
            };
            parsed.default = Some(only_once(parsed.default, &name_value, value.value)?);
        } else {
            return Err(invalid(&name_value, "Unsupported argument; expected rename_all or default"));
        }
    }

    Ok(parsed)
}

fn literal(name_value: &MetaNameValue) -> Result<Lit, TokenStream> {
    match &name_value.value {
        syn::Expr::Lit(expr) => Ok(expr.lit.clone()),
        _ => Err(invalid(name_value, "Expected a literal value")),
    }
}

fn invalid(name_value: &MetaNameValue, message: &str) -> TokenStream {
    syn::Error::new_spanned(name_value, message).to_compile_error()
}

fn only_once<T>(current: Option<T>, token: &MetaNameValue, value: T) -> Result<T, TokenStream> {
    if current.is_some() {
        return Err(invalid(token, "Duplicate argument"));
    }
    Ok(value)
}

/// Container-level serde settings already present on the struct.
struct SerdeContainer {
    rename_all: Option<LitStr>,
    default: bool,
}

impl SerdeContainer {
    fn read(attrs: &[Attribute]) -> Result<Self, TokenStream> {
        let mut found = Self { rename_all: None, default: false };

        for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    found.rename_all = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("default") {
                    found.default = true;
                    if meta.input.peek(syn::Token![=]) {
                        let _: LitStr = meta.value()?.parse()?;
                    }
                } else if meta.input.peek(syn::Token![=]) {
                    let _: syn::Expr = meta.value()?.parse()?;
                }
                Ok(())
            })
            .map_err(|err| err.to_compile_error())?;
        }

        Ok(found)
    }
}

fn derive_attr(existing: &FxHashSet<String>) -> TokenStream {
    let wanted = [
        ("Debug", quote! { Debug }),
        ("Clone", quote! { Clone }),
        ("PartialEq", quote! { PartialEq }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ];
    let tokens: Vec<_> =
        wanted.into_iter().filter(|(name, _)| !existing.contains(*name)).map(|(_, t)| t).collect();

    if tokens.is_empty() { quote! {} } else { quote! { #[derive(#(#tokens),*)] } }
}

fn rename_attr(
    rename_all: Option<LitStr>,
    existing: &SerdeContainer,
) -> Result<TokenStream, TokenStream> {
    let wanted = rename_all.unwrap_or_else(|| LitStr::new("camelCase", Span::call_site()));

    match &existing.rename_all {
        Some(found) if found.value() != wanted.value() => Err(syn::Error::new_spanned(
            found,
            "Conflicting serde rename_all; remove it or pass item_model(rename_all = \"...\")",
        )
        .to_compile_error()),
        Some(_) => Ok(quote! {}),
        None => Ok(quote! { #[serde(rename_all = #wanted)] }),
    }
}
