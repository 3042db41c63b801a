//! structform-macros - Derive macro for structform records
//!
//! This crate provides:
//! - `#[derive(Form)]` - Generate the field table and reflection impls for a struct

use darling::{FromDeriveInput, FromField, ast};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, parse_macro_input};

/// Parsed struct for the Form derive macro
#[derive(Debug, FromDeriveInput)]
#[darling(supports(struct_named))]
struct FormOpts {
    ident: syn::Ident,
    generics: syn::Generics,
    data: ast::Data<darling::util::Ignored, FormField>,
}

/// One named field of the deriving struct
#[derive(Debug, FromField)]
struct FormField {
    ident: Option<syn::Ident>,
    ty: syn::Type,
    vis: syn::Visibility,
}

/// Derive macro for form records
///
/// Implements `structform_core::Record` and `structform_core::Field` so the
/// struct can be extracted, rendered, and nested inside other records. Only
/// fields declared `pub` become form fields; every visible field type must
/// itself implement `Field`.
///
/// # Example
///
/// ```ignore
/// #[derive(Form)]
/// struct Signup {
///     pub email: String,
///     pub address: Option<Address>,
///     password_hash: String,
/// }
/// ```
#[proc_macro_derive(Form)]
pub fn derive_form(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match FormOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return TokenStream::from(e.write_errors()),
    };

    TokenStream::from(expand_form(&opts))
}

fn expand_form(opts: &FormOpts) -> TokenStream2 {
    let name = &opts.ident;
    let record_name = name.unraw().to_string();

    let fields = match &opts.data {
        ast::Data::Struct(fields) => &fields.fields,
        ast::Data::Enum(_) => {
            return syn::Error::new_spanned(name, "Form can only be derived for structs")
                .to_compile_error();
        }
    };
    let type_params: Vec<&syn::Ident> = opts
        .generics
        .type_params()
        .map(|param| &param.ident)
        .collect();

    let mut table = Vec::with_capacity(fields.len());
    let mut value_arms = Vec::new();
    let mut zero_arms = Vec::new();
    let mut bounds = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let label = field_label(ident);
        let ty = &field.ty;

        if is_visible(&field.vis) {
            table.push(quote! { ::structform_core::FieldInfo::public(#label) });
            value_arms.push(quote! {
                #index => ::core::option::Option::Some(
                    ::structform_core::Field::resolve(&self.#ident)
                ),
            });
            zero_arms.push(quote! {
                #index => ::core::option::Option::Some(
                    <#ty as ::structform_core::Field>::zero()
                ),
            });
            if mentions_type_param(ty, &type_params) {
                bounds.push(quote! { #ty: ::structform_core::Field });
            }
        } else {
            table.push(quote! { ::structform_core::FieldInfo::hidden(#label) });
        }
    }

    let fields_table = quote! {
        const FIELDS: &[::structform_core::FieldInfo] = &[#(#table),*];
    };

    let mut generics = opts.generics.clone();
    {
        let where_clause = generics.make_where_clause();
        for bound in &bounds {
            where_clause.predicates.push(syn::parse_quote!(#bound));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::structform_core::Record for #name #ty_generics #where_clause {
            fn record_name(&self) -> &'static str {
                #record_name
            }

            fn fields(&self) -> &'static [::structform_core::FieldInfo] {
                #fields_table
                FIELDS
            }

            fn field(
                &self,
                index: usize,
            ) -> ::core::option::Option<::structform_core::Resolved<'_>> {
                match index {
                    #(#value_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #impl_generics ::structform_core::Field for #name #ty_generics #where_clause {
            fn resolve(&self) -> ::structform_core::Resolved<'_> {
                ::structform_core::Resolved::Record(::structform_core::RecordRef::Borrowed(self))
            }

            fn zero() -> ::structform_core::Resolved<'static> {
                #fields_table
                let zero_field: ::structform_core::ZeroFieldFn = |index| match index {
                    #(#zero_arms)*
                    _ => ::core::option::Option::None,
                };
                ::structform_core::Resolved::Record(::structform_core::RecordRef::Owned(
                    ::std::boxed::Box::new(::structform_core::ZeroRecord::new(
                        #record_name,
                        FIELDS,
                        zero_field,
                    )),
                ))
            }
        }
    }
}

/// Declared name of a field as seen by callers (`r#type` -> `type`)
fn field_label(ident: &syn::Ident) -> String {
    ident.unraw().to_string()
}

/// Whether `ty` refers to any of the struct's type parameters
///
/// Only such field types get a `Field` bound.
fn mentions_type_param(ty: &syn::Type, params: &[&syn::Ident]) -> bool {
    fn walk(tokens: TokenStream2, params: &[&syn::Ident]) -> bool {
        tokens.into_iter().any(|tree| match tree {
            proc_macro2::TokenTree::Ident(ident) => params.iter().any(|param| **param == ident),
            proc_macro2::TokenTree::Group(group) => walk(group.stream(), params),
            _ => false,
        })
    }
    !params.is_empty() && walk(quote!(#ty), params)
}

/// Only plain `pub` fields are readable from outside the declaring crate
fn is_visible(vis: &syn::Visibility) -> bool {
    matches!(vis, syn::Visibility::Public(_))
}
