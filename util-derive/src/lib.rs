#![warn(clippy::nursery)]
#![allow(clippy::option_if_let_else)]

use check_keyword::CheckKeyword;
use convert_case::{Case, Casing};
use darling::{
    FromDeriveInput, FromField, FromVariant,
    ast::{Data, Fields, Style},
    util::Ignored,
};
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{DeriveInput, Generics, Type};

#[derive(Debug, FromField)]
#[darling(attributes(ctor))]
struct CtorField {
    ident: Option<Ident>,
    ty: Type,
    name: Option<String>,
    #[darling(default)]
    into: bool,
}

#[derive(Debug, FromVariant)]
struct CtorVariant {
    ident: Ident,
    fields: Fields<CtorField>,
}

#[derive(Debug, FromDeriveInput)]
#[darling(supports(enum_any))]
struct CtorDeriveInput {
    ident: Ident,
    generics: Generics,
    data: Data<CtorVariant, Ignored>,
}

impl CtorField {
    fn arg_ident(&self, i: usize) -> Ident {
        if let Some(name) = &self.name {
            Ident::new(name, Span::call_site())
        } else if let Some(ident) = &self.ident {
            ident.clone()
        } else {
            Ident::new(&format!("arg{i}"), Span::call_site())
        }
    }

    /// The parameter in the constructor signature and the expression that
    /// turns it into the field value.
    fn arg_and_value(&self, i: usize) -> (TokenStream2, TokenStream2) {
        let arg_ident = self.arg_ident(i);
        let ty = &self.ty;
        if self.into {
            (
                quote! { #arg_ident: impl ::std::convert::Into<#ty> },
                quote! { #arg_ident.into() },
            )
        } else {
            (quote! { #arg_ident: #ty }, quote! { #arg_ident })
        }
    }
}

impl CtorVariant {
    fn fn_ident(&self) -> Ident {
        let mut fn_name = self.ident.to_string().to_case(Case::Snake);
        if fn_name.is_keyword() {
            fn_name.push('_');
        }
        Ident::new(&fn_name, self.ident.span())
    }

    fn constructor(&self) -> TokenStream2 {
        let variant_ident = &self.ident;
        let fn_ident = self.fn_ident();

        let (args, values): (Vec<_>, Vec<_>) = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| field.arg_and_value(i))
            .unzip();

        let fn_body = match self.fields.style {
            Style::Unit => quote! { Self::#variant_ident },
            Style::Tuple => quote! { Self::#variant_ident(#(#values),*) },
            Style::Struct => {
                let field_idents = self.fields.iter().filter_map(|field| field.ident.as_ref());
                quote! { Self::#variant_ident { #(#field_idents: #values),* } }
            }
        };

        quote! {
            #[must_use]
            pub fn #fn_ident(#(#args),*) -> Self {
                #fn_body
            }
        }
    }
}

impl CtorDeriveInput {
    fn derive_constructors(&self) -> syn::Result<TokenStream2> {
        let ident = &self.ident;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let Some(variants) = self.data.as_ref().take_enum() else {
            return Err(syn::Error::new(ident.span(), "expected an enum"));
        };

        let constructors = variants.iter().map(|variant| variant.constructor());

        Ok(quote! {
            impl #impl_generics #ident #ty_generics #where_clause {
                #(#constructors)*
            }
        })
    }
}

/// For each variant in the enum, generate a snake_case constructor function
/// returning `Self`.
///
/// Fields marked `#[ctor(into)]` take `impl Into<FieldType>`, so a
/// `Box<Self>` child can be passed by value. `#[ctor(name = "...")]` names
/// the parameter of a tuple field.
#[proc_macro_derive(Constructors, attributes(ctor))]
pub fn constructors_derive(input: TokenStream) -> TokenStream {
    let ast = syn::parse_macro_input!(input as DeriveInput);
    let input = match CtorDeriveInput::from_derive_input(&ast) {
        Ok(input) => input,
        Err(err) => return err.write_errors().into(),
    };
    input
        .derive_constructors()
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
