//! Peano index generation macros.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, LitInt};

pub struct CountInput {
    pub max: usize,
}

impl Parse for CountInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        Ok(CountInput { max })
    }
}

pub fn expand_peano(input: CountInput) -> TokenStream {
    let max = input.max;

    // D0 = Z
    let mut types = vec![quote! { pub type D0 = Z; }];

    // D1..Dmax = S<D(n-1)>
    for n in 1..=max {
        let curr = syn::Ident::new(&format!("D{}", n), proc_macro2::Span::call_site());
        let prev = syn::Ident::new(&format!("D{}", n - 1), proc_macro2::Span::call_site());
        types.push(quote! { pub type #curr = S<#prev>; });
    }

    quote! { #(#types)* }
}

pub fn expand_select_index(input: CountInput) -> TokenStream {
    let max = input.max;

    let impls = (0..=max).map(|n| {
        let alias = syn::Ident::new(&format!("D{}", n), proc_macro2::Span::call_site());
        quote! {
            impl SelectIndex<#n> for () {
                type Out = #alias;
            }
        }
    });

    quote! { #(#impls)* }
}
