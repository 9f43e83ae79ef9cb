//! Literal-to-Peano index conversion.

use proc_macro2::TokenStream;
use quote::quote;

use crate::inner::peano::CountInput;

pub fn expand_ix(input: CountInput) -> TokenStream {
    let mut ty = quote! { ::hseq::Z };
    for _ in 0..input.max {
        ty = quote! { ::hseq::S<#ty> };
    }
    ty
}
