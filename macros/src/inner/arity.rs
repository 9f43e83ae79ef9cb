//! Per-arity impl family generation.
//!
//! The cons representation is uniform, but three pieces of the API are
//! inherently per-arity: the bridge to primitive tuples (both directions)
//! and `unpack`, which spreads a sequence's elements as positional call
//! arguments. This module stamps out those impls for arities 0..=n.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

pub use super::peano::CountInput as ArityInput;

/// Cons type for element types `vars`: `HCons<T0, HCons<T1, ... HNil>>`.
fn seq_type(vars: &[Ident]) -> TokenStream {
    let mut ty = quote! { ::hseq::HNil };
    for v in vars.iter().rev() {
        ty = quote! { ::hseq::HCons<#v, #ty> };
    }
    ty
}

/// Irrefutable pattern binding each slot to the ident in `vals`.
fn seq_pattern(vals: &[Ident]) -> TokenStream {
    let mut pat = quote! { ::hseq::HNil };
    for v in vals.iter().rev() {
        pat = quote! { ::hseq::HCons { head: #v, tail: #pat } };
    }
    pat
}

/// Constructor expression consuming the idents in `vals` front to back.
fn seq_expr(vals: &[Ident]) -> TokenStream {
    let mut expr = quote! { ::hseq::HNil };
    for v in vals.iter().rev() {
        expr = quote! { ::hseq::HCons { head: #v, tail: #expr } };
    }
    expr
}

fn expand_one(n: usize) -> TokenStream {
    let tys: Vec<Ident> = (0..n)
        .map(|i| Ident::new(&format!("T{}", i), Span::call_site()))
        .collect();
    let vals: Vec<Ident> = (0..n)
        .map(|i| Ident::new(&format!("v{}", i), Span::call_site()))
        .collect();

    let seq_ty = seq_type(&tys);
    let seq_pat = seq_pattern(&vals);
    let seq_build = seq_expr(&vals);

    // `(T0,)` needs the trailing comma; `()` has no params at all.
    let tuple_ty = quote! { ( #(#tys,)* ) };
    let tuple_pat = quote! { ( #(#vals,)* ) };

    quote! {
        impl<#(#tys),*> ::hseq::IntoSeq for #tuple_ty {
            type Seq = #seq_ty;

            #[inline]
            fn into_seq(self) -> Self::Seq {
                let #tuple_pat = self;
                #seq_build
            }
        }

        impl<#(#tys),*> ::hseq::IntoTuple for #seq_ty {
            type Tuple = #tuple_ty;

            #[inline]
            fn into_tuple(self) -> Self::Tuple {
                let #seq_pat = self;
                #tuple_pat
            }
        }

        impl<F, R, #(#tys),*> ::hseq::Unpack<F, R> for #seq_ty
        where
            F: FnOnce(#(#tys),*) -> R,
        {
            #[inline]
            fn unpack(self, f: F) -> R {
                let #seq_pat = self;
                f(#(#vals),*)
            }
        }
    }
}

pub fn expand_arity(input: ArityInput) -> TokenStream {
    let impls = (0..=input.max).map(expand_one);
    quote! { #(#impls)* }
}
