//! Procedural macros for the hseq heterogeneous sequence crate
//!
//! # Macro API
//!
//! | Macro | Kind | Purpose |
//! |-------|------|---------|
//! | `peano!(n)` | internal | Generate Peano index aliases `D0..Dn` |
//! | `select_index!(n)` | internal | Generate const-generic index bridge impls |
//! | `arity!(n)` | internal | Generate per-arity tuple/unpack impls |
//! | `Ix!(lit)` | user | Integer literal to Peano index type |
//!
//! The `internal` macros are invoked once inside `hseq` itself to stamp out
//! the per-index and per-arity impl families; only `Ix!` is meant for call
//! sites outside the crate.

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (two-tier: inner / user)
// =============================================================================

mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate Peano index type aliases D0..Dn.
///
/// # Usage
/// ```ignore
/// peano!(32);  // Generates D0 = Z, D1 = S<D0>, ..., D32 = S<D31>
/// ```
#[proc_macro]
pub fn peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::CountInput);
    inner::peano::expand_peano(input).into()
}

/// Generate `SelectIndex<const N: usize>` impls for `()` covering 0..=n.
///
/// Bridges const-generic call sites (`seq.get::<2>()`) to the Peano index
/// types the access traits are keyed on.
#[proc_macro]
pub fn select_index(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::CountInput);
    inner::peano::expand_select_index(input).into()
}

/// Generate the per-arity impl families for arities 0..=n:
///
/// - `IntoSeq` for tuples `()` .. `(T0, ..., Tn-1)`
/// - `IntoTuple` for the corresponding cons types
/// - `Unpack<F, R>` spreading a sequence's elements as call arguments
///
/// # Usage
/// ```ignore
/// arity!(12);
/// ```
#[proc_macro]
pub fn arity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::arity::ArityInput);
    inner::arity::expand_arity(input).into()
}

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Convert an integer literal to its Peano index type.
///
/// Usable in type position wherever an access trait wants an index:
///
/// ```ignore
/// let x: &f64 = seq.at::<Ix!(2)>();
/// ```
#[proc_macro]
#[allow(non_snake_case)]
pub fn Ix(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::CountInput);
    user::index::expand_ix(input).into()
}
