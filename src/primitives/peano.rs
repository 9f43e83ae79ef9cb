//! Type-level positions.
//!
//! A position is a Peano number: `Z` is slot 0, `S<N>` is the slot after
//! `N`. Positions are types, so "which slot" is settled during trait
//! resolution, never at run time. The `SelectIndex` bridge maps const
//! generics onto these types so call sites can write plain integers.

use core::marker::PhantomData;

// =============================================================================
// Peano Numbers
// =============================================================================

/// Type-level position.
pub trait Peano: 'static {
    /// The position as a plain integer, for diagnostics and tests.
    const VALUE: usize;
}

/// Slot zero (base case).
pub struct Z;

impl Peano for Z {
    const VALUE: usize = 0;
}

/// Successor (S<N> = N + 1).
pub struct S<N>(PhantomData<N>);

impl<N: Peano> Peano for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Shorthand aliases D0..D32 for the first positions.
pub mod aliases {
    use super::{S, Z};

    macros::peano!(32);
}

// =============================================================================
// Const-to-Position conversion (Stable Rust approach)
// =============================================================================

/// Trait to select a position type from a const value.
pub trait SelectIndex<const N: usize> {
    type Out: Peano;
}

// Impls are globally coherent, so a private module keeps the generated
// names out of the way.
mod select_impls {
    use super::aliases::*;
    use super::SelectIndex;

    macros::select_index!(32);
}

/// Position type for a const index: `Ix<2>` = `S<S<Z>>`.
///
/// Covers indices 0..=32; for deeper sequences use the `Ix!` proc-macro,
/// which expands any literal.
pub type Ix<const N: usize> = <() as SelectIndex<N>>::Out;
