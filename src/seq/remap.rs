//! Static inner/outer index remapping for concatenation.
//!
//! Concatenating sequences of lengths `N` and `M` means every output slot
//! `K` has a unique source: an **outer** index picking which input it came
//! from and an **inner** index picking the slot within that input.
//! `Locate` computes both coordinates by trait resolution, once, at the
//! type that uses them; `AtFlat` then reads slot `K` of the (virtual)
//! concatenation with exactly two fixed descents and no search.
//!
//! ```
//! use hseq::hseq;
//! use hseq::prelude::*;
//! use hseq::D2;
//!
//! let sources = hseq![hseq![1, '2'], hseq![], hseq![3.3]];
//!
//! // Slot 2 of the concatenation lives in source 2, slot 0.
//! assert_eq!(AtFlat::<D2>::at_flat(&sources), &3.3);
//! ```

use core::marker::PhantomData;

use crate::primitives::peano::{Peano, S, Z};

use super::access::At;
use super::node::{HCons, HNil};

// =============================================================================
// Probing one source
// =============================================================================

/// Probe result: the position lands inside the probed sequence.
pub struct Within;

/// Probe result: the position lies `K` slots past the probed sequence's
/// end.
pub struct Past<K> {
    _marker: PhantomData<K>,
}

/// Walk a sequence and a position together, one cell and one successor
/// per step, to decide whether the position falls inside it.
pub trait Probe<K: Peano> {
    type Out;
}

impl<K: Peano> Probe<K> for HNil {
    type Out = Past<K>;
}

impl<H, T> Probe<Z> for HCons<H, T> {
    type Out = Within;
}

impl<H, T, K> Probe<S<K>> for HCons<H, T>
where
    K: Peano,
    T: Probe<K>,
{
    type Out = <T as Probe<K>>::Out;
}

// =============================================================================
// Locating across sources
// =============================================================================

/// Resolve output slot `K` of a concatenation to its source coordinates.
///
/// Implemented for sequences of sequences; `Outer` selects the source and
/// `Inner` the slot within it.
pub trait Locate<K: Peano> {
    /// Which source sequence.
    type Outer: Peano;
    /// Slot within that source.
    type Inner: Peano;
}

impl<A, Rest, K> Locate<K> for HCons<A, Rest>
where
    K: Peano,
    A: Probe<K>,
    <A as Probe<K>>::Out: LocateDispatch<Rest, K>,
{
    type Outer = <<A as Probe<K>>::Out as LocateDispatch<Rest, K>>::Outer;
    type Inner = <<A as Probe<K>>::Out as LocateDispatch<Rest, K>>::Inner;
}

/// Helper dispatching on the probe result for the first source.
pub trait LocateDispatch<Rest, K: Peano> {
    type Outer: Peano;
    type Inner: Peano;
}

// The slot is in the first source: outer 0, inner is the probe position.
impl<Rest, K: Peano> LocateDispatch<Rest, K> for Within {
    type Outer = Z;
    type Inner = K;
}

// The slot is further along: recurse with the leftover position.
impl<Rest, K, R> LocateDispatch<Rest, K> for Past<R>
where
    K: Peano,
    R: Peano,
    Rest: Locate<R>,
{
    type Outer = S<<Rest as Locate<R>>::Outer>;
    type Inner = <Rest as Locate<R>>::Inner;
}

// =============================================================================
// Reading through the remap
// =============================================================================

/// Outer coordinate of slot `K` across `Seqs`.
pub type OuterOf<K, Seqs> = <Seqs as Locate<K>>::Outer;

/// Inner coordinate of slot `K` across `Seqs`.
pub type InnerOf<K, Seqs> = <Seqs as Locate<K>>::Inner;

/// Read slot `K` of the concatenation of a sequence of sequences without
/// building the concatenation.
pub trait AtFlat<K: Peano> {
    type Out;

    fn at_flat(&self) -> &Self::Out;
}

impl<Seqs, K> AtFlat<K> for Seqs
where
    K: Peano,
    Seqs: Locate<K> + At<OuterOf<K, Seqs>>,
    <Seqs as At<OuterOf<K, Seqs>>>::Out: At<InnerOf<K, Seqs>>,
{
    type Out = <<Seqs as At<OuterOf<K, Seqs>>>::Out as At<InnerOf<K, Seqs>>>::Out;

    #[inline]
    fn at_flat(&self) -> &Self::Out {
        let source = <Seqs as At<OuterOf<K, Seqs>>>::at(self);
        <<Seqs as At<OuterOf<K, Seqs>>>::Out as At<InnerOf<K, Seqs>>>::at(source)
    }
}
