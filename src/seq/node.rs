//! Sequence storage: `HNil`, `HCons`, and the `Seq` trait.

use crate::primitives::bool::{Bool, False, True};
use crate::primitives::peano::{Ix, SelectIndex};

use super::access::At;
use super::ops::Concat;

/// The empty sequence. Zero elements, zero storage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HNil;

/// One element followed by a tail sequence.
///
/// Element order is declaration order and is never changed by any
/// operation. `Default` exists exactly when every element type is
/// `Default`. Fields drop in declaration order, so a sequence tears down
/// front to back.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HCons<H, T> {
    pub head: H,
    pub tail: T,
}

impl<H, T> HCons<H, T> {
    pub fn new(head: H, tail: T) -> Self {
        Self { head, tail }
    }
}

// =============================================================================
// Seq trait
// =============================================================================

/// Common surface of every sequence.
///
/// Length and emptiness are type-level facts; the runtime methods only
/// read constants. Positional access goes through the `SelectIndex`
/// bridge so call sites can use plain integers:
///
/// ```
/// use hseq::hseq;
/// use hseq::prelude::*;
///
/// let mut seq = hseq![1, '2'];
/// assert_eq!(seq.get::<1>(), &'2');
/// *seq.get_mut::<0>() += 1;
/// assert_eq!(seq.take::<0>(), 2);
/// ```
pub trait Seq: Sized {
    /// Number of elements, fixed at the type level.
    const LEN: usize;

    /// Type-level emptiness flag.
    type IsEmpty: Bool;

    fn len(&self) -> usize {
        Self::LEN
    }

    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }

    /// Borrow the element at position `N`.
    fn get<const N: usize>(&self) -> &<Self as At<Ix<N>>>::Out
    where
        (): SelectIndex<N>,
        Self: At<Ix<N>>,
    {
        <Self as At<Ix<N>>>::at(self)
    }

    /// Mutably borrow the element at position `N`.
    fn get_mut<const N: usize>(&mut self) -> &mut <Self as At<Ix<N>>>::Out
    where
        (): SelectIndex<N>,
        Self: At<Ix<N>>,
    {
        <Self as At<Ix<N>>>::at_mut(self)
    }

    /// Move the element at position `N` out, consuming the sequence.
    fn take<const N: usize>(self) -> <Self as At<Ix<N>>>::Out
    where
        (): SelectIndex<N>,
        Self: At<Ix<N>>,
    {
        <Self as At<Ix<N>>>::into_at(self)
    }

    /// New sequence with `x` in front.
    fn prepend<X>(self, x: X) -> HCons<X, Self> {
        HCons { head: x, tail: self }
    }

    /// New sequence with `x` at the back; concatenation with a singleton.
    fn append<X>(self, x: X) -> <Self as Concat<HCons<X, HNil>>>::Out
    where
        Self: Concat<HCons<X, HNil>>,
    {
        self.concat(HCons { head: x, tail: HNil })
    }
}

impl Seq for HNil {
    const LEN: usize = 0;
    type IsEmpty = True;
}

impl<H, T: Seq> Seq for HCons<H, T> {
    const LEN: usize = 1 + T::LEN;
    type IsEmpty = False;
}
