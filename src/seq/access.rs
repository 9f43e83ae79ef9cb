//! Element access.
//!
//! Two forms, both resolved entirely by trait resolution:
//!
//! - `At<I>`: access by type-level position. The impls descend one cons
//!   cell per `S` in the index, so the "lookup" compiles to a fixed chain
//!   of field projections.
//! - `Selector<T, I>`: access by element type, with the position witness
//!   `I` inferred (`Here` / `There<I>`). Usable when the element type is
//!   unambiguous in the sequence.
//!
//! Positions that fall outside the sequence implement neither trait, so an
//! out-of-range access is a type error at the call site.

use core::marker::PhantomData;

use crate::primitives::peano::{Peano, S, Z};

use super::node::HCons;

// =============================================================================
// Access by position
// =============================================================================

/// Access by type-level position.
pub trait At<I: Peano> {
    /// The original static type of the slot.
    type Out;

    fn at(&self) -> &Self::Out;
    fn at_mut(&mut self) -> &mut Self::Out;
    fn into_at(self) -> Self::Out
    where
        Self: Sized;
}

impl<H, T> At<Z> for HCons<H, T> {
    type Out = H;

    #[inline]
    fn at(&self) -> &H {
        &self.head
    }

    #[inline]
    fn at_mut(&mut self) -> &mut H {
        &mut self.head
    }

    #[inline]
    fn into_at(self) -> H {
        self.head
    }
}

impl<H, T, I> At<S<I>> for HCons<H, T>
where
    I: Peano,
    T: At<I>,
{
    type Out = <T as At<I>>::Out;

    #[inline]
    fn at(&self) -> &Self::Out {
        <T as At<I>>::at(&self.tail)
    }

    #[inline]
    fn at_mut(&mut self) -> &mut Self::Out {
        <T as At<I>>::at_mut(&mut self.tail)
    }

    #[inline]
    fn into_at(self) -> Self::Out {
        <T as At<I>>::into_at(self.tail)
    }
}

/// Element type at position `I` of sequence `Xs`.
pub type TypeAt<I, Xs> = <Xs as At<I>>::Out;

// =============================================================================
// Access by element type
// =============================================================================

/// Position witness: the element is at the head.
pub enum Here {}

/// Position witness: the element is somewhere in the tail.
pub struct There<I> {
    _marker: PhantomData<I>,
}

/// Access by element type. `I` is inferred and uniquely determined as long
/// as `T` occurs exactly once in the sequence.
pub trait Selector<T, I> {
    fn select(&self) -> &T;
    fn select_mut(&mut self) -> &mut T;
}

impl<T, Tail> Selector<T, Here> for HCons<T, Tail> {
    #[inline]
    fn select(&self) -> &T {
        &self.head
    }

    #[inline]
    fn select_mut(&mut self) -> &mut T {
        &mut self.head
    }
}

impl<Head, Tail, T, I> Selector<T, There<I>> for HCons<Head, Tail>
where
    Tail: Selector<T, I>,
{
    #[inline]
    fn select(&self) -> &T {
        self.tail.select()
    }

    #[inline]
    fn select_mut(&mut self) -> &mut T {
        self.tail.select_mut()
    }
}
