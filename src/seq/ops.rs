//! Derived operations: concatenation, transformation, flattening.
//!
//! All operations are pure: they consume their inputs and build new
//! sequences, preserving element order. Result types are computed by the
//! same recursion that builds the values, so every shape question is
//! settled at compile time.

use super::node::{HCons, HNil};

// =============================================================================
// Concatenation
// =============================================================================

/// Concatenate two sequences: elements of `self` followed by elements of
/// `Rhs`, each keeping its original type.
///
/// `HNil` is the identity on either side, and the operation is
/// associative up to element-wise equality.
pub trait Concat<Rhs> {
    type Out;

    fn concat(self, rhs: Rhs) -> Self::Out;
}

impl<Rhs> Concat<Rhs> for HNil {
    type Out = Rhs;

    #[inline]
    fn concat(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<H, T, Rhs> Concat<Rhs> for HCons<H, T>
where
    T: Concat<Rhs>,
{
    type Out = HCons<H, <T as Concat<Rhs>>::Out>;

    #[inline]
    fn concat(self, rhs: Rhs) -> Self::Out {
        HCons {
            head: self.head,
            tail: self.tail.concat(rhs),
        }
    }
}

// =============================================================================
// Transformation
// =============================================================================

/// A function polymorphic over its input type.
///
/// `transform` resolves one `Func<In>` impl per slot, so the same mapper
/// can return a different output type for every element type:
///
/// ```
/// use hseq::hseq;
/// use hseq::prelude::*;
///
/// struct Stringify;
///
/// impl Func<i32> for Stringify {
///     type Out = String;
///     fn call(&mut self, x: i32) -> String { x.to_string() }
/// }
/// impl Func<char> for Stringify {
///     type Out = String;
///     fn call(&mut self, x: char) -> String { x.to_string() }
/// }
///
/// let out = hseq![1, '2'].transform(&mut Stringify);
/// assert_eq!(out, hseq!["1".to_string(), "2".to_string()]);
/// ```
pub trait Func<In> {
    type Out;

    fn call(&mut self, input: In) -> Self::Out;
}

/// Element-wise transformation producing a new sequence of the same
/// length; output types may differ per slot.
pub trait Transform<F> {
    type Out;

    fn transform(self, f: &mut F) -> Self::Out;
}

impl<F> Transform<F> for HNil {
    type Out = HNil;

    #[inline]
    fn transform(self, _f: &mut F) -> HNil {
        HNil
    }
}

impl<H, T, F> Transform<F> for HCons<H, T>
where
    F: Func<H>,
    T: Transform<F>,
{
    type Out = HCons<<F as Func<H>>::Out, <T as Transform<F>>::Out>;

    #[inline]
    fn transform(self, f: &mut F) -> Self::Out {
        // Struct literal fields evaluate in declaration order: the head is
        // mapped before any tail element.
        HCons {
            head: f.call(self.head),
            tail: self.tail.transform(f),
        }
    }
}

// =============================================================================
// Flattening (n-way concatenation)
// =============================================================================

/// Concatenate every element of a sequence of sequences, in order.
///
/// Any operand may be empty; `hseq![]` contributes nothing. The variadic
/// `hconcat!` macro is sugar over binary `Concat`; `Flatten` is the
/// first-class form for an already-built sequence of sequences.
pub trait Flatten {
    type Out;

    fn flatten(self) -> Self::Out;
}

impl Flatten for HNil {
    type Out = HNil;

    #[inline]
    fn flatten(self) -> HNil {
        HNil
    }
}

impl<H, T> Flatten for HCons<H, T>
where
    T: Flatten,
    H: Concat<<T as Flatten>::Out>,
{
    type Out = <H as Concat<<T as Flatten>::Out>>::Out;

    #[inline]
    fn flatten(self) -> Self::Out {
        self.head.concat(self.tail.flatten())
    }
}
