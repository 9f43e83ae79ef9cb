//! Bridges to primitive tuples and argument spreading.
//!
//! The cons representation is uniform but tuples and function signatures
//! are per-arity, so the impls here are stamped out by the `arity!`
//! proc-macro for arities 0..=12.

/// Convert a primitive tuple into its cons representation.
///
/// ```
/// use hseq::hseq;
/// use hseq::prelude::*;
///
/// let seq = (1, '2', 3.3).into_seq();
/// assert_eq!(seq, hseq![1, '2', 3.3]);
/// ```
pub trait IntoSeq {
    type Seq;

    fn into_seq(self) -> Self::Seq;
}

/// Convert a cons sequence back into a primitive tuple.
pub trait IntoTuple {
    type Tuple;

    fn into_tuple(self) -> Self::Tuple;
}

/// Invoke a function with the sequence's elements spread as positional
/// arguments, in order. Works for any arity including zero.
///
/// ```
/// use hseq::hseq;
/// use hseq::prelude::*;
///
/// let sum = hseq![1, 2.5].unpack(|a: i32, b: f64| a as f64 + b);
/// assert_eq!(sum, 3.5);
///
/// let unit = hseq![].unpack(|| 42);
/// assert_eq!(unit, 42);
/// ```
pub trait Unpack<F, R> {
    fn unpack(self, f: F) -> R;
}

macros::arity!(12);
