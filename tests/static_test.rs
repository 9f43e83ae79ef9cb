//! Type-level facts: slot types, lengths, emptiness, index bridging.
//!
//! Everything here is checked by the compiler; the `#[test]` functions
//! exist only so the assertions are part of the test build.

use static_assertions::{assert_type_eq_all, const_assert_eq};

use hseq::prelude::*;
use hseq::{False, HSeq, Ix, S, True, TypeAt, Z, D0, D1, D2};

type Three = HSeq![i32, char, f64];

// Slot types are preserved exactly.
assert_type_eq_all!(TypeAt<D0, Three>, i32);
assert_type_eq_all!(TypeAt<D1, Three>, char);
assert_type_eq_all!(TypeAt<D2, Three>, f64);

// The const-generic bridge and the literal macro agree with the raw
// Peano spelling.
assert_type_eq_all!(Ix<2>, S<S<Z>>, hseq::Ix!(2), D2);

// Emptiness is a type-level fact.
assert_type_eq_all!(<HNil as Seq>::IsEmpty, True);
assert_type_eq_all!(<Three as Seq>::IsEmpty, False);

// Lengths are type-level constants.
const_assert_eq!(<HNil as Seq>::LEN, 0);
const_assert_eq!(<Three as Seq>::LEN, 3);

// Concatenation result types: length adds, order is preserved, and the
// operation associates.
type A = HSeq![i32, char];
type B = HSeq![f64];
type C = HSeq![&'static str];

assert_type_eq_all!(<A as Concat<HNil>>::Out, A);
assert_type_eq_all!(<HNil as Concat<A>>::Out, A);
assert_type_eq_all!(
    <<A as Concat<B>>::Out as Concat<C>>::Out,
    <A as Concat<<B as Concat<C>>::Out>>::Out,
    HSeq![i32, char, f64, &'static str]
);

const_assert_eq!(
    <<A as Concat<B>>::Out as Seq>::LEN,
    <A as Seq>::LEN + <B as Seq>::LEN
);

#[test]
fn static_assertions_compiled() {}
