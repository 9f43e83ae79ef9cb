//! Static inner/outer remapping for concatenation.
//!
//! Every output slot of a concatenation is resolved to (source, slot
//! within source) during trait resolution; these tests pin down both the
//! computed coordinates and the values read through them.

use static_assertions::assert_type_eq_all;

use hseq::prelude::*;
use hseq::{hseq, HSeq, InnerOf, OuterOf, Peano, D0, D1, D2, D3};

type Srcs = HSeq![HSeq![i32, char], HSeq![], HSeq![f64, &'static str]];

// Concatenation [1, '2'] ++ [] ++ [3.3, "abc"]:
//   outer indices per output slot: [0, 0, 2, 2]
//   inner indices per output slot: [0, 1, 0, 1]
assert_type_eq_all!(OuterOf<D0, Srcs>, D0);
assert_type_eq_all!(InnerOf<D0, Srcs>, D0);
assert_type_eq_all!(OuterOf<D1, Srcs>, D0);
assert_type_eq_all!(InnerOf<D1, Srcs>, D1);
assert_type_eq_all!(OuterOf<D2, Srcs>, D2);
assert_type_eq_all!(InnerOf<D2, Srcs>, D0);
assert_type_eq_all!(OuterOf<D3, Srcs>, D2);
assert_type_eq_all!(InnerOf<D3, Srcs>, D1);

fn sources() -> Srcs {
    hseq![hseq![1, '2'], hseq![], hseq![3.3, "abc"]]
}

#[test]
fn coordinates_as_integers() {
    assert_eq!(<OuterOf<D2, Srcs> as Peano>::VALUE, 2);
    assert_eq!(<InnerOf<D2, Srcs> as Peano>::VALUE, 0);
    assert_eq!(<OuterOf<D3, Srcs> as Peano>::VALUE, 2);
    assert_eq!(<InnerOf<D3, Srcs> as Peano>::VALUE, 1);
}

#[test]
fn at_flat_reads_through_the_remap() {
    let srcs = sources();

    assert_eq!(AtFlat::<D0>::at_flat(&srcs), &1);
    assert_eq!(AtFlat::<D1>::at_flat(&srcs), &'2');
    assert_eq!(AtFlat::<D2>::at_flat(&srcs), &3.3);
    assert_eq!(AtFlat::<D3>::at_flat(&srcs), &"abc");
}

#[test]
fn at_flat_agrees_with_flatten() {
    let srcs = sources();
    let flat = sources().flatten();

    assert_eq!(AtFlat::<D0>::at_flat(&srcs), flat.get::<0>());
    assert_eq!(AtFlat::<D1>::at_flat(&srcs), flat.get::<1>());
    assert_eq!(AtFlat::<D2>::at_flat(&srcs), flat.get::<2>());
    assert_eq!(AtFlat::<D3>::at_flat(&srcs), flat.get::<3>());
}

#[test]
fn leading_empty_sources_are_skipped() {
    let srcs = hseq![hseq![], hseq![], hseq![7]];

    type Skewed = HSeq![HSeq![], HSeq![], HSeq![i32]];
    assert_type_eq_all!(OuterOf<D0, Skewed>, D2);
    assert_type_eq_all!(InnerOf<D0, Skewed>, D0);

    assert_eq!(AtFlat::<D0>::at_flat(&srcs), &7);
}
