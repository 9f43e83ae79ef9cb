//! Positional and by-type access.

use core::cell::RefCell;

use hseq::prelude::*;
use hseq::{hseq, hseq_pat, HSeq};

#[test]
fn mixed_scenario() {
    let seq = hseq![1, '2', 3.3];

    assert_eq!(seq.get::<0>(), &1);
    assert_eq!(seq.get::<1>(), &'2');
    assert_eq!(seq.get::<2>(), &3.3);
    assert_eq!(seq.len(), 3);
    assert!(!seq.is_empty());
    assert!(hseq![].is_empty());
}

#[test]
fn typed_bindings_preserve_static_types() {
    let seq = hseq![1, '2', 3.3];

    // Each slot comes back with its original type, not an erased one.
    let a: &i32 = seq.get::<0>();
    let b: &char = seq.get::<1>();
    let c: &f64 = seq.get::<2>();

    assert_eq!((*a, *b, *c), (1, '2', 3.3));
}

#[test]
fn repeated_access_is_the_same_instance() {
    let seq = hseq![1, '2', 3.3];

    let first: *const char = seq.get::<1>();
    let second: *const char = seq.get::<1>();
    assert!(core::ptr::eq(first, second));
}

#[test]
fn write_through() {
    let mut seq = hseq![1, '2', 3.3];

    *seq.get_mut::<0>() += 41;
    *seq.get_mut::<1>() = 'x';

    assert_eq!(seq.get::<0>(), &42);
    assert_eq!(seq.get::<1>(), &'x');
    // Untouched slots keep their values.
    assert_eq!(seq.get::<2>(), &3.3);
}

#[test]
fn take_moves_the_element_out() {
    let seq = hseq![String::from("abc"), 7];
    let s: String = seq.take::<0>();
    assert_eq!(s, "abc");
}

#[test]
fn peano_index_form() {
    let seq = hseq![1, '2', 3.3];

    let b: &char = <HSeq![i32, char, f64] as At<hseq::Ix!(1)>>::at(&seq);
    assert_eq!(b, &'2');
}

#[test]
fn by_type_selector() {
    let mut seq = hseq![1, '2', 3.3];

    let c: &f64 = seq.select();
    assert_eq!(c, &3.3);

    let b: &mut char = seq.select_mut();
    *b = 'y';
    assert_eq!(seq.get::<1>(), &'y');
}

#[test]
fn default_construction() {
    let seq: HSeq![i32, String, f64] = Default::default();

    assert_eq!(seq.get::<0>(), &0);
    assert_eq!(seq.get::<1>(), "");
    assert_eq!(seq.get::<2>(), &0.0);
}

#[test]
fn destructuring() {
    let hseq_pat![a, b, c] = hseq![1, '2', 3.3];

    assert_eq!(a, 1);
    assert_eq!(b, '2');
    assert_eq!(c, 3.3);
}

#[test]
fn construction_evaluates_in_declaration_order() {
    let log = RefCell::new(Vec::new());
    let note = |i: i32| {
        log.borrow_mut().push(i);
        i
    };

    let _seq = hseq![note(1), note(2), note(3)];
    assert_eq!(*log.borrow(), vec![1, 2, 3]);
}
