//! Builds a sequence of mixed types and exercises every operation.
//!
//! Everything interesting happens at compile time: each `get::<N>()`
//! below compiles to a fixed chain of field projections, and a wrong
//! index would fail to type-check instead of failing here.

use hseq::hseq;
use hseq::prelude::*;

struct Stringify;

impl Func<i32> for Stringify {
    type Out = String;
    fn call(&mut self, x: i32) -> String {
        x.to_string()
    }
}

impl Func<char> for Stringify {
    type Out = String;
    fn call(&mut self, x: char) -> String {
        x.to_string()
    }
}

impl Func<f64> for Stringify {
    type Out = String;
    fn call(&mut self, x: f64) -> String {
        x.to_string()
    }
}

fn main() {
    // Construction and access
    let seq = hseq![1, '2', 3.3];
    assert_eq!(seq.get::<0>(), &1);
    assert_eq!(seq.get::<1>(), &'2');
    assert_eq!(seq.get::<2>(), &3.3);
    assert!(!seq.is_empty());
    assert!(hseq![].is_empty());

    // Concatenation
    let longer = seq.concat(hseq!["abc", ()]);
    assert_eq!(longer.len(), 5);
    assert_eq!(longer.get::<3>(), &"abc");
    assert_eq!(longer.get::<4>(), &());

    // Prepend / append
    let wrapped = hseq!['2'].prepend(1).append(3.3);
    assert_eq!(wrapped, hseq![1, '2', 3.3]);

    // Transformation
    let strings = hseq![1, '2', 3.3].transform(&mut Stringify);
    assert_eq!(
        strings,
        hseq!["1".to_string(), "2".to_string(), "3.3".to_string()]
    );

    // Unpacking
    let summary = hseq![1, '2', 3.3].unpack(|a: i32, b: char, c: f64| format!("{a} {b} {c}"));
    assert_eq!(summary, "1 2 3.3");

    println!("mixed_types: all assertions passed");
}
