#![cfg_attr(not(feature = "std"), no_std)]

//! # hseq
//!
//! Fixed-arity heterogeneous sequences with compile-time indexed access.
//!
//! A sequence is a cons chain of `HCons` cells terminated by `HNil`; element
//! types are fixed at definition time and may all differ. The position used
//! by an access is a *type* (or a const generic bridged to one), so resolving
//! "which slot" happens entirely during trait resolution:
//!
//! ```text
//! hseq![1, '2', 3.3] : HCons<i32, HCons<char, HCons<f64, HNil>>>
//!
//! seq.get::<2>()  ->  Ix<2> = S<S<Z>>  ->  two fixed field projections
//! ```
//!
//! No slot is scanned, no length is checked at run time, and the element
//! comes back with its original static type. Out-of-range positions simply
//! do not implement the access trait, so they are rejected where the call
//! is written.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (True/False), Peano indices (Z, S, D0..D32), SelectIndex  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Sequence Core                                           |
//! |  - HNil, HCons, Seq (storage)                                     |
//! |  - At, Selector (access), Concat, Transform, Flatten (ops)        |
//! |  - Locate (static inner/outer remapping for concatenation)       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: User API                                                |
//! |  - hseq!, HSeq!, hseq_pat!, hconcat!, Ix!, tuple bridges          |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use hseq::hseq;
//! use hseq::prelude::*;
//!
//! let seq = hseq![1, '2', 3.3];
//!
//! assert_eq!(seq.get::<0>(), &1);
//! assert_eq!(seq.get::<1>(), &'2');
//! assert_eq!(seq.get::<2>(), &3.3);
//! assert!(!seq.is_empty());
//!
//! let longer = seq.concat(hseq!["abc", ()]);
//! assert_eq!(longer.len(), 5);
//! assert_eq!(longer.get::<3>(), &"abc");
//! ```
//!
//! ## Errors are compile errors
//!
//! Accessing a slot that does not exist fails to type-check:
//!
//! ```compile_fail
//! use hseq::hseq;
//! use hseq::prelude::*;
//!
//! let seq = hseq![1, '2'];
//! let _ = seq.get::<2>(); // no third slot: `At<Ix<2>>` is unimplemented
//! ```
//!
//! Default-constructing a sequence whose element types are not all
//! `Default` is rejected the same way:
//!
//! ```compile_fail
//! use hseq::HSeq;
//!
//! struct NoDefault;
//!
//! let seq: HSeq![i32, NoDefault] = Default::default();
//! ```

// Allow `::hseq` to work inside the crate itself (macro-generated code
// always uses absolute paths).
extern crate self as hseq;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Sequence Core
// =============================================================================
pub mod seq;

// Syntax macros (hseq!, HSeq!, hseq_pat!, hconcat!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::bool::{Bool, False, True};
pub use primitives::peano::{Ix, Peano, SelectIndex, S, Z};
pub use primitives::peano::aliases::*;

pub use seq::access::{At, Here, Selector, There, TypeAt};
pub use seq::convert::{IntoSeq, IntoTuple, Unpack};
pub use seq::node::{HCons, HNil, Seq};
pub use seq::ops::{Concat, Flatten, Func, Transform};
pub use seq::remap::{AtFlat, InnerOf, Locate, OuterOf};

// Re-export proc-macros
pub use macros::Ix;

/// Common items for working with sequences.
pub mod prelude {
    pub use crate::seq::{
        // Storage
        node::{HCons, HNil, Seq},
        // Access
        access::{At, Selector, TypeAt},
        // Derived operations
        convert::{IntoSeq, IntoTuple, Unpack},
        ops::{Concat, Flatten, Func, Transform},
        remap::AtFlat,
    };
    // Note: hseq!, HSeq!, hseq_pat!, hconcat! are #[macro_export] so they're
    // at crate root; Ix! is re-exported there as well.
}
