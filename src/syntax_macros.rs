//! Construction and destructuring macros.
//!
//! `hseq!` builds values, `HSeq!` names types, `hseq_pat!` destructures,
//! and `hconcat!` folds any number of sequences into one.

// =============================================================================
// hseq! - build a sequence value
// =============================================================================

/// Build a sequence value: `hseq![1, '2', 3.3]`. `hseq![]` is the empty
/// sequence.
#[macro_export]
macro_rules! hseq {
    [] => { $crate::HNil };
    [$head:expr $(, $tail:expr)* $(,)?] => {
        $crate::HCons {
            head: $head,
            tail: $crate::hseq![$($tail),*],
        }
    };
}

// =============================================================================
// HSeq! - name a sequence type
// =============================================================================

/// Name a sequence type: `HSeq![i32, char, f64]`.
#[macro_export]
macro_rules! HSeq {
    [] => { $crate::HNil };
    [$head:ty $(, $tail:ty)* $(,)?] => {
        $crate::HCons<$head, $crate::HSeq![$($tail),*]>
    };
}

// =============================================================================
// hseq_pat! - destructure a sequence
// =============================================================================

/// Destructure a sequence: `let hseq_pat![a, b, c] = seq;`
#[macro_export]
macro_rules! hseq_pat {
    [] => { $crate::HNil };
    [$head:pat $(, $tail:pat)* $(,)?] => {
        $crate::HCons {
            head: $head,
            tail: $crate::hseq_pat![$($tail),*],
        }
    };
}

// =============================================================================
// hconcat! - variadic concatenation
// =============================================================================

/// Concatenate any number of sequences: `hconcat![a, b, c]`. Folds to the
/// right over binary `Concat`, so any operand may be empty.
#[macro_export]
macro_rules! hconcat {
    [] => { $crate::HNil };
    [$only:expr $(,)?] => { $only };
    [$first:expr $(, $rest:expr)+ $(,)?] => {
        $crate::Concat::concat($first, $crate::hconcat![$($rest),+])
    };
}
