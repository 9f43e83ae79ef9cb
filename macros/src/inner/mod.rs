//! Crate-internal codegen: Peano alias and arity-family generation.

pub mod arity;
pub mod peano;
