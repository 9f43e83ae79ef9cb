//! # Layer 0: Primitives
//!
//! Basic building blocks for the sequence core:
//! - `bool.rs`: Type-level boolean logic (True/False).
//! - `peano.rs`: Type-level positions (Z, S, D0..D32) and the
//!   const-generic index bridge.

pub mod bool;
pub mod peano;
