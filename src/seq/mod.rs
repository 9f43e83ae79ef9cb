//! # Layer 1: Sequence Core
//!
//! Storage and operations for fixed-arity heterogeneous sequences.
//!
//! - **Storage**: `HNil` (empty), `HCons` (one element + tail), `Seq`.
//! - **Access**: `At` (by position), `Selector` (by element type).
//! - **Operations**: `Concat`, `Transform`, `Flatten`, `Unpack`, tuple
//!   bridges.
//! - **Remapping**: `Locate` resolves an output slot of a concatenation to
//!   (source sequence, slot within it) entirely at the type level.

pub mod access;
pub mod convert;
pub mod node;
pub mod ops;
pub mod remap;
