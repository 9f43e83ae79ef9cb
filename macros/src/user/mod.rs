//! User-facing macros.

pub mod index;
