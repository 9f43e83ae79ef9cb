//! Type-level boolean logic.
//!
//! Core types: `True`, `False`, `Bool` trait.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> picks one of two types.
    type If<Then, Else>;
}

/// Type-level True.
#[derive(Debug)]
pub struct True;

/// Type-level False.
#[derive(Debug)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
}

impl Bool for False {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
}
