//! ROT13 character substitution.
//!
//! This crate provides the transform used by the `rot13` binary:
//! - Per-character substitution over the ASCII alphabet.
//! - Whole-string and in-place byte variants.
//!
//! The transform is total and self-inverse; characters outside `A-Za-z`
//! pass through unchanged.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod alphabet;
mod cipher;

pub use crate::cipher::{rot13, rot13_char, rot13_in_place};
