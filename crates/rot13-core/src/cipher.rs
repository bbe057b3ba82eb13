//! Public ROT13 transform surface.

use crate::alphabet::rotate_letter;

#[inline]
fn rot13_byte(byte: u8) -> u8 {
    match byte {
        b'A'..=b'Z' => rotate_letter(byte, b'A'),
        b'a'..=b'z' => rotate_letter(byte, b'a'),
        _ => byte,
    }
}

/// Applies ROT13 to a single character.
///
/// ASCII letters are rotated 13 positions within their case range; every
/// other character is returned unchanged.
#[inline]
pub fn rot13_char(c: char) -> char {
    if c.is_ascii() {
        char::from(rot13_byte(c as u8))
    } else {
        c
    }
}

/// Applies ROT13 to every character of `input`, preserving order and length.
///
/// The transform is its own inverse: `rot13(&rot13(s)) == s` for any `s`.
pub fn rot13(input: &str) -> String {
    input.chars().map(rot13_char).collect()
}

/// Applies ROT13 to a byte buffer in place.
///
/// Only ASCII letter bytes change; UTF-8 continuation bytes are above the
/// ASCII range and pass through, so valid UTF-8 stays valid.
pub fn rot13_in_place(buf: &mut [u8]) {
    for byte in buf.iter_mut() {
        *byte = rot13_byte(*byte);
    }
}
