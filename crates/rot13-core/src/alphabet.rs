//! Alphabet constants and the letter rotation primitive.

/// Positions each letter is shifted; half the alphabet, so the shift is its
/// own inverse.
pub const SHIFT: u8 = 13;

/// Number of letters in the ASCII alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Rotates an ASCII letter byte by [`SHIFT`] within the case range starting
/// at `base` (`b'A'` or `b'a'`), wrapping modulo [`ALPHABET_LEN`].
#[inline]
pub fn rotate_letter(byte: u8, base: u8) -> u8 {
    base + (byte - base + SHIFT) % ALPHABET_LEN
}
