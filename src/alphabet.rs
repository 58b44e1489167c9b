//! The 26-symbol alphabet shared by every cipher component.
//!
//! Symbols are the ASCII uppercase letters `A..Z`, mapped to positions
//! `0..26`. All rotor, reflector and key arithmetic is done on positions
//! modulo [`ALPHABET_LEN`].

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// The alphabet in position order.
pub const ALPHABET: [u8; ALPHABET_LEN] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Returns the position of an uppercase letter, or `None` for any other character.
///
/// Lowercase letters are not folded here; callers decide whether to
/// case-fold before lookup.
pub fn index_of(symbol: char) -> Option<usize> {
    if symbol.is_ascii_uppercase() {
        Some((symbol as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Returns the symbol at `index`, wrapping modulo [`ALPHABET_LEN`].
pub fn symbol_at(index: usize) -> char {
    ALPHABET[index % ALPHABET_LEN] as char
}

/// Case-folds an ASCII letter and returns its position.
pub(crate) fn fold_index(symbol: char) -> Option<usize> {
    index_of(symbol.to_ascii_uppercase())
}

/// `(a + b) mod 26`.
pub(crate) fn shift_up(a: usize, b: usize) -> usize {
    (a + b) % ALPHABET_LEN
}

/// `(a - b) mod 26`, never negative.
pub(crate) fn shift_down(a: usize, b: usize) -> usize {
    (a + ALPHABET_LEN - b % ALPHABET_LEN) % ALPHABET_LEN
}
