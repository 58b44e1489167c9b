//! Repeating-key additive (Vigenère) cipher over the same alphabet.
//!
//! Stateless: each call derives the key schedule afresh. Text is
//! upper-cased, characters outside A-Z pass through, and the key only
//! advances on letters.

use crate::alphabet;
use crate::error::KeyError;

/// Encrypts `plaintext` by adding the repeating key, letter by letter.
///
/// # Errors
/// Returns [`KeyError`] if `key` is empty or contains a non-letter.
///
/// # Examples
///
/// ```
/// use enigma::vigenere;
///
/// let ciphertext = vigenere::encrypt("Attack at dawn", "LEMON").unwrap();
/// assert_eq!(ciphertext, "LXFOPV EF RNHR");
/// assert_eq!(vigenere::decrypt(&ciphertext, "lemon").unwrap(), "ATTACK AT DAWN");
/// ```
pub fn encrypt(plaintext: &str, key: &str) -> Result<String, KeyError> {
    apply(plaintext, key, alphabet::shift_up)
}

/// Decrypts `ciphertext` by subtracting the repeating key, letter by letter.
///
/// # Errors
/// Returns [`KeyError`] if `key` is empty or contains a non-letter.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String, KeyError> {
    apply(ciphertext, key, alphabet::shift_down)
}

/// Converts the key into a list of shifts, upper-casing it the same way as the text.
fn key_schedule(key: &str) -> Result<Vec<usize>, KeyError> {
    if key.is_empty() {
        return Err(KeyError::EmptyKey);
    }
    key.chars()
        .flat_map(char::to_uppercase)
        .map(|c| alphabet::index_of(c).ok_or(KeyError::InvalidKeyCharacter(c)))
        .collect()
}

fn apply(text: &str, key: &str, op: fn(usize, usize) -> usize) -> Result<String, KeyError> {
    let schedule = key_schedule(key)?;
    let mut shifts = schedule.into_iter().cycle();
    Ok(text
        .chars()
        .flat_map(char::to_uppercase)
        .map(|symbol| match alphabet::index_of(symbol) {
            Some(index) => shifts
                .next()
                .map_or(symbol, |shift| alphabet::symbol_at(op(index, shift))),
            None => symbol,
        })
        .collect())
}
