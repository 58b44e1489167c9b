//! Error types for the enigma library.
//!
//! Every error is raised while a machine or key is being configured. Once an
//! [`EnigmaMachine`](crate::EnigmaMachine) exists, conversion cannot fail.

use thiserror::Error;

/// Errors produced while building a machine configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Rotor identifier is not in the wiring catalog.
    #[error("unknown rotor type: {0:?}")]
    UnknownRotor(String),

    /// Initial rotor position is not a letter A-Z.
    #[error("rotor position must be a letter A-Z, got {0:?}")]
    InvalidRotorPosition(char),

    /// Rotor order does not name exactly three rotors.
    #[error("expected 3 rotors, got {0}")]
    RotorCount(usize),

    /// Rotor positions do not contain exactly three letters.
    #[error("expected 3 rotor positions, got {0}")]
    PositionCount(usize),

    /// Plugboard pair contains a character outside A-Z.
    #[error("plugboard letter must be A-Z, got {0:?}")]
    InvalidPlugboardLetter(char),

    /// Plugboard pair is not written as two letters.
    #[error("malformed plugboard pair: {0:?}")]
    MalformedPlugPair(String),

    /// More pairs than the 26 letters can hold.
    #[error("at most 13 plugboard pairs are allowed, got {0}")]
    TooManyPlugPairs(usize),
}

/// Errors produced by the Vigenère key schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Key has no characters.
    #[error("key must contain at least one letter")]
    EmptyKey,

    /// Key contains a character outside A-Z.
    #[error("key must only contain letters A-Z, got {0:?}")]
    InvalidKeyCharacter(char),
}
