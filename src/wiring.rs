//! Static wiring catalog: rotor permutations, notches and the reflector table.
//!
//! All tables are compile-time constants shared by every machine. Backward
//! (inverse) rotor tables are derived from the forward wiring rather than
//! written out by hand, so the two can never disagree.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::ALPHABET_LEN;
use crate::error::ConfigurationError;

/// A permutation of alphabet positions.
pub type Permutation = [u8; ALPHABET_LEN];

/// Reflector UKW-B wiring, written as the image of `A..Z`.
pub(crate) const UKW_B_WIRING: &[u8; ALPHABET_LEN] = b"YRUHQSLDPXNGOKMIEBFZCWVJAT";

/// Converts a letter wiring string into a table of positions.
pub(crate) const fn permutation(wiring: &[u8; ALPHABET_LEN]) -> Permutation {
    let mut table = [0u8; ALPHABET_LEN];
    let mut i = 0;
    while i < ALPHABET_LEN {
        table[i] = wiring[i] - b'A';
        i += 1;
    }
    table
}

/// Returns the inverse permutation: `inverse[table[i]] == i`.
pub(crate) const fn invert(table: &Permutation) -> Permutation {
    let mut inverse = [0u8; ALPHABET_LEN];
    let mut i = 0;
    while i < ALPHABET_LEN {
        inverse[table[i] as usize] = i as u8;
        i += 1;
    }
    inverse
}

/// Forward and backward tables plus the turnover notch of one rotor type.
#[derive(Debug, PartialEq, Eq)]
pub struct RotorWiring {
    /// Entry-to-reflector substitution.
    pub forward: Permutation,
    /// Reflector-to-entry substitution, the inverse of `forward`.
    pub backward: Permutation,
    /// Position of the window letter that triggers a turnover.
    pub notch: u8,
}

impl RotorWiring {
    const fn new(wiring: &[u8; ALPHABET_LEN], notch: u8) -> Self {
        let forward = permutation(wiring);
        RotorWiring {
            forward,
            backward: invert(&forward),
            notch: notch - b'A',
        }
    }
}

static ROTOR_I: RotorWiring = RotorWiring::new(b"EKMFLGDQVZNTOWYHXUSPAIBRCJ", b'Q');
static ROTOR_II: RotorWiring = RotorWiring::new(b"AJDKSIRUXBLHWTMCQGZNPYFVOE", b'E');
static ROTOR_III: RotorWiring = RotorWiring::new(b"BDFHJLCPRTXVZNYEIWGAKMUSQO", b'V');

/// Rotor catalog identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorKind {
    /// Rotor I, notch Q.
    I,
    /// Rotor II, notch E.
    II,
    /// Rotor III, notch V.
    III,
}

impl RotorKind {
    /// Every rotor in the catalog.
    pub const ALL: [RotorKind; 3] = [RotorKind::I, RotorKind::II, RotorKind::III];

    /// Returns the static wiring of this rotor type.
    pub fn wiring(self) -> &'static RotorWiring {
        match self {
            RotorKind::I => &ROTOR_I,
            RotorKind::II => &ROTOR_II,
            RotorKind::III => &ROTOR_III,
        }
    }

    /// Roman numeral name used in settings and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            RotorKind::I => "I",
            RotorKind::II => "II",
            RotorKind::III => "III",
        }
    }
}

impl fmt::Display for RotorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RotorKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RotorKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigurationError::UnknownRotor(s.to_string()))
    }
}
