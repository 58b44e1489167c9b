//! Reflector: the fixed involution that turns the signal back through the rotors.

use crate::alphabet::ALPHABET_LEN;
use crate::wiring::{permutation, Permutation, UKW_B_WIRING};

/// A fixed, fixed-point-free involutive permutation.
#[derive(Debug, PartialEq, Eq)]
pub struct Reflector {
    table: Permutation,
}

static UKW_B: Reflector = Reflector {
    table: permutation(UKW_B_WIRING),
};

impl Reflector {
    /// Returns the process-wide UKW-B reflector.
    pub fn ukw_b() -> &'static Reflector {
        &UKW_B
    }

    /// Maps contact `index` (0..26) to its paired contact.
    pub fn reflect(&self, index: usize) -> usize {
        self.table[index % ALPHABET_LEN] as usize
    }
}
