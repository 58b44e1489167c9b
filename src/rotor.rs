//! Rotor: a rotating substitution permutation with a turnover notch.
//!
//! A rotor combines a static wiring from the catalog with a mutable
//! rotational offset. The letter shown in its window is always derived from
//! the offset. Cascade stepping across neighbors is coordinated by
//! [`RotorChain`](crate::RotorChain); a rotor only knows how to advance
//! itself and whether it sits at its notch.

use crate::alphabet;
use crate::error::ConfigurationError;
use crate::wiring::{RotorKind, RotorWiring};

/// Which way a signal crosses a rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// From the entry contacts toward the reflector.
    Forward,
    /// From the reflector back toward the entry contacts.
    Backward,
}

/// A single rotor with its current offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    kind: RotorKind,
    wiring: &'static RotorWiring,
    offset: u8,
}

impl Rotor {
    /// Creates a rotor of the given type with `window` showing.
    ///
    /// # Parameters
    /// - `kind`: Catalog rotor type.
    /// - `window`: Initial window letter, case-insensitive.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::InvalidRotorPosition`] if `window` is
    /// not a letter A-Z.
    pub fn new(kind: RotorKind, window: char) -> Result<Self, ConfigurationError> {
        let offset = alphabet::fold_index(window)
            .ok_or(ConfigurationError::InvalidRotorPosition(window))?;
        Ok(Rotor {
            kind,
            wiring: kind.wiring(),
            offset: offset as u8,
        })
    }

    /// Returns the catalog type of this rotor.
    pub fn kind(&self) -> RotorKind {
        self.kind
    }

    /// Returns the current rotational offset (0..26).
    pub fn offset(&self) -> usize {
        self.offset as usize
    }

    /// Returns the letter currently visible in the window.
    pub fn window(&self) -> char {
        alphabet::symbol_at(self.offset())
    }

    /// Returns the notch letter.
    pub fn notch(&self) -> char {
        alphabet::symbol_at(self.wiring.notch as usize)
    }

    /// Returns `true` when the window shows the notch letter.
    ///
    /// Checked before [`advance`](Self::advance) to decide whether the
    /// neighbor turns over on the same keystroke.
    pub fn at_notch(&self) -> bool {
        self.offset == self.wiring.notch
    }

    /// Rotates the rotor one position, wrapping Z back to A.
    pub fn advance(&mut self) {
        self.offset = alphabet::shift_up(self.offset(), 1) as u8;
    }

    /// Passes a signal at contact `index` through the rotor.
    ///
    /// The contact is shifted by the offset into the rotor's frame, mapped
    /// through the forward or backward table, and shifted back out.
    ///
    /// # Parameters
    /// - `index`: Input contact (0..26).
    /// - `direction`: Which table to use.
    ///
    /// # Returns
    /// Output contact (0..26).
    pub fn encode(&self, index: usize, direction: Direction) -> usize {
        let table = match direction {
            Direction::Forward => &self.wiring.forward,
            Direction::Backward => &self.wiring.backward,
        };
        let shifted = alphabet::shift_up(index, self.offset());
        let output = table[shifted] as usize;
        alphabet::shift_down(output, self.offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ALPHABET_LEN;

    #[test]
    fn test_new_sets_offset_from_window() {
        let rotor = Rotor::new(RotorKind::II, 'C').unwrap();
        assert_eq!(rotor.kind(), RotorKind::II);
        assert_eq!(rotor.offset(), 2);
        assert_eq!(rotor.window(), 'C');
        assert_eq!(rotor.notch(), 'E');
    }

    #[test]
    fn test_new_folds_lowercase_window() {
        let rotor = Rotor::new(RotorKind::I, 'q').unwrap();
        assert_eq!(rotor.window(), 'Q');
        assert!(rotor.at_notch());
    }

    #[test]
    fn test_new_rejects_non_letter_window() {
        assert_eq!(
            Rotor::new(RotorKind::I, '1'),
            Err(ConfigurationError::InvalidRotorPosition('1'))
        );
    }

    #[test]
    fn test_advance_wraps() {
        let mut rotor = Rotor::new(RotorKind::III, 'Y').unwrap();
        rotor.advance();
        assert_eq!(rotor.window(), 'Z');
        rotor.advance();
        assert_eq!(rotor.window(), 'A');
        assert_eq!(rotor.offset(), 0);
    }

    #[test]
    fn test_at_notch_only_at_notch_letter() {
        let mut rotor = Rotor::new(RotorKind::III, 'U').unwrap();
        assert!(!rotor.at_notch());
        rotor.advance();
        assert!(rotor.at_notch());
        rotor.advance();
        assert!(!rotor.at_notch());
    }

    #[test]
    fn test_encode_at_zero_offset_is_plain_wiring() {
        let rotor = Rotor::new(RotorKind::I, 'A').unwrap();
        // Rotor I maps A -> E, B -> K.
        assert_eq!(rotor.encode(0, Direction::Forward), 4);
        assert_eq!(rotor.encode(1, Direction::Forward), 10);
        assert_eq!(rotor.encode(4, Direction::Backward), 0);
    }

    #[test]
    fn test_encode_with_offset() {
        let rotor = Rotor::new(RotorKind::I, 'B').unwrap();
        // Contact A enters wiring at B -> K, leaves at K - 1 = J.
        assert_eq!(rotor.encode(0, Direction::Forward), 9);
    }

    #[test]
    fn test_backward_undoes_forward_at_every_offset() {
        for kind in RotorKind::ALL {
            let mut rotor = Rotor::new(kind, 'A').unwrap();
            for _ in 0..ALPHABET_LEN {
                for i in 0..ALPHABET_LEN {
                    let out = rotor.encode(i, Direction::Forward);
                    assert_eq!(rotor.encode(out, Direction::Backward), i);
                }
                rotor.advance();
            }
        }
    }
}
