//! RotorChain: three rotors wired in series.
//!
//! The chain owns its rotors in a flat array and resolves neighbors by
//! index; rotors hold no links to each other. Position 0 is the entry
//! rotor: it is stepped directly on every keystroke and is the first rotor
//! on the forward signal path. The cascade neighbor of position `p` is `p + 1`; the
//! backward signal path visits positions in reverse order.

use tracing::trace;

use crate::error::ConfigurationError;
use crate::rotor::{Direction, Rotor};
use crate::wiring::RotorKind;

/// Number of rotors in a chain.
pub const CHAIN_LEN: usize = 3;

/// Position of the rotor stepped by every keystroke.
const ENTRY: usize = 0;

/// Ordered, exclusively owned triple of rotors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorChain {
    rotors: [Rotor; CHAIN_LEN],
}

impl RotorChain {
    /// Creates a chain from already constructed rotors, entry rotor first.
    pub fn new(rotors: [Rotor; CHAIN_LEN]) -> Self {
        RotorChain { rotors }
    }

    /// Builds a chain from catalog types and initial window letters.
    ///
    /// # Parameters
    /// - `order`: Rotor types, entry rotor first.
    /// - `positions`: Initial window letters, in the same order as `order`.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::InvalidRotorPosition`] if any window
    /// letter is not A-Z.
    pub fn from_settings(
        order: &[RotorKind; CHAIN_LEN],
        positions: &[char; CHAIN_LEN],
    ) -> Result<Self, ConfigurationError> {
        let [a, b, c] = *order;
        let [x, y, z] = *positions;
        Ok(Self::new([
            Rotor::new(a, x)?,
            Rotor::new(b, y)?,
            Rotor::new(c, z)?,
        ]))
    }

    /// Returns the rotor at `position`, entry rotor at 0.
    pub fn rotor(&self, position: usize) -> Option<&Rotor> {
        self.rotors.get(position)
    }

    /// Returns the current offsets, entry rotor first.
    pub fn offsets(&self) -> [usize; CHAIN_LEN] {
        let [a, b, c] = &self.rotors;
        [a.offset(), b.offset(), c.offset()]
    }

    /// Returns the letters currently showing in the windows, entry rotor first.
    pub fn windows(&self) -> [char; CHAIN_LEN] {
        let [a, b, c] = &self.rotors;
        [a.window(), b.window(), c.window()]
    }

    /// Next rotor in the cascade direction, if any.
    fn cascade_neighbor(position: usize) -> Option<usize> {
        let next = position + 1;
        (next < CHAIN_LEN).then_some(next)
    }

    /// Steps the entry rotor once, cascading turnovers down the chain.
    ///
    /// A rotor whose window shows its notch before it advances also steps
    /// its cascade neighbor. The far rotor has no neighbor, so its notch
    /// has no effect.
    pub fn step_entry(&mut self) {
        let mut current = Some(ENTRY);
        while let Some(position) = current {
            let rotor = &mut self.rotors[position];
            current = if rotor.at_notch() {
                Self::cascade_neighbor(position)
            } else {
                None
            };
            rotor.advance();
            if let Some(next) = current {
                trace!(from = position, to = next, "rotor turnover");
            }
        }
    }

    /// Sends a signal from the entry contacts through every rotor toward
    /// the reflector.
    pub fn traverse_forward(&self, index: usize) -> usize {
        self.rotors
            .iter()
            .fold(index, |signal, rotor| rotor.encode(signal, Direction::Forward))
    }

    /// Sends a signal from the reflector back through every rotor, far
    /// rotor first, to the entry contacts.
    pub fn traverse_backward(&self, index: usize) -> usize {
        self.rotors
            .iter()
            .rev()
            .fold(index, |signal, rotor| rotor.encode(signal, Direction::Backward))
    }
}
