//! Plugboard: letter pairs swapped on the way into and out of the rotors.
//!
//! Pairs are expected to be disjoint. This is not enforced: when a letter
//! appears in more than one pair, the first pair that mentions it wins.

use crate::alphabet;
use crate::error::ConfigurationError;

/// Maximum number of pairs a 26-letter board can hold.
pub const MAX_PLUG_PAIRS: usize = 13;

/// Immutable set of swapped letter pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plugboard {
    pairs: Vec<(char, char)>,
}

impl Plugboard {
    /// Creates a plugboard from letter pairs, case-folding each letter.
    ///
    /// # Errors
    /// - [`ConfigurationError::TooManyPlugPairs`] if more than
    ///   [`MAX_PLUG_PAIRS`] pairs are given.
    /// - [`ConfigurationError::InvalidPlugboardLetter`] if a pair contains
    ///   a character outside A-Z.
    pub fn new(pairs: &[(char, char)]) -> Result<Self, ConfigurationError> {
        if pairs.len() > MAX_PLUG_PAIRS {
            return Err(ConfigurationError::TooManyPlugPairs(pairs.len()));
        }
        let pairs = pairs
            .iter()
            .map(|&(a, b)| {
                Ok::<_, ConfigurationError>((Self::plug_letter(a)?, Self::plug_letter(b)?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Plugboard { pairs })
    }

    fn plug_letter(symbol: char) -> Result<char, ConfigurationError> {
        alphabet::fold_index(symbol)
            .map(alphabet::symbol_at)
            .ok_or(ConfigurationError::InvalidPlugboardLetter(symbol))
    }

    /// Returns the configured pairs, upper-cased.
    pub fn pairs(&self) -> &[(char, char)] {
        &self.pairs
    }

    /// Returns the partner of `symbol`, or `symbol` itself if unplugged.
    pub fn swap(&self, symbol: char) -> char {
        for &(a, b) in &self.pairs {
            if symbol == a {
                return b;
            }
            if symbol == b {
                return a;
            }
        }
        symbol
    }
}
