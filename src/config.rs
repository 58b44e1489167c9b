//! Machine configuration: rotor order, initial positions and plugboard pairs.
//!
//! A [`MachineConfig`] is a plain record. It can be built directly, taken
//! from [`Default`], or parsed from the textual forms accepted on the
//! command line. Letter validation happens when the machine is built.

use std::fmt;

use crate::error::ConfigurationError;
use crate::rotor_chain::CHAIN_LEN;
use crate::wiring::RotorKind;

/// Settings used to build an [`EnigmaMachine`](crate::EnigmaMachine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Rotor types, entry rotor first.
    pub rotor_order: [RotorKind; CHAIN_LEN],
    /// Initial window letters, in the same order as `rotor_order`.
    pub rotor_positions: [char; CHAIN_LEN],
    /// Plugboard letter pairs.
    pub plugboard_pairs: Vec<(char, char)>,
}

impl Default for MachineConfig {
    /// Rotors I, II, III at A, B, C with A/B and T/G plugged.
    fn default() -> Self {
        MachineConfig {
            rotor_order: [RotorKind::I, RotorKind::II, RotorKind::III],
            rotor_positions: ['A', 'B', 'C'],
            plugboard_pairs: vec![('A', 'B'), ('T', 'G')],
        }
    }
}

impl MachineConfig {
    /// Creates a configuration with no plugboard pairs.
    pub fn new(rotor_order: [RotorKind; CHAIN_LEN], rotor_positions: [char; CHAIN_LEN]) -> Self {
        MachineConfig {
            rotor_order,
            rotor_positions,
            plugboard_pairs: Vec::new(),
        }
    }

    /// Adds a plugboard pair.
    pub fn with_plug_pair(mut self, a: char, b: char) -> Self {
        self.plugboard_pairs.push((a, b));
        self
    }

    /// Parses the textual settings format.
    ///
    /// # Parameters
    /// - `order`: Rotor ids separated by whitespace or commas, e.g. `"I II III"`.
    /// - `positions`: Three window letters, e.g. `"ABC"`.
    /// - `plugs`: Two-letter pairs separated by whitespace or commas, e.g. `"AB TG"`.
    ///
    /// # Errors
    /// Returns [`ConfigurationError`] for unknown rotor ids, a rotor or
    /// position count other than three, or a pair that is not two characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{MachineConfig, RotorKind};
    ///
    /// let config = MachineConfig::parse("III, I, II", "xyz", "QW ER").unwrap();
    /// assert_eq!(config.rotor_order, [RotorKind::III, RotorKind::I, RotorKind::II]);
    /// assert_eq!(config.rotor_positions, ['X', 'Y', 'Z']);
    /// assert_eq!(config.plugboard_pairs, vec![('Q', 'W'), ('E', 'R')]);
    /// ```
    pub fn parse(order: &str, positions: &str, plugs: &str) -> Result<Self, ConfigurationError> {
        let kinds = tokens(order)
            .map(str::parse::<RotorKind>)
            .collect::<Result<Vec<_>, _>>()?;
        let rotor_order: [RotorKind; CHAIN_LEN] = kinds
            .try_into()
            .map_err(|kinds: Vec<RotorKind>| ConfigurationError::RotorCount(kinds.len()))?;

        let letters: Vec<char> = positions
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        let rotor_positions: [char; CHAIN_LEN] = letters
            .try_into()
            .map_err(|letters: Vec<char>| ConfigurationError::PositionCount(letters.len()))?;

        let plugboard_pairs = tokens(plugs)
            .map(parse_pair)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MachineConfig {
            rotor_order,
            rotor_positions,
            plugboard_pairs,
        })
    }
}

fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

fn parse_pair(token: &str) -> Result<(char, char), ConfigurationError> {
    let mut chars = token.chars().map(|c| c.to_ascii_uppercase());
    match (chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(b), None) => Ok((a, b)),
        _ => Err(ConfigurationError::MalformedPlugPair(token.to_string())),
    }
}

impl fmt::Display for MachineConfig {
    /// Writes the settings summary, one setting per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positions: String = self.rotor_positions.iter().collect();
        let order: Vec<&str> = self.rotor_order.iter().map(|kind| kind.name()).collect();
        let plugs: Vec<String> = self
            .plugboard_pairs
            .iter()
            .map(|&(a, b)| format!("{}{}", a, b))
            .collect();
        writeln!(f, "Rotor Position: {}", positions)?;
        writeln!(f, "Rotor Order: {}", order.join(", "))?;
        writeln!(f, "Plugboard setting: {}", plugs.join(", "))?;
        write!(f, "Reflector: UKW-B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_startup_settings() {
        let config = MachineConfig::default();
        assert_eq!(
            config.rotor_order,
            [RotorKind::I, RotorKind::II, RotorKind::III]
        );
        assert_eq!(config.rotor_positions, ['A', 'B', 'C']);
        assert_eq!(config.plugboard_pairs, vec![('A', 'B'), ('T', 'G')]);
    }

    #[test]
    fn test_builder() {
        let config = MachineConfig::new(
            [RotorKind::II, RotorKind::I, RotorKind::III],
            ['X', 'Y', 'Z'],
        )
        .with_plug_pair('Q', 'W')
        .with_plug_pair('E', 'R');
        assert_eq!(config.plugboard_pairs, vec![('Q', 'W'), ('E', 'R')]);
    }

    #[test]
    fn test_parse_default_equivalent() {
        let config = MachineConfig::parse("I II III", "ABC", "AB TG").unwrap();
        assert_eq!(config, MachineConfig::default());
    }

    #[test]
    fn test_parse_allows_empty_plugboard() {
        let config = MachineConfig::parse("I,II,III", "A B C", "").unwrap();
        assert!(config.plugboard_pairs.is_empty());
    }

    #[test]
    fn test_parse_unknown_rotor() {
        assert_eq!(
            MachineConfig::parse("I II VIII", "ABC", ""),
            Err(ConfigurationError::UnknownRotor("VIII".to_string()))
        );
    }

    #[test]
    fn test_parse_rotor_count() {
        assert_eq!(
            MachineConfig::parse("I II", "ABC", ""),
            Err(ConfigurationError::RotorCount(2))
        );
        assert_eq!(
            MachineConfig::parse("I II III I", "ABC", ""),
            Err(ConfigurationError::RotorCount(4))
        );
    }

    #[test]
    fn test_parse_position_count() {
        assert_eq!(
            MachineConfig::parse("I II III", "ABCD", ""),
            Err(ConfigurationError::PositionCount(4))
        );
    }

    #[test]
    fn test_parse_malformed_pair() {
        assert_eq!(
            MachineConfig::parse("I II III", "ABC", "AB T"),
            Err(ConfigurationError::MalformedPlugPair("T".to_string()))
        );
        assert_eq!(
            MachineConfig::parse("I II III", "ABC", "ABC"),
            Err(ConfigurationError::MalformedPlugPair("ABC".to_string()))
        );
    }

    #[test]
    fn test_parse_accepts_duplicate_rotors() {
        let config = MachineConfig::parse("I I I", "AAA", "").unwrap();
        assert_eq!(config.rotor_order, [RotorKind::I; 3]);
    }

    #[test]
    fn test_display_settings_summary() {
        let summary = MachineConfig::default().to_string();
        assert_eq!(
            summary,
            "Rotor Position: ABC\n\
             Rotor Order: I, II, III\n\
             Plugboard setting: AB, TG\n\
             Reflector: UKW-B"
        );
    }
}
