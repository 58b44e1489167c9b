//! Three-rotor Enigma cipher engine.
//!
//! Letters pass through a plugboard, three rotors, a fixed reflector, back
//! through the rotors in reverse, and through the plugboard again. The
//! rotors step before every letter, so the substitution changes on every
//! keystroke. Because the reflector is an involution with no fixed points,
//! the machine is its own inverse: a second machine with the same starting
//! configuration decrypts what the first encrypted.
//!
//! A stateless repeating-key [`vigenere`] cipher over the same alphabet is
//! included as well.
//!
//! # Architecture
//!
//! ```text
//! Rotor          (wiring + inverse wiring + notch + offset)
//!     ↕ indexed by position, entry rotor first
//! RotorChain     (cascade stepping, forward and backward traversal)
//!     + Plugboard, Reflector
//! EnigmaMachine  (orchestrator: swap → step → forward → reflect → backward → swap)
//! ```
//!
//! # Examples
//!
//! ```
//! use enigma::{EnigmaMachine, MachineConfig, RotorKind};
//!
//! let config = MachineConfig::new([RotorKind::II, RotorKind::I, RotorKind::III], ['X', 'Y', 'Z'])
//!     .with_plug_pair('Q', 'W')
//!     .with_plug_pair('E', 'R');
//!
//! let mut encoder = EnigmaMachine::new(config.clone()).unwrap();
//! let ciphertext = encoder.convert("Attack at dawn");
//! assert_eq!(ciphertext, "XVVGNZ TM LOBT");
//!
//! let mut decoder = EnigmaMachine::new(config).unwrap();
//! assert_eq!(decoder.convert(&ciphertext), "ATTACK AT DAWN");
//! ```
//!
//! Unknown rotor ids are rejected when the configuration is parsed:
//!
//! ```
//! use enigma::{ConfigurationError, MachineConfig};
//!
//! let result = MachineConfig::parse("I II IX", "AAA", "");
//! assert_eq!(result, Err(ConfigurationError::UnknownRotor("IX".to_string())));
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;
pub mod vigenere;
pub mod wiring;

mod config;
mod machine;
mod plugboard;
mod reflector;
mod rotor;
mod rotor_chain;

pub use config::MachineConfig;
pub use error::{ConfigurationError, KeyError};
pub use machine::EnigmaMachine;
pub use plugboard::{Plugboard, MAX_PLUG_PAIRS};
pub use reflector::Reflector;
pub use rotor::{Direction, Rotor};
pub use rotor_chain::{RotorChain, CHAIN_LEN};
pub use wiring::RotorKind;
