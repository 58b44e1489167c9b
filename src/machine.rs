//! EnigmaMachine: plugboard, rotor chain and reflector wired together.
//!
//! The machine is reciprocal: a second machine built from the same
//! configuration turns the output of the first back into its input.
//! Rotor state carries over between calls to [`EnigmaMachine::convert`].

use tracing::{debug, trace};

use crate::alphabet;
use crate::config::MachineConfig;
use crate::error::ConfigurationError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor_chain::{RotorChain, CHAIN_LEN};

/// Three-rotor cipher machine.
///
/// Conversion takes `&mut self`: stepping and encoding a letter are not
/// atomic, so one machine cannot be driven from several threads at once.
#[derive(Debug, Clone)]
pub struct EnigmaMachine {
    config: MachineConfig,
    chain: RotorChain,
    initial_chain: RotorChain,
    plugboard: Plugboard,
    reflector: &'static Reflector,
}

impl EnigmaMachine {
    /// Builds a machine from `config` using the UKW-B reflector.
    ///
    /// # Errors
    /// Returns [`ConfigurationError`] if a rotor position or plugboard
    /// letter is not A-Z, or if more than 13 plugboard pairs are given.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{EnigmaMachine, MachineConfig};
    ///
    /// let mut encoder = EnigmaMachine::new(MachineConfig::default()).unwrap();
    /// let ciphertext = encoder.convert("This is Sample");
    ///
    /// let mut decoder = EnigmaMachine::new(MachineConfig::default()).unwrap();
    /// assert_eq!(decoder.convert(&ciphertext), "THIS IS SAMPLE");
    /// ```
    pub fn new(config: MachineConfig) -> Result<Self, ConfigurationError> {
        let chain = RotorChain::from_settings(&config.rotor_order, &config.rotor_positions)?;
        let plugboard = Plugboard::new(&config.plugboard_pairs)?;
        debug!(
            rotors = ?config.rotor_order,
            windows = ?chain.windows(),
            plug_pairs = plugboard.pairs().len(),
            "machine configured"
        );
        Ok(EnigmaMachine {
            config,
            initial_chain: chain.clone(),
            chain,
            plugboard,
            reflector: Reflector::ukw_b(),
        })
    }

    /// Returns the configuration this machine was built from.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Returns the current rotor offsets, entry rotor first.
    pub fn offsets(&self) -> [usize; CHAIN_LEN] {
        self.chain.offsets()
    }

    /// Returns the letters currently showing in the rotor windows.
    pub fn windows(&self) -> [char; CHAIN_LEN] {
        self.chain.windows()
    }

    /// Returns the rotor chain.
    pub fn chain(&self) -> &RotorChain {
        &self.chain
    }

    /// Puts the rotors back at their configured starting positions.
    pub fn reset(&mut self) {
        self.chain = self.initial_chain.clone();
        debug!(windows = ?self.chain.windows(), "machine reset");
    }

    /// Encrypts or decrypts `message`.
    ///
    /// The message is upper-cased first. Characters outside A-Z are copied
    /// through unchanged and do not move the rotors; every letter steps the
    /// rotors once before it is encoded.
    pub fn convert(&mut self, message: &str) -> String {
        let mut output = String::with_capacity(message.len());
        for symbol in message.chars().flat_map(char::to_uppercase) {
            output.push(self.convert_symbol(symbol));
        }
        trace!(
            chars = output.chars().count(),
            windows = ?self.chain.windows(),
            "converted message"
        );
        output
    }

    fn convert_symbol(&mut self, symbol: char) -> char {
        // Plugboard pairs only hold A-Z, so anything else comes back unchanged.
        let Some(entry) = alphabet::index_of(self.plugboard.swap(symbol)) else {
            return symbol;
        };
        self.chain.step_entry();
        let forward = self.chain.traverse_forward(entry);
        let reflected = self.reflector.reflect(forward);
        let backward = self.chain.traverse_backward(reflected);
        self.plugboard.swap(alphabet::symbol_at(backward))
    }
}
