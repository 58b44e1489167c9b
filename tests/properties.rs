//! Property-based tests for the rotor machine.
//!
//! Each property holds for arbitrary configurations and messages, not just
//! the frozen vectors in `regression_public_api.rs`.

use enigma::{alphabet, vigenere, EnigmaMachine, MachineConfig, Plugboard, RotorKind};
use proptest::prelude::*;

fn rotor_kind() -> impl Strategy<Value = RotorKind> {
    prop_oneof![
        Just(RotorKind::I),
        Just(RotorKind::II),
        Just(RotorKind::III),
    ]
}

fn letter() -> impl Strategy<Value = char> {
    (0usize..alphabet::ALPHABET_LEN).prop_map(alphabet::symbol_at)
}

/// Disjoint plug pairs drawn from a shuffled alphabet.
fn plug_pairs() -> impl Strategy<Value = Vec<(char, char)>> {
    (Just(alphabet::ALPHABET.to_vec()).prop_shuffle(), 0usize..=13).prop_map(|(letters, n)| {
        letters
            .chunks(2)
            .take(n)
            .map(|pair| (pair[0] as char, pair[1] as char))
            .collect()
    })
}

fn config() -> impl Strategy<Value = MachineConfig> {
    (
        [rotor_kind(), rotor_kind(), rotor_kind()],
        [letter(), letter(), letter()],
        plug_pairs(),
    )
        .prop_map(|(rotor_order, rotor_positions, plugboard_pairs)| MachineConfig {
            rotor_order,
            rotor_positions,
            plugboard_pairs,
        })
}

proptest! {
    /// Converting twice from the same start recovers the upper-cased message.
    #[test]
    fn prop_reciprocity(config in config(), message in "[a-zA-Z]{0,200}") {
        let mut encoder = EnigmaMachine::new(config.clone()).unwrap();
        let ciphertext = encoder.convert(&message);

        let mut decoder = EnigmaMachine::new(config).unwrap();
        prop_assert_eq!(decoder.convert(&ciphertext), message.to_uppercase());
    }

    /// Non-letters keep their place; letters come out upper-case and never
    /// map to themselves.
    #[test]
    fn prop_passthrough_and_case(config in config(), message in "[ -~]{0,200}") {
        let mut machine = EnigmaMachine::new(config).unwrap();
        let output = machine.convert(&message);
        let input: Vec<char> = message.to_uppercase().chars().collect();
        let output: Vec<char> = output.chars().collect();
        prop_assert_eq!(input.len(), output.len());
        for (i, o) in input.iter().zip(output.iter()) {
            if alphabet::index_of(*i).is_some() {
                prop_assert!(o.is_ascii_uppercase());
                prop_assert_ne!(i, o);
            } else {
                prop_assert_eq!(i, o);
            }
        }
    }

    /// Rotor motion depends only on how many letters were typed.
    #[test]
    fn prop_offsets_independent_of_letters(
        config in config(),
        a in "[A-Z]{1,100}",
        b in "[A-Z]{1,100}",
    ) {
        let len = a.len().min(b.len());
        let mut first = EnigmaMachine::new(config.clone()).unwrap();
        let mut second = EnigmaMachine::new(config).unwrap();
        first.convert(&a[..len]);
        second.convert(&b[..len]);
        prop_assert_eq!(first.offsets(), second.offsets());
    }

    /// The same configuration and message always give the same output.
    #[test]
    fn prop_deterministic(config in config(), message in "[A-Z ]{0,100}") {
        let mut first = EnigmaMachine::new(config.clone()).unwrap();
        let mut second = EnigmaMachine::new(config).unwrap();
        prop_assert_eq!(first.convert(&message), second.convert(&message));
        prop_assert_eq!(first.offsets(), second.offsets());
    }

    /// Swapping twice through a disjoint plugboard is the identity.
    #[test]
    fn prop_plugboard_involution(pairs in plug_pairs(), symbol in letter()) {
        let board = Plugboard::new(&pairs).unwrap();
        prop_assert_eq!(board.swap(board.swap(symbol)), symbol);
    }

    /// Decrypting with the same key undoes encryption.
    #[test]
    fn prop_vigenere_round_trip(text in "[ -~]{0,200}", key in "[a-zA-Z]{1,16}") {
        let ciphertext = vigenere::encrypt(&text, &key).unwrap();
        prop_assert_eq!(vigenere::decrypt(&ciphertext, &key).unwrap(), text.to_uppercase());
    }
}
