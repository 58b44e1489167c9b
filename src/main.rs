//! Command-line front end for the enigma library.
//!
//! # Usage
//!
//! ```bash
//! # Convert with the default settings (I II III at ABC, plugs AB TG)
//! enigma convert "This is Sample"
//!
//! # Custom settings, text from stdin
//! echo "attack at dawn" | enigma convert --rotors "II I III" --positions XYZ --plugs "QW ER"
//!
//! # Repeating-key cipher
//! enigma vigenere encrypt --key LEMON "Attack at dawn"
//! ```

use std::io::{self, Read};

use clap::{Parser, Subcommand, ValueEnum};
use enigma::{vigenere, EnigmaMachine, MachineConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Rotor cipher simulator
#[derive(Parser, Debug)]
#[command(name = "enigma")]
#[command(about = "Enigma and Vigenère cipher tools")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt or decrypt text with the rotor machine
    Convert {
        /// Rotor order, entry rotor first
        #[arg(short, long, default_value = "I II III")]
        rotors: String,

        /// Initial window letters
        #[arg(short, long, default_value = "ABC")]
        positions: String,

        /// Plugboard pairs
        #[arg(long, default_value = "AB TG")]
        plugs: String,

        /// Text to convert; read from stdin when omitted
        text: Option<String>,
    },
    /// Encrypt or decrypt text with a repeating key
    Vigenere {
        /// Direction
        mode: Mode,

        /// Cipher key, letters only
        #[arg(short, long)]
        key: String,

        /// Text to process; read from stdin when omitted
        text: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Encrypt,
    Decrypt,
}

fn read_text(text: Option<String>) -> io::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    match args.command {
        Command::Convert {
            rotors,
            positions,
            plugs,
            text,
        } => {
            let config = MachineConfig::parse(&rotors, &positions, &plugs)?;
            let input = read_text(text)?;

            let mut encoder = EnigmaMachine::new(config.clone())?;
            let converted = encoder.convert(&input);
            tracing::info!(windows = ?encoder.windows(), "conversion finished");

            let mut decoder = EnigmaMachine::new(config)?;
            let round_trip = decoder.convert(&converted);

            println!("Enigma Settings:\n{}", encoder.config());
            println!("Input text:     {}", input);
            println!("Converted text: {}", converted);
            println!("Round trip:     {}", round_trip);
        }
        Command::Vigenere { mode, key, text } => {
            let input = read_text(text)?;
            let output = match mode {
                Mode::Encrypt => vigenere::encrypt(&input, &key)?,
                Mode::Decrypt => vigenere::decrypt(&input, &key)?,
            };
            println!("Key:    {}", key);
            println!("Input:  {}", input);
            println!("Output: {}", output);
        }
    }

    Ok(())
}
