//! Runtime configuration for the client CLI.

use clap::{Parser, Subcommand};

/// Robonomics client utilities
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Derive a keypair from a seed and print its public key and address
    Inspect {
        /// Account seed: a mnemonic phrase or a 0x-prefixed raw hex seed
        seed: String,
    },
    /// Generate a new random keypair and print its mnemonic phrase
    Generate,
    /// Encode a topic string into a Digital Twin source lookup key
    EncodeTopic {
        /// Topic name to encode
        topic: String,
    },
}
