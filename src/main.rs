//! Robonomics client CLI
//!
//! Usage:
//!   robonomics-client inspect "<mnemonic or 0x-seed>"
//!   robonomics-client generate
//!   robonomics-client encode-topic "temperature/outside"

use std::process;

use clap::Parser;

use robonomics_client::config::{Command, Config};
use robonomics_client::{encode_topic, Keypair};

fn main() {
    env_logger::init();

    let config = Config::parse();

    match config.command {
        Command::Inspect { seed } => match Keypair::from_seed(&seed) {
            Ok(keypair) => print_keypair(&keypair),
            Err(e) => {
                eprintln!("Seed error: {}", e);
                process::exit(1);
            }
        },
        Command::Generate => {
            let (keypair, phrase) = Keypair::generate();
            println!("Mnemonic:    {}", phrase);
            print_keypair(&keypair);
        }
        Command::EncodeTopic { topic } => {
            println!("{}", encode_topic(&topic));
        }
    }
}

fn print_keypair(keypair: &Keypair) {
    println!("Public key:  {}", keypair.public_hex());
    println!("Address:     {}", keypair.ss58_address());
}
