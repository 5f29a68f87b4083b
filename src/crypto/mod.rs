//! Cryptographic operations for account keys and Digital Twin topics.
//!
//! This module provides:
//! - sr25519 keypair construction from a mnemonic phrase or raw hex seed
//! - SS58 address encoding fixed to the chain's address-format version
//! - SHA-256 topic encoding for Digital Twin source lookup keys

mod keypair;
mod topic;

pub use keypair::{Keypair, KeypairError, SS58_PREFIX};
pub use topic::encode_topic;
