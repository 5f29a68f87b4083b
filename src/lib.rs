//! # robonomics_client
//!
//! Client-side helpers for Robonomics-compatible Substrate chains.
//!
//! ## Architecture
//!
//! - `crypto`: sr25519 keypair construction and Digital Twin topic encoding
//! - `config`: Runtime configuration for the CLI

pub mod config;
pub mod crypto;

pub use config::Config;
pub use crypto::{encode_topic, Keypair, KeypairError, SS58_PREFIX};
