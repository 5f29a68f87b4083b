//! sr25519 keypair construction for transaction signing.

use std::fmt;

use log::debug;
use sp_core::crypto::{Ss58AddressFormat, Ss58Codec};
use sp_core::{sr25519, Pair as PairT};

/// SS58 address-format version used for all derived addresses.
pub const SS58_PREFIX: u16 = 32;

/// An sr25519 account keypair with its SS58 address format fixed to
/// [`SS58_PREFIX`].
#[derive(Clone)]
pub struct Keypair {
    pair: sr25519::Pair,
}

impl Keypair {
    /// Builds a keypair from an account seed.
    ///
    /// A seed starting with `0x` is treated as a raw hexadecimal seed;
    /// anything else is treated as a mnemonic phrase. Seed well-formedness
    /// is left to the derivation routines.
    pub fn from_seed(seed: &str) -> Result<Self, KeypairError> {
        let pair = if let Some(raw) = seed.strip_prefix("0x") {
            debug!("deriving keypair from raw seed");
            let bytes = hex::decode(raw)?;
            sr25519::Pair::from_seed_slice(&bytes).map_err(KeypairError::Derivation)?
        } else {
            debug!("deriving keypair from mnemonic phrase");
            sr25519::Pair::from_phrase(seed, None)
                .map_err(KeypairError::Derivation)?
                .0
        };

        Ok(Self { pair })
    }

    /// Generates a new random keypair, returning it together with the
    /// mnemonic phrase that recreates it.
    pub fn generate() -> (Self, String) {
        let (pair, phrase, _seed) = sr25519::Pair::generate_with_phrase(None);
        (Self { pair }, phrase)
    }

    /// Returns the public key.
    #[inline]
    pub fn public(&self) -> sr25519::Public {
        self.pair.public()
    }

    /// Returns the public key as a 0x-prefixed hex string.
    pub fn public_hex(&self) -> String {
        format!("0x{}", hex::encode(self.pair.public()))
    }

    /// Returns the SS58 address, encoded with [`SS58_PREFIX`].
    pub fn ss58_address(&self) -> String {
        self.pair
            .public()
            .to_ss58check_with_version(Ss58AddressFormat::custom(SS58_PREFIX))
    }

    /// Signs a message with the secret key.
    #[inline]
    pub fn sign(&self, message: &[u8]) -> sr25519::Signature {
        self.pair.sign(message)
    }

    /// Verifies a signature made by this keypair over a message.
    pub fn verify(&self, signature: &sr25519::Signature, message: &[u8]) -> bool {
        sr25519::Pair::verify(signature, message, &self.pair.public())
    }

    /// Returns the underlying pair, for callers that sign extrinsics
    /// directly.
    #[inline]
    pub fn pair(&self) -> &sr25519::Pair {
        &self.pair
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({})", self.ss58_address())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum KeypairError {
    #[error("invalid hex in raw seed: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("key derivation failed: {0}")]
    Derivation(sp_core::crypto::SecretStringError),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Substrate development phrase and its mini-secret; both derive the
    // same well-known sr25519 public key.
    const DEV_PHRASE: &str =
        "bottom drive obey lake curtain smoke basket hold race lonely fit walk";
    const DEV_SEED: &str =
        "0xfac7959dbfe72f052e5a0c3c8d6530f202b02fd8f9f5ca3580ec8deb7797479e";
    const DEV_PUBLIC: &str =
        "0x46ebddef8cd9bb167dc30878d7113b7e168e6f0646beffd77d69d39bad76b47a";

    #[test]
    fn test_mnemonic_derivation() {
        let keypair = Keypair::from_seed(DEV_PHRASE).unwrap();
        assert_eq!(keypair.public_hex(), DEV_PUBLIC);
    }

    #[test]
    fn test_raw_seed_derivation() {
        let keypair = Keypair::from_seed(DEV_SEED).unwrap();
        assert_eq!(keypair.public_hex(), DEV_PUBLIC);
    }

    #[test]
    fn test_mnemonic_derivation_is_deterministic() {
        let a = Keypair::from_seed(DEV_PHRASE).unwrap();
        let b = Keypair::from_seed(DEV_PHRASE).unwrap();
        assert_eq!(a.public(), b.public());
    }

    #[test]
    fn test_raw_seed_routing() {
        // A 0x prefix must select raw-seed derivation, so non-hex input
        // fails on hex decoding rather than as a bad mnemonic.
        let err = Keypair::from_seed("0xnothex").unwrap_err();
        assert!(matches!(err, KeypairError::InvalidHex(_)));
    }

    #[test]
    fn test_unprefixed_hex_is_treated_as_mnemonic() {
        let seed = DEV_SEED.trim_start_matches("0x");
        assert!(matches!(
            Keypair::from_seed(seed),
            Err(KeypairError::Derivation(_))
        ));
    }

    #[test]
    fn test_ss58_address_uses_chain_prefix() {
        let keypair = Keypair::from_seed(DEV_PHRASE).unwrap();
        let address = keypair.ss58_address();
        // Version 32 addresses start with '4'.
        assert!(address.starts_with('4'), "unexpected address: {}", address);
    }

    #[test]
    fn test_sign_and_verify() {
        let keypair = Keypair::from_seed(DEV_PHRASE).unwrap();
        let message = b"datalog record";
        let signature = keypair.sign(message);
        assert!(keypair.verify(&signature, message));
        assert!(!keypair.verify(&signature, b"another record"));
    }

    #[test]
    fn test_generated_phrase_recreates_keypair() {
        let (keypair, phrase) = Keypair::generate();
        let recovered = Keypair::from_seed(&phrase).unwrap();
        assert_eq!(keypair.public(), recovered.public());
    }

    #[test]
    fn test_generate_is_random() {
        let (a, _) = Keypair::generate();
        let (b, _) = Keypair::generate();
        assert_ne!(a.public(), b.public());
    }
}
