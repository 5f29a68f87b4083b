//! Digital Twin topic encoding.

use sha2::{Digest, Sha256};

/// Encodes a topic string into the hashed form accepted by the Digital Twin
/// source mapping.
///
/// The result is `0x` followed by the lowercase hex SHA-256 digest of the
/// topic's UTF-8 bytes. Pure and total: every string has a digest, and the
/// same topic always encodes to the same key.
pub fn encode_topic(topic: &str) -> String {
    format!("0x{}", hex::encode(Sha256::digest(topic.as_bytes())))
}
