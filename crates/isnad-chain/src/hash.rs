//! SHA256 hashing for skill identity keys.

use sha2::{Digest, Sha256};

/// Digest raw bytes with SHA256, as a 64-character lowercase hex string.
pub fn hash_bytes(data: &[u8]) -> String {
    hex_encode(Sha256::digest(data))
}

/// Digest a string's UTF-8 bytes with SHA256.
pub fn hash_string(s: &str) -> String {
    hash_bytes(s.as_bytes())
}

fn hex_encode(bytes: impl AsRef<[u8]>) -> String {
    bytes
        .as_ref()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_lowercase_hex() {
        let hash = hash_string("weather:1.0.0:unknown");

        assert_eq!(hash.len(), 64);
        assert_eq!(hash, hash.to_lowercase());
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_same_identity_same_digest() {
        assert_eq!(
            hash_string("weather:1.0.0:unknown"),
            hash_string("weather:1.0.0:unknown")
        );
    }

    #[test]
    fn test_version_bump_changes_digest() {
        assert_ne!(
            hash_string("weather:1.0.0:unknown"),
            hash_string("weather:1.1.0:unknown")
        );
    }

    #[test]
    fn test_known_identity_digest() {
        // Pinned digest of a default weather skill's identity key.
        assert_eq!(
            hash_string("weather:1.0.0:unknown"),
            "b34f03e251db9baea2eb43a2bc536536b71af0d709c3b50fac02a1e226b154f5"
        );
    }

    #[test]
    fn test_string_and_bytes_agree() {
        assert_eq!(hash_bytes("天气".as_bytes()), hash_string("天气"));
    }
}
