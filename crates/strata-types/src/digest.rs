use std::fmt;

use crate::error::TypeError;

/// Length of a digest rendered as hexadecimal.
pub const DIGEST_HEX_LEN: usize = 64;

/// Content-addressed identifier for any stored object.
///
/// A `Digest` is the BLAKE3 hash of an object's canonical encoding.
/// Identical content always produces the same `Digest`, making objects
/// deduplicatable and verifiable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; 32]);

impl Digest {
    /// Compute a `Digest` from raw bytes.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Create a `Digest` from a pre-computed hash.
    pub fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// The raw 32-byte hash.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex-encoded string representation (64 lowercase characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    ///
    /// Fails with [`TypeError::MalformedHash`] unless the input is exactly
    /// 64 hex characters.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        if s.len() != DIGEST_HEX_LEN {
            return Err(TypeError::MalformedHash(format!(
                "expected {DIGEST_HEX_LEN} hex characters, got {}",
                s.len()
            )));
        }
        let bytes = hex::decode(s).map_err(|e| TypeError::MalformedHash(e.to_string()))?;
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.short_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for Digest {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; 32] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_is_deterministic() {
        let data = b"hello world";
        let d1 = Digest::from_bytes(data);
        let d2 = Digest::from_bytes(data);
        assert_eq!(d1, d2);
    }

    #[test]
    fn different_data_produces_different_digests() {
        let d1 = Digest::from_bytes(b"hello");
        let d2 = Digest::from_bytes(b"world");
        assert_ne!(d1, d2);
    }

    #[test]
    fn embedded_nul_bytes_are_hashed() {
        let d1 = Digest::from_bytes(b"blob 2\0hi");
        let d2 = Digest::from_bytes(b"blob 2hi");
        assert_ne!(d1, d2);
    }

    #[test]
    fn hex_roundtrip() {
        let digest = Digest::from_bytes(b"test");
        let hex = digest.to_hex();
        let parsed = Digest::from_hex(&hex).unwrap();
        assert_eq!(digest, parsed);
    }

    #[test]
    fn hex_is_64_lowercase_chars() {
        let hex = Digest::from_bytes(b"test").to_hex();
        assert_eq!(hex.len(), DIGEST_HEX_LEN);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        let err = Digest::from_hex("abcd").unwrap_err();
        assert!(matches!(err, TypeError::MalformedHash(_)));

        let long = "a".repeat(DIGEST_HEX_LEN + 2);
        let err = Digest::from_hex(&long).unwrap_err();
        assert!(matches!(err, TypeError::MalformedHash(_)));
    }

    #[test]
    fn from_hex_rejects_non_hex_characters() {
        let bad = "g".repeat(DIGEST_HEX_LEN);
        let err = Digest::from_hex(&bad).unwrap_err();
        assert!(matches!(err, TypeError::MalformedHash(_)));
    }

    #[test]
    fn short_hex_is_8_chars() {
        let digest = Digest::from_bytes(b"test");
        assert_eq!(digest.short_hex().len(), 8);
    }

    #[test]
    fn display_is_full_hex() {
        let digest = Digest::from_bytes(b"test");
        let display = format!("{digest}");
        assert_eq!(display.len(), DIGEST_HEX_LEN);
        assert_eq!(display, digest.to_hex());
    }

    #[test]
    fn ordering_is_consistent() {
        let d1 = Digest::from_hash([0; 32]);
        let d2 = Digest::from_hash([1; 32]);
        assert!(d1 < d2);
    }
}
