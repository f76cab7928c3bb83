use strata_types::Digest;

use crate::error::{StoreError, StoreResult};

/// The kind of object stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Raw file content.
    Blob,
    /// Ordered directory listing.
    Tree,
    /// Commit metadata record.
    Commit,
}

impl ObjectKind {
    /// The kind tag as it appears in object headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blob => "blob",
            Self::Tree => "tree",
            Self::Commit => "commit",
        }
    }

    /// Parse a kind tag from an object header.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "blob" => Some(Self::Blob),
            "tree" => Some(Self::Tree),
            "commit" => Some(Self::Commit),
            _ => None,
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored object: kind tag + body bytes.
///
/// The store never interprets the body -- it is a pure key-value store
/// keyed by the digest of the canonical encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Object {
    /// The kind of this object.
    pub kind: ObjectKind,
    /// The raw body bytes (without the header).
    pub body: Vec<u8>,
}

impl Object {
    /// Create a new object from kind and body.
    pub fn new(kind: ObjectKind, body: Vec<u8>) -> Self {
        Self { kind, body }
    }

    /// The canonical encoding: `"<kind> <byte-length-of-body>\0<body>"`.
    ///
    /// Digests are computed over this encoding, never over the body alone,
    /// so identical bytes stored under different kinds get different ids.
    pub fn encode(&self) -> Vec<u8> {
        let header = format!("{} {}\0", self.kind, self.body.len());
        let mut encoded = header.into_bytes();
        encoded.extend_from_slice(&self.body);
        encoded
    }

    /// Compute the content-addressed id for this object.
    pub fn id(&self) -> Digest {
        Digest::from_bytes(&self.encode())
    }

    /// Parse a canonical encoding back into an object.
    ///
    /// `id` names the object in error reports. Fails with
    /// [`StoreError::Corrupt`] when the header is missing or unparseable,
    /// the kind tag is unknown, or the declared length disagrees with the
    /// actual body.
    pub fn decode(data: &[u8], id: &Digest) -> StoreResult<Self> {
        let nul_pos = data.iter().position(|&b| b == 0).ok_or_else(|| StoreError::Corrupt {
            id: *id,
            reason: "missing NUL separator in header".to_string(),
        })?;

        let header = std::str::from_utf8(&data[..nul_pos]).map_err(|_| StoreError::Corrupt {
            id: *id,
            reason: "invalid UTF-8 in header".to_string(),
        })?;

        let (kind_str, len_str) = header.split_once(' ').ok_or_else(|| StoreError::Corrupt {
            id: *id,
            reason: format!("header {header:?} has no length field"),
        })?;

        let kind = ObjectKind::parse(kind_str).ok_or_else(|| StoreError::Corrupt {
            id: *id,
            reason: format!("unknown object kind {kind_str:?}"),
        })?;

        let declared_len: usize = len_str.parse().map_err(|_| StoreError::Corrupt {
            id: *id,
            reason: format!("invalid length field {len_str:?}"),
        })?;

        let body = &data[nul_pos + 1..];
        if body.len() != declared_len {
            return Err(StoreError::Corrupt {
                id: *id,
                reason: format!(
                    "length mismatch: header declares {declared_len} but body is {} bytes",
                    body.len()
                ),
            });
        }

        Ok(Self {
            kind,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_frames_kind_and_length() {
        let object = Object::new(ObjectKind::Blob, b"hi".to_vec());
        assert_eq!(object.encode(), b"blob 2\0hi");
    }

    #[test]
    fn encode_empty_body() {
        let object = Object::new(ObjectKind::Tree, Vec::new());
        assert_eq!(object.encode(), b"tree 0\0");
    }

    #[test]
    fn decode_roundtrip() {
        let object = Object::new(ObjectKind::Commit, b"tree abc\nmessage".to_vec());
        let decoded = Object::decode(&object.encode(), &object.id()).unwrap();
        assert_eq!(decoded, object);
    }

    #[test]
    fn id_is_computed_over_the_encoding_not_the_body() {
        let blob = Object::new(ObjectKind::Blob, b"same".to_vec());
        let tree = Object::new(ObjectKind::Tree, b"same".to_vec());
        assert_ne!(blob.id(), tree.id());
        assert_ne!(blob.id(), Digest::from_bytes(b"same"));
    }

    #[test]
    fn id_is_deterministic() {
        let object = Object::new(ObjectKind::Blob, b"deterministic".to_vec());
        assert_eq!(object.id(), object.id());
    }

    #[test]
    fn decode_rejects_missing_nul() {
        let id = Digest::from_bytes(b"x");
        let err = Object::decode(b"blob 5", &id).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn decode_rejects_unknown_kind() {
        let id = Digest::from_bytes(b"x");
        let err = Object::decode(b"tag 5\0hello", &id).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn decode_rejects_bad_length_field() {
        let id = Digest::from_bytes(b"x");
        let err = Object::decode(b"blob five\0hello", &id).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn decode_rejects_length_mismatch() {
        let id = Digest::from_bytes(b"x");
        let err = Object::decode(b"blob 10\0hello", &id).unwrap_err();
        match err {
            StoreError::Corrupt { reason, .. } => assert!(reason.contains("length mismatch")),
            other => panic!("expected Corrupt, got {other:?}"),
        }
    }

    #[test]
    fn decode_rejects_missing_length_field() {
        let id = Digest::from_bytes(b"x");
        let err = Object::decode(b"blob\0hello", &id).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn object_kind_display() {
        assert_eq!(format!("{}", ObjectKind::Blob), "blob");
        assert_eq!(format!("{}", ObjectKind::Tree), "tree");
        assert_eq!(format!("{}", ObjectKind::Commit), "commit");
    }

    #[test]
    fn object_kind_parse() {
        assert_eq!(ObjectKind::parse("blob"), Some(ObjectKind::Blob));
        assert_eq!(ObjectKind::parse("tree"), Some(ObjectKind::Tree));
        assert_eq!(ObjectKind::parse("commit"), Some(ObjectKind::Commit));
        assert_eq!(ObjectKind::parse("tag"), None);
    }
}
