use crate::error::IndexError;

/// A single staged entry: the hex digest of a stored blob and the path it
/// was staged under.
///
/// The digest is carried as text. The index does not validate hex here;
/// the tree builder parses it and owns malformed-hash failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagedEntry {
    /// Hex digest of the staged blob.
    pub digest: String,
    /// Path the blob was staged under, stored as an opaque string.
    pub path: String,
}

impl StagedEntry {
    /// Create a new staged entry.
    pub fn new(digest: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            digest: digest.into(),
            path: path.into(),
        }
    }

    /// Render as an index line: `"<digest> <path>"`.
    pub fn to_line(&self) -> String {
        format!("{} {}", self.digest, self.path)
    }

    /// Parse an index line. `line_no` names the line in error reports.
    pub fn parse_line(line: &str, line_no: usize) -> Result<Self, IndexError> {
        let (digest, path) = line.split_once(' ').ok_or_else(|| IndexError::MalformedEntry {
            line: line_no,
            content: line.to_string(),
        })?;
        if digest.is_empty() || path.is_empty() {
            return Err(IndexError::MalformedEntry {
                line: line_no,
                content: line.to_string(),
            });
        }
        Ok(Self::new(digest, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_roundtrip() {
        let entry = StagedEntry::new("ab".repeat(32), "src/main.rs");
        let parsed = StagedEntry::parse_line(&entry.to_line(), 1).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn path_may_contain_separators() {
        let entry = StagedEntry::parse_line("aa bb/cc/dd.txt", 1).unwrap();
        assert_eq!(entry.path, "bb/cc/dd.txt");
    }

    #[test]
    fn parse_rejects_line_without_separator() {
        let err = StagedEntry::parse_line("nodigesthere", 3).unwrap_err();
        match err {
            IndexError::MalformedEntry { line, .. } => assert_eq!(line, 3),
            other => panic!("expected MalformedEntry, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_empty_fields() {
        assert!(StagedEntry::parse_line(" path-only", 1).is_err());
        assert!(StagedEntry::parse_line("digest-only ", 1).is_err());
    }
}
