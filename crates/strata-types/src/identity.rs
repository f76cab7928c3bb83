use std::fmt;

/// Author/committer identity recorded in commit objects.
///
/// Rendered as `Name <email>` on the `author` and `committer` lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    /// Human-readable name.
    pub name: String,
    /// Contact email address.
    pub email: String,
}

impl Identity {
    /// Create a new identity.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
