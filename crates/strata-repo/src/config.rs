//! Author identity configuration.
//!
//! The repository config file is a TOML document with a `[user]` table:
//!
//! ```toml
//! [user]
//! name = "Ada Lovelace"
//! email = "ada@example.com"
//! ```
//!
//! The core only consumes the `(name, email)` pair; anything else in the
//! file is ignored.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use strata_types::Identity;

use crate::error::{RepoError, RepoResult};

/// Name of the config file inside the repository directory.
const CONFIG_FILE: &str = "config";

#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    user: Option<UserSection>,
}

#[derive(Debug, Serialize, Deserialize)]
struct UserSection {
    name: Option<String>,
    email: Option<String>,
}

/// Load the author identity from `<repo_dir>/config`.
///
/// Fails with [`RepoError::MissingAuthorConfig`] when the file is absent,
/// unparseable, or the `[user]` table lacks a non-empty name or email.
pub fn load_identity(repo_dir: &Path) -> RepoResult<Identity> {
    let path = repo_dir.join(CONFIG_FILE);
    let contents = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(RepoError::MissingAuthorConfig(format!(
                "no config file at {}",
                path.display()
            )));
        }
        Err(e) => return Err(e.into()),
    };

    let parsed: ConfigFile = toml::from_str(&contents)
        .map_err(|e| RepoError::MissingAuthorConfig(format!("config file is unreadable: {e}")))?;

    let user = parsed
        .user
        .ok_or_else(|| RepoError::MissingAuthorConfig("missing [user] table".to_string()))?;

    match (user.name, user.email) {
        (Some(name), Some(email)) if !name.is_empty() && !email.is_empty() => {
            Ok(Identity::new(name, email))
        }
        _ => Err(RepoError::MissingAuthorConfig(
            "[user] table needs a non-empty name and email".to_string(),
        )),
    }
}

/// Write the author identity to `<repo_dir>/config`, replacing any
/// existing file.
pub fn save_identity(repo_dir: &Path, identity: &Identity) -> RepoResult<()> {
    let config = ConfigFile {
        user: Some(UserSection {
            name: Some(identity.name.clone()),
            email: Some(identity.email.clone()),
        }),
    };
    let rendered = toml::to_string(&config)
        .map_err(|e| RepoError::MissingAuthorConfig(format!("config is unserializable: {e}")))?;
    fs::write(repo_dir.join(CONFIG_FILE), rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn load_roundtrips_saved_identity() {
        let dir = TempDir::new().unwrap();
        let identity = Identity::new("Ada Lovelace", "ada@example.com");
        save_identity(dir.path(), &identity).unwrap();

        let loaded = load_identity(dir.path()).unwrap();
        assert_eq!(loaded, identity);
    }

    #[test]
    fn missing_file_is_missing_author_config() {
        let dir = TempDir::new().unwrap();
        let err = load_identity(dir.path()).unwrap_err();
        assert!(matches!(err, RepoError::MissingAuthorConfig(_)));
    }

    #[test]
    fn missing_user_table_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config"), "[core]\nbare = false\n").unwrap();
        let err = load_identity(dir.path()).unwrap_err();
        assert!(matches!(err, RepoError::MissingAuthorConfig(_)));
    }

    #[test]
    fn missing_email_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config"), "[user]\nname = \"Ada\"\n").unwrap();
        let err = load_identity(dir.path()).unwrap_err();
        assert!(matches!(err, RepoError::MissingAuthorConfig(_)));
    }

    #[test]
    fn empty_name_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config"),
            "[user]\nname = \"\"\nemail = \"a@b.c\"\n",
        )
        .unwrap();
        let err = load_identity(dir.path()).unwrap_err();
        assert!(matches!(err, RepoError::MissingAuthorConfig(_)));
    }

    #[test]
    fn invalid_toml_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config"), "[user\nname = Ada").unwrap();
        let err = load_identity(dir.path()).unwrap_err();
        assert!(matches!(err, RepoError::MissingAuthorConfig(_)));
    }
}
