//! File-backed session store.
//!
//! Persists the login session as a single JSON file under the AgriLink
//! config directory.

use crate::paths::{AgrilinkPaths, PathError};
use agrilink_core::session::{Session, SessionStore};
use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

/// Session storage backed by one JSON file (session.json).
///
/// Responsibilities:
/// - Read the persisted session, treating anything unusable as absent
/// - Replace the record atomically via tmp file + rename
/// - Remove the record on logout
///
/// Does NOT:
/// - Validate the token against the server
/// - Synchronize concurrent writers (the session has a single writer)
///
/// # Security Note
///
/// The file holds a bearer token, so writes restrict permissions to the
/// owning user (600) on Unix.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store at the default path (~/.config/agrilink/session.json).
    ///
    /// # Returns
    ///
    /// - `Ok(FileSessionStore)`: Successfully determined the session path
    /// - `Err(PathError::ConfigDirNotFound)`: Could not find config directory
    pub fn new() -> Result<Self, PathError> {
        Ok(Self {
            path: AgrilinkPaths::session_file()?,
        })
    }

    /// Creates a store with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the path to the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets a temporary file path for atomic writes.
    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("session path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("session path has no file name"))?;

        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

impl SessionStore for FileSessionStore {
    fn read(&self) -> Option<Session> {
        if !self.path.exists() {
            return None;
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                tracing::debug!("session file unreadable, treating as logged out: {err}");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(err) => {
                // Malformed or partial records mean "not logged in",
                // never an error the caller has to handle.
                tracing::debug!("session file malformed, treating as logged out: {err}");
                None
            }
        }
    }

    fn write(&self, session: &Session) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(session)?;

        // Write to a temporary file in the same directory, then rename
        // over the record so a reader only ever observes a complete
        // session.
        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        // Set file permissions to 600 (user read/write only) on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600))?;
        }

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agrilink_core::session::UserAccount;
    use tempfile::TempDir;

    fn sample_session() -> Session {
        Session {
            user: UserAccount {
                id: 7,
                email: "asha@example.com".to_string(),
                name: "Asha".to_string(),
            },
            access_token: "tok-abc".to_string(),
            token_type: "bearer".to_string(),
        }
    }

    #[test]
    fn test_read_missing_file_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_path(temp_dir.path().join("session.json"));

        assert!(store.read().is_none());
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_path(temp_dir.path().join("session.json"));
        let session = sample_session();

        store.write(&session).unwrap();

        assert_eq!(store.read(), Some(session));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store =
            FileSessionStore::with_path(temp_dir.path().join("nested").join("session.json"));

        store.write(&sample_session()).unwrap();

        assert!(store.read().is_some());
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("session.json");
        let store = FileSessionStore::with_path(file_path.clone());

        store.write(&sample_session()).unwrap();

        let tmp_path = temp_dir.path().join(".session.json.tmp");
        assert!(!tmp_path.exists());
        assert!(file_path.exists());
    }

    #[test]
    fn test_write_replaces_wholesale() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_path(temp_dir.path().join("session.json"));

        store.write(&sample_session()).unwrap();

        let mut replacement = sample_session();
        replacement.access_token = "tok-new".to_string();
        store.write(&replacement).unwrap();

        assert_eq!(store.read().unwrap().access_token, "tok-new");
    }

    #[test]
    fn test_invalid_json_reads_as_absent() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("session.json");
        fs::write(&file_path, r#"{ not json"#).unwrap();

        let store = FileSessionStore::with_path(file_path);

        assert!(store.read().is_none());
    }

    #[test]
    fn test_partial_record_reads_as_absent() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("session.json");
        // A record without a token must not come back as a session.
        fs::write(
            &file_path,
            r#"{"user": {"id": 1, "email": "a@b.c", "name": "A"}}"#,
        )
        .unwrap();

        let store = FileSessionStore::with_path(file_path);

        assert!(store.read().is_none());
    }

    #[test]
    fn test_clear_then_read_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_path(temp_dir.path().join("session.json"));

        store.write(&sample_session()).unwrap();
        store.clear().unwrap();

        assert!(store.read().is_none());
    }

    #[test]
    fn test_clear_without_record_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_path(temp_dir.path().join("session.json"));

        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_session_file_is_private_to_the_user() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("session.json");
        let store = FileSessionStore::with_path(file_path.clone());

        store.write(&sample_session()).unwrap();

        let mode = fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
