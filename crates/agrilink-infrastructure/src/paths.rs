//! Unified path management for AgriLink client files.
//!
//! The session record and downloaded reports live in platform-standard
//! locations resolved through the `dirs` crate. This keeps behavior
//! consistent across Linux, macOS, and Windows.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
    /// Neither a downloads nor a data directory could be determined.
    DownloadDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
            PathError::DownloadDirNotFound => write!(f, "Cannot find a download directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for AgriLink.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/agrilink/          # Config directory
/// └── session.json             # Persisted login session
///
/// ~/Downloads/                 # Report downloads (platform default)
/// ```
pub struct AgrilinkPaths;

impl AgrilinkPaths {
    /// Returns the AgriLink configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/agrilink/`)
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("agrilink"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the persisted session record.
    ///
    /// # Security Note
    ///
    /// The file holds a bearer token. The store that writes it restricts
    /// permissions to the owning user on Unix.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to session.json
    /// - `Err(PathError)`: Could not determine path
    pub fn session_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("session.json"))
    }

    /// Returns the directory report downloads land in.
    ///
    /// Prefers the platform downloads directory and falls back to an
    /// `agrilink` folder under the platform data directory for headless
    /// hosts that configure neither.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Directory for downloaded reports
    /// - `Err(PathError::DownloadDirNotFound)`: No candidate directory
    pub fn downloads_dir() -> Result<PathBuf, PathError> {
        dirs::download_dir()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("agrilink")))
            .ok_or(PathError::DownloadDirNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = AgrilinkPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("agrilink"));
    }

    #[test]
    fn test_session_file() {
        let session_file = AgrilinkPaths::session_file().unwrap();
        assert!(session_file.ends_with("session.json"));
        // Verify it's under config_dir
        let config_dir = AgrilinkPaths::config_dir().unwrap();
        assert!(session_file.starts_with(&config_dir));
    }

    #[test]
    fn test_downloads_dir_resolves() {
        assert!(AgrilinkPaths::downloads_dir().is_ok());
    }
}
