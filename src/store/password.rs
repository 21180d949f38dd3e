//! Password persistence.
//!
//! # Responsibilities
//! - Load the current password from its plaintext file at startup
//! - Rewrite the whole file on every change
//!
//! # Design Decisions
//! - Only the first line of the file is the password
//! - Writes are best-effort; callers get an explicit outcome instead of an error

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of a password change.
#[derive(Debug)]
#[must_use]
pub enum PasswordWrite {
    /// Memory and file both hold the new value.
    Persisted,
    /// Memory holds the new value; the file is stale.
    MemoryOnly(io::Error),
}

impl PasswordWrite {
    pub fn is_persisted(&self) -> bool {
        matches!(self, PasswordWrite::Persisted)
    }
}

impl From<io::Result<()>> for PasswordWrite {
    fn from(result: io::Result<()>) -> Self {
        match result {
            Ok(()) => PasswordWrite::Persisted,
            Err(e) => PasswordWrite::MemoryOnly(e),
        }
    }
}

/// The single-value file mirroring the in-memory password.
#[derive(Debug, Clone)]
pub struct PasswordFile {
    path: PathBuf,
}

impl PasswordFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored password. `Ok(None)` when the file does not exist.
    pub fn load(&self) -> io::Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        match content.lines().next() {
            Some(line) => Ok(Some(line.to_string())),
            None => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "password file is empty",
            )),
        }
    }

    /// Overwrite the file with `password`.
    pub fn save(&self, password: &str) -> io::Result<()> {
        fs::write(&self.path, password)
    }

    /// Resolve the startup password.
    ///
    /// A missing file gets `default` written to it. An unreadable file falls
    /// back to `default` without touching the file.
    pub fn load_or_init(&self, default: &str) -> String {
        match self.load() {
            Ok(Some(password)) => {
                tracing::info!(path = ?self.path, "Loaded password from file");
                password
            }
            Ok(None) => {
                if let Err(e) = self.save(default) {
                    tracing::warn!(path = ?self.path, error = %e, "Failed to write default password");
                } else {
                    tracing::info!(path = ?self.path, "Initialized password file with default");
                }
                default.to_string()
            }
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "Failed to read password file, using default");
                default.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_initialized() {
        let dir = tempfile::tempdir().unwrap();
        let file = PasswordFile::new(dir.path().join("pw.txt"));

        assert_eq!(file.load_or_init("password123"), "password123");
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "password123");
    }

    #[test]
    fn test_existing_file_wins_over_default() {
        let dir = tempfile::tempdir().unwrap();
        let file = PasswordFile::new(dir.path().join("pw.txt"));
        fs::write(file.path(), "hunter2\nignored").unwrap();

        assert_eq!(file.load_or_init("password123"), "hunter2");
    }

    #[test]
    fn test_empty_file_falls_back_without_rewrite() {
        let dir = tempfile::tempdir().unwrap();
        let file = PasswordFile::new(dir.path().join("pw.txt"));
        fs::write(file.path(), "").unwrap();

        assert_eq!(file.load_or_init("password123"), "password123");
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "");
    }

    #[test]
    fn test_save_overwrites_everything() {
        let dir = tempfile::tempdir().unwrap();
        let file = PasswordFile::new(dir.path().join("pw.txt"));
        file.save("a-much-longer-password").unwrap();
        file.save("short").unwrap();

        assert_eq!(file.load().unwrap().as_deref(), Some("short"));
    }

    #[test]
    fn test_write_outcome_from_result() {
        assert!(PasswordWrite::from(Ok(())).is_persisted());
        let failed = PasswordWrite::from(Err(io::Error::other("disk full")));
        assert!(!failed.is_persisted());
    }
}
