use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::DEFAULT_BUILD_DIRECTORY;
use crate::error::{Error, Result};

/// Working directory of every external invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildDirectory {
    path: PathBuf,
}

impl Default for BuildDirectory {
    fn default() -> Self {
        Self::new(DEFAULT_BUILD_DIRECTORY)
    }
}

impl BuildDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    /// Creates the directory if it is absent.
    ///
    /// Returns `true` when the directory was created by this call and `false`
    /// when it was already there. Calling it repeatedly is harmless.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the directory cannot be created; nothing else
    /// can proceed without it.
    pub fn ensure(&self) -> Result<bool> {
        if self.exists() {
            debug!("Build directory `{}` already exists", self.path.display());
            return Ok(false);
        }

        fs::create_dir_all(&self.path).map_err(|e| {
            Error::io_error(
                "build directory".to_string(),
                self.path.display().to_string(),
                e,
            )
        })?;

        info!("Created build directory `{}`", self.path.display());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        assert_eq!(BuildDirectory::default().path(), Path::new("build"));
    }

    #[test]
    fn test_ensure_creates_then_reuses() {
        let temp_dir = tempfile::tempdir().unwrap();
        let build_directory = BuildDirectory::new(temp_dir.path().join("build"));

        assert!(!build_directory.exists());
        assert!(build_directory.ensure().unwrap());
        assert!(build_directory.exists());
        assert!(!build_directory.ensure().unwrap());
        assert!(build_directory.exists());
    }

    #[test]
    fn test_ensure_fails_when_path_is_a_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("build");
        fs::write(&file_path, "not a directory").unwrap();

        let result = BuildDirectory::new(&file_path).ensure();
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
