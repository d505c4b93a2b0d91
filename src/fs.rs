//! File system port
//!
//! The processor reads and overwrites files through [`FileSystem`] so tests
//! can run it against an in-memory map.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{ScrubError, ScrubResult};

/// Abstract file system interface
pub trait FileSystem {
    /// Read file content, decoded as UTF-8
    fn read_to_string(&self, path: &Path) -> ScrubResult<String>;

    /// Replace file content
    fn write(&self, path: &Path, content: &str) -> ScrubResult<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;
}

/// Local disk implementation
#[derive(Debug, Clone, Copy)]
pub struct LocalFs {
    atomic_writes: bool,
}

impl LocalFs {
    pub fn new() -> Self {
        Self {
            atomic_writes: true,
        }
    }

    /// Write in place instead of through a temp file + rename
    pub fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic_writes = atomic;
        self
    }

    pub fn atomic_writes(&self) -> bool {
        self.atomic_writes
    }
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for LocalFs {
    fn read_to_string(&self, path: &Path) -> ScrubResult<String> {
        let bytes = std::fs::read(path).map_err(|e| ScrubError::io(path, e))?;
        String::from_utf8(bytes).map_err(|e| ScrubError::Encoding {
            path: path.to_path_buf(),
            offset: e.utf8_error().valid_up_to(),
        })
    }

    fn write(&self, path: &Path, content: &str) -> ScrubResult<()> {
        if self.atomic_writes {
            atomic_write(path, content.as_bytes())
        } else {
            std::fs::write(path, content).map_err(|e| ScrubError::io(path, e))
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Write content to a file atomically
///
/// Uses tempfile + rename next to the file a symlink resolves to, so the
/// link itself survives. An existing file keeps its permissions, and a
/// read-only one is refused rather than replaced.
pub fn atomic_write(path: &Path, content: &[u8]) -> ScrubResult<()> {
    let target = match std::fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(ScrubError::io(path, e)),
    };

    let existing = std::fs::metadata(&target).ok();
    if existing.as_ref().is_some_and(|meta| meta.permissions().readonly()) {
        return Err(ScrubError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied"),
        ));
    }

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| ScrubError::io(path, e))?;
    tmp.write_all(content).map_err(|e| ScrubError::io(path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| ScrubError::io(path, e))?;

    if let Some(meta) = existing {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| ScrubError::io(path, e))?;
    }

    tmp.persist(&target).map_err(|e| ScrubError::io(path, e.error))?;
    Ok(())
}

/// Mock file system for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: std::sync::Arc<std::sync::Mutex<std::collections::HashMap<PathBuf, String>>>,
    read_only: std::sync::Arc<std::sync::Mutex<std::collections::HashSet<PathBuf>>>,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.to_string());
        self
    }

    /// Make writes to `path` fail with `PermissionDenied`
    pub fn with_read_only(self, path: impl Into<PathBuf>) -> Self {
        self.read_only.lock().unwrap().insert(path.into());
        self
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> ScrubResult<String> {
        self.get(path).ok_or_else(|| {
            ScrubError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
            )
        })
    }

    fn write(&self, path: &Path, content: &str) -> ScrubResult<()> {
        if self.read_only.lock().unwrap().contains(path) {
            return Err(ScrubError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied"),
            ));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}
