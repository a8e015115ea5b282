//! Exclusive advisory lock around a read-decide-write cycle

use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Held exclusive lock on a check's lock file
///
/// The lock is released when the guard is dropped, including on early
/// returns and errors.
#[derive(Debug)]
pub struct StateLock {
    file: File,
    path: PathBuf,
}

impl StateLock {
    /// Block until the exclusive lock on `path` is acquired
    pub fn acquire(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)?;

        if file.try_lock_exclusive().is_err() {
            log::info!("Waiting for lock on {}", path.display());
            file.lock_exclusive()?;
        }
        log::debug!("Acquired state lock at {}", path.display());

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Path of the lock file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StateLock {
    fn drop(&mut self) {
        if let Err(e) = self.file.unlock() {
            log::warn!("Failed to release lock {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_released_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cpu.lock");

        let guard = StateLock::acquire(&path).unwrap();
        assert_eq!(guard.path(), path.as_path());

        let other = File::open(&path).unwrap();
        assert!(other.try_lock_exclusive().is_err());

        drop(guard);
        assert!(other.try_lock_exclusive().is_ok());
        other.unlock().unwrap();
    }
}
