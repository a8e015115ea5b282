//! File-backed state records
//!
//! Records live at `{dir}/{check}.state`. Writes go through a temporary
//! file in the same directory and an atomic rename.

use super::{StateLock, StateStore};
use crate::domain::{CheckId, Severity};
use crate::error::StateError;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Mode of persisted records; other users must be able to run `status`
#[cfg(unix)]
const RECORD_MODE: u32 = 0o644;

/// State store keeping one small file per check
#[derive(Debug, Clone)]
pub struct FileStateStore {
    dir: PathBuf,
    locking: bool,
}

impl FileStateStore {
    /// Create a store rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            locking: false,
        }
    }

    /// Enable exclusive per-check locking around evaluations
    pub fn with_locking(mut self, locking: bool) -> Self {
        self.locking = locking;
        self
    }

    /// Default state directory (the system temporary directory)
    pub fn default_dir() -> PathBuf {
        std::env::temp_dir()
    }

    /// Directory holding the records
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the record for a check
    pub fn record_path(&self, check: &CheckId) -> PathBuf {
        self.dir.join(format!("{}.state", check))
    }

    fn lock_path(&self, check: &CheckId) -> PathBuf {
        self.dir.join(format!("{}.lock", check))
    }

    fn write_atomic(&self, check: &CheckId, severity: Severity) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(severity.as_str().as_bytes())?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(RECORD_MODE))?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(self.record_path(check)).map_err(|e| e.error)?;
        Ok(())
    }
}

impl StateStore for FileStateStore {
    fn read(&self, check: &CheckId) -> Option<String> {
        let path = self.record_path(check);
        match fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Could not read {}: {}, assuming OK", path.display(), e);
                None
            }
        }
    }

    fn write(&self, check: &CheckId, severity: Severity) -> Result<(), StateError> {
        self.write_atomic(check, severity)
            .map_err(|source| StateError::Write {
                check: check.to_string(),
                dir: self.dir.display().to_string(),
                source,
            })?;
        log::debug!("Recorded {} for {}", severity, check);
        Ok(())
    }

    fn clear(&self, check: &CheckId) -> Result<bool, StateError> {
        match fs::remove_file(self.record_path(check)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StateError::Remove {
                check: check.to_string(),
                source,
            }),
        }
    }

    fn lock(&self, check: &CheckId) -> Result<Option<StateLock>, StateError> {
        if !self.locking {
            return Ok(None);
        }
        fs::create_dir_all(&self.dir)
            .and_then(|()| StateLock::acquire(&self.lock_path(check)))
            .map(Some)
            .map_err(|source| StateError::Lock {
                check: check.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str) -> CheckId {
        CheckId::new(name).unwrap()
    }

    #[test]
    fn test_save_and_load_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path());
        let id = check("test_save_load");

        store.write(&id, Severity::Warning).unwrap();
        assert_eq!(store.load(&id), Severity::Warning);
        assert_eq!(fs::read_to_string(store.record_path(&id)).unwrap(), "WARNING");
    }

    #[test]
    fn test_load_state_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path());
        assert_eq!(store.read(&check("missing")), None);
        assert_eq!(store.load(&check("missing")), Severity::Ok);
    }

    #[test]
    fn test_state_transitions_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path());
        let id = check("transitions");

        for severity in [Severity::Warning, Severity::Critical, Severity::Ok] {
            store.write(&id, severity).unwrap();
            assert_eq!(store.load(&id), severity);
        }
        assert_eq!(fs::read_to_string(store.record_path(&id)).unwrap(), "OK");
    }

    #[test]
    fn test_corrupt_record_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path());
        let id = check("corrupt");
        fs::write(store.record_path(&id), "garbage\n").unwrap();
        assert_eq!(store.load(&id), Severity::Ok);
    }

    #[test]
    fn test_records_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path());
        store.write(&check("cpu"), Severity::Critical).unwrap();
        assert_eq!(store.load(&check("disk")), Severity::Ok);
        assert_eq!(store.load(&check("cpu")), Severity::Critical);
    }

    #[test]
    fn test_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path());
        let id = check("clear");
        assert!(!store.clear(&id).unwrap());
        store.write(&id, Severity::Warning).unwrap();
        assert!(store.clear(&id).unwrap());
        assert_eq!(store.read(&id), None);
    }

    #[test]
    fn test_write_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path().join("nested").join("state"));
        store.write(&check("cpu"), Severity::Warning).unwrap();
        assert_eq!(store.load(&check("cpu")), Severity::Warning);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("plain-file");
        fs::write(&not_a_dir, "x").unwrap();
        let store = FileStateStore::new(&not_a_dir);

        let err = store.write(&check("cpu"), Severity::Ok).unwrap_err();
        assert!(matches!(err, StateError::Write { .. }));
    }

    #[test]
    fn test_lock_disabled_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path());
        assert!(store.lock(&check("cpu")).unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_record_readable_by_other_users() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path());
        let id = check("disk");
        store.write(&id, Severity::Critical).unwrap();

        let mode = fs::metadata(store.record_path(&id))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_lock_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path()).with_locking(true);
        let guard = store.lock(&check("cpu")).unwrap();
        assert!(guard.is_some());
        assert!(dir.path().join("cpu.lock").exists());
    }
}
