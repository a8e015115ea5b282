//! Persisted last-known state per check
//!
//! One record per check identity, holding the bare severity token.

mod file;
mod lock;

pub use file::FileStateStore;
pub use lock::StateLock;

use crate::domain::{CheckId, Severity};
use crate::error::StateError;

/// Storage for the last recorded severity of each check
///
/// This trait abstracts the record location, allowing an in-memory
/// implementation in tests while the binary uses files on disk.
pub trait StateStore {
    /// Raw stored token, or `None` when absent or unreadable
    fn read(&self, check: &CheckId) -> Option<String>;

    /// Replace the record with `severity`
    fn write(&self, check: &CheckId, severity: Severity) -> Result<(), StateError>;

    /// Remove the record; returns whether one existed
    fn clear(&self, check: &CheckId) -> Result<bool, StateError>;

    /// Take an exclusive hold on the record for a read-decide-write cycle
    ///
    /// Stores without cross-process coordination return `Ok(None)`.
    fn lock(&self, _check: &CheckId) -> Result<Option<StateLock>, StateError> {
        Ok(None)
    }

    /// Last recorded severity, `OK` when absent or unrecognized
    fn load(&self, check: &CheckId) -> Severity {
        match self.read(check) {
            Some(token) => Severity::parse_strict(&token).unwrap_or_else(|| {
                log::warn!(
                    "Unrecognized state '{}' recorded for {}, assuming OK",
                    token.trim(),
                    check
                );
                Severity::Ok
            }),
            None => Severity::Ok,
        }
    }
}
