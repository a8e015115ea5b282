//! Mock implementations for testing
//!
//! Provides in-memory state, a recording notifier and canned command
//! output so checks can run without touching the host.

use crate::checks::CommandRunner;
use crate::domain::{CheckId, Notification, Severity};
use crate::error::{NotifyError, SampleError, StateError};
use crate::notify::Notifier;
use crate::state::StateStore;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// In-memory state store
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    records: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    fail_writes: bool,
}

impl MemoryStateStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: seed a raw token for a check
    pub fn with_state(self, check: &str, token: &str) -> Self {
        self.records
            .borrow_mut()
            .insert(check.to_string(), token.to_string());
        self
    }

    /// Builder: make every write fail
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Number of successful writes
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl StateStore for MemoryStateStore {
    fn read(&self, check: &CheckId) -> Option<String> {
        self.records.borrow().get(check.as_str()).cloned()
    }

    fn write(&self, check: &CheckId, severity: Severity) -> Result<(), StateError> {
        if self.fail_writes {
            return Err(StateError::Write {
                check: check.to_string(),
                dir: "<memory>".to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.records
            .borrow_mut()
            .insert(check.to_string(), severity.as_str().to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn clear(&self, check: &CheckId) -> Result<bool, StateError> {
        Ok(self.records.borrow_mut().remove(check.as_str()).is_some())
    }
}

/// Notifier that records everything it is asked to send
///
/// Clones share the same log, so a test can keep one handle and give
/// another to a `NotificationManager`.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications received so far
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Command runner returning fixed output per program
#[derive(Debug, Default)]
pub struct CannedRunner {
    outputs: HashMap<String, std::result::Result<String, (i32, String)>>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl CannedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: program prints `stdout` and exits 0
    pub fn with_output(mut self, program: &str, stdout: &str) -> Self {
        self.outputs
            .insert(program.to_string(), Ok(stdout.to_string()));
        self
    }

    /// Builder: program exits with `status` and `stderr`
    pub fn with_failure(mut self, program: &str, status: i32, stderr: &str) -> Self {
        self.outputs
            .insert(program.to_string(), Err((status, stderr.to_string())));
        self
    }

    /// Every invocation as `[program, args...]`
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for CannedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, SampleError> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(|a| a.to_string()));
        self.calls.borrow_mut().push(call);

        match self.outputs.get(program) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err((status, stderr))) => Err(SampleError::CommandFailed {
                command: program.to_string(),
                status: *status,
                stderr: stderr.clone(),
            }),
            None => Err(SampleError::Spawn {
                command: program.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            }),
        }
    }
}
