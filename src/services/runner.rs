//! Check runner
//!
//! Sample → classify → evaluate for any check.

use crate::checks::{Check, Reading};
use crate::error::Result;
use crate::services::{Evaluation, TransitionEngine};
use crate::state::StateStore;

/// A sampled reading and what the engine made of it
#[derive(Debug, Clone, PartialEq)]
pub struct CheckRun {
    pub reading: Reading,
    pub evaluation: Evaluation,
}

impl CheckRun {
    pub fn exit_code(&self) -> i32 {
        self.evaluation.exit_code()
    }
}

/// Run a check once through the transition engine
///
/// Sampling errors abort before the engine is reached, leaving the
/// recorded state untouched.
pub fn run_check<C: Check, S: StateStore>(
    check: &C,
    engine: &TransitionEngine<S>,
) -> Result<CheckRun> {
    log::info!("{}", check.describe());

    let reading = check.sample()?;
    let severity = check.thresholds().classify(reading.value);
    log::debug!(
        "{} classified {} as {}",
        check.id(),
        reading.value,
        severity
    );

    let evaluation = engine.evaluate(check.id(), severity, check.label(), &reading.text)?;
    Ok(CheckRun {
        reading,
        evaluation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{CpuCheck, DiskCheck, MemoryCheck};
    use crate::domain::{CheckId, Severity, Transition};
    use crate::error::AppError;
    use crate::mock::{CannedRunner, MemoryStateStore, RecordingNotifier};
    use crate::notify::NotificationManager;

    fn engine_with(
        store: MemoryStateStore,
    ) -> (TransitionEngine<MemoryStateStore>, RecordingNotifier) {
        let recorder = RecordingNotifier::new();
        let manager = NotificationManager::new().with_notifier(Box::new(recorder.clone()));
        (TransitionEngine::new(store, manager), recorder)
    }

    fn df(percent: u32) -> String {
        format!(
            "Filesystem 1024-blocks Used Available Capacity Mounted on\n\
             /dev/sda1 100 {p} 0 {p}% /\n",
            p = percent
        )
    }

    #[test]
    fn test_disk_critical_alert() {
        let (engine, recorder) = engine_with(MemoryStateStore::new());
        let check = DiskCheck::new(80.0, 90.0, "/", CannedRunner::new().with_output("df", &df(95)))
            .unwrap();

        let run = run_check(&check, &engine).unwrap();

        assert_eq!(run.evaluation.current, Severity::Critical);
        assert_eq!(run.reading.value, 95.0);
        assert_eq!(run.exit_code(), 2);
        let sent = recorder.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].title, "CRITICAL: Disk usage");
        assert_eq!(sent[0].message, "Disk usage: 95% on /");
    }

    #[test]
    fn test_disk_warning_band() {
        let (engine, _recorder) = engine_with(MemoryStateStore::new());
        let check = DiskCheck::new(80.0, 90.0, "/", CannedRunner::new().with_output("df", &df(85)))
            .unwrap();
        assert_eq!(run_check(&check, &engine).unwrap().evaluation.current, Severity::Warning);
    }

    #[test]
    fn test_cpu_recovery() {
        let store = MemoryStateStore::new().with_state("cpu", "CRITICAL");
        let (engine, recorder) = engine_with(store);
        let top = "%Cpu(s):  2.0 us,  1.0 sy,  0.0 ni, 96.9 id,  0.0 wa\n";
        let check = CpuCheck::new(20.0, 10.0, CannedRunner::new().with_output("top", top)).unwrap();

        let run = run_check(&check, &engine).unwrap();

        assert_eq!(run.evaluation.transition, Transition::Recovery);
        assert_eq!(run.exit_code(), 0);
        let sent = recorder.sent();
        assert_eq!(sent[0].title, "RECOVERY: Cpu OK");
        assert_eq!(sent[0].message, "CPU idle normalizado: 96.9% idle (3.1% used)");
    }

    #[test]
    fn test_sampling_failure_leaves_state_untouched() {
        let store = MemoryStateStore::new().with_state("memory", "WARNING");
        let (engine, recorder) = engine_with(store);
        let check = MemoryCheck::new(20.0, 10.0, CannedRunner::new().with_failure("free", 1, "x"))
            .unwrap();

        let err = run_check(&check, &engine).unwrap_err();

        assert!(matches!(err, AppError::Sample(_)));
        assert_eq!(err.exit_code(), 2);
        assert!(recorder.sent().is_empty());
        assert_eq!(engine.store().writes(), 0);
        assert_eq!(
            engine.store().load(&CheckId::new("memory").unwrap()),
            Severity::Warning
        );
    }
}
