//! Service layer for check execution
//!
//! Services encapsulate the business logic shared by every check: the
//! transition engine and the sample-classify-evaluate runner.

pub mod engine;
pub mod runner;

pub use engine::{Evaluation, TransitionEngine};
pub use runner::{run_check, CheckRun};
