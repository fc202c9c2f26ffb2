//! Poll-and-notify scheduling
//!
//! A cycle is one fetch -> format -> notify pass. The worker runs cycles back
//! to back with a fixed sleep in between.

pub mod cycle;
pub mod worker;

pub use cycle::{run_cycle, CycleOutcome};
pub use worker::{describe_interval, MonitorError, MonitorWorker};
