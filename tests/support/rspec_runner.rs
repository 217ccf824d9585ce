//! Runs `rspec` suites inside ordinary `#[test]` functions.

use std::sync::Arc;

use rspec::{block::Suite, report::Report, ConfigurationBuilder, Logger, Runner};

/// Runs `suite` on one thread, so frame-by-frame scenarios report in the
/// order they were written, and fails the calling test if any example fails.
pub fn run_serial<T>(suite: &Suite<T>)
where
    T: Clone + Send + Sync + std::fmt::Debug,
{
    let logger = Arc::new(Logger::new(std::io::stdout()));
    let config = ConfigurationBuilder::default()
        .parallel(false)
        .exit_on_failure(false)
        .build()
        .unwrap_or_else(|e| panic!("rspec configuration failed: {e}"));
    let report = Runner::new(config, vec![logger]).run(suite);
    assert!(report.is_success(), "rspec suite reported failing examples");
}
