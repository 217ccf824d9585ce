//! Logger bootstrap shared by the replay binary and tests.

use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// `verbose` lowers the default filter to debug, which is where per-step
/// collision and charge traces are logged. `RUST_LOG` still takes precedence.
/// Calling this again after a logger exists is harmless.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{} {:<5} {}] {}",
            buf.timestamp_millis(),
            record.level(),
            record.target().trim_start_matches("kings_trial::"),
            record.args()
        )
    });

    if builder.try_init().is_ok() {
        log::debug!("logging initialised at {level}");
    }
}
