//! timeledger main entrypoint.

use timeledger::run;
use tracing_subscriber::{EnvFilter, fmt};

/// Diagnostics on stderr, filtered by TIMELEDGER_LOG (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("TIMELEDGER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
