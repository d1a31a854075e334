//! rJournalView main entrypoint.

use rjournalview::run;
use rjournalview::ui::messages::error;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so view output on stdout stays clean.
/// Set `RUST_LOG=rjournalview=debug` for detail.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
