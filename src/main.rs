use std::io;
use std::process;

use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so they never end up in the middle of a board
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = life::driver::run(stdin.lock(), stdout.lock()) {
        error!("{e:#}");
        process::exit(1);
    }
}
