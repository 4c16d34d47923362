use tracing_subscriber::EnvFilter;

/// Targets whose events are shown: the CLI itself and the conversion library.
const CRATE_TARGETS: &[&str] = &["epiweek", "epiweek_core"];

/// Installs the global subscriber.
///
/// Quiet by default so only warnings accompany a lookup; each `-v` opens one
/// more level (see [`filter_directives`]). A set `RUST_LOG` replaces this
/// filter entirely.
///
/// Events go to stderr: stdout carries the command's answer (a date, a week
/// code, the JSON table) and must stay pipeable.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// `-v` count to per-target directives. Trace level shows every week-count
/// cache miss and epi-year rollover.
fn filter_directives(verbosity: u8) -> String {
    let level = ["warn", "info", "debug"]
        .get(usize::from(verbosity))
        .copied()
        .unwrap_or("trace");
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
