use tracing_subscriber::EnvFilter;

// Structured json logs on stdout; RUST_LOG overrides the default `info` level.
pub fn setup_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // ansi color codes are noise once the json lines reach a log collector.
        .with_ansi(false)
        .json()
        .try_init();
}
