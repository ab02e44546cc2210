use tracing_subscriber::{EnvFilter, fmt};

/// Installs a fmt subscriber filtered by `directive`. A second call is a no-op.
pub fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|error| {
        eprintln!("invalid log filter {directive:?} ({error}), falling back to info");
        EnvFilter::new("info")
    });
    if fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
