//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins over `default_level` when set. `json` switches to
/// one-object-per-line output for log shippers.
pub fn init_tracing(default_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
