use tracing_subscriber::{EnvFilter, prelude::*};

/// Installs the stderr subscriber used by the binaries. `RUST_LOG` takes
/// precedence over the `info` default. Calling it twice is harmless.
pub fn init() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let env_filter = EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(env_filter),
        )
        .try_init();
}
