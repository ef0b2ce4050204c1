use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global subscriber: human-readable events on stderr, so they
/// never interleave with the reports on stdout.
///
/// `RUST_LOG` wins when set; otherwise each `-v` lowers the threshold from
/// `warn` to `info` to `debug`.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
