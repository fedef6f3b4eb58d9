use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` selects `debug`, `-vv` and above
/// `trace`, and the default is `warn`.
pub fn setup_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
