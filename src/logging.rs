use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the tracing subscriber with console output. The milestone
/// progress log is a separate pipeline output, not a tracing sink.
pub fn init_logging() {
    let console_layer = fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("banks_etl=info".parse().unwrap()))
        .with(console_layer)
        .init();
}
