use tracing_subscriber::{fmt::Layer, prelude::*, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(Layer::default().with_target(false))
        .with(filter)
        .init();
}
