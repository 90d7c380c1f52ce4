//! Shared test setup for the RAILGUN address codec crates.
// Standard lints
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::sync::Once;

use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod prelude;

static INIT: Once = Once::new();

/// Initialize globals for tests, such as the tracing subscriber and panic /
/// error reporting hooks.
///
/// Safe to call from every test; only the first call in a process has any
/// effect.
pub fn init() {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer().with_target(false);
        // Use the RUST_LOG env var, or by default only show warnings.
        let filter_layer =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .with(ErrorLayer::default())
            .init();

        color_eyre::install().expect("failed to install color-eyre error hooks");
    })
}
