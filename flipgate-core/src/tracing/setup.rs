//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Flipgate tracing/logging system.
///
/// Reads the `FLIPGATE_LOG` environment variable for per-subsystem log
/// levels, e.g. `FLIPGATE_LOG=estimate=debug,gates=info,storage=warn`.
///
/// Falls back to `flipgate=info` if `FLIPGATE_LOG` is not set or is
/// invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("FLIPGATE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("flipgate=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();

        tracing::debug!("flipgate tracing initialized");
    });
}
