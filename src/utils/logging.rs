//! Tracing initialization

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter, e.g. `SFX_LOG=sfx=debug`
pub const LOG_ENV: &str = "SFX_LOG";

const DEFAULT_FILTER: &str = "sfx=warn";

static INIT: Once = Once::new();

/// Install the global subscriber, writing to stderr
///
/// Falls back to `sfx=warn` if `SFX_LOG` is unset or invalid. Calling this
/// more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
