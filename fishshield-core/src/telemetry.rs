//! Tracing bootstrap.
//!
//! Filter via `FISHSHIELD_LOG` (env-filter syntax), default `info`.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the global tracing subscriber. Idempotent; later calls (and a
/// subscriber already installed by the embedding application) are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("FISHSHIELD_LOG")
            .unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init();
    });
}
