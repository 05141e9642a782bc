pub mod colors;
pub mod date;
pub mod path;
pub mod table;
pub mod time;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, filtered by `RUST_LOG`
/// (default `rtimesheet=warn`).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rtimesheet=warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
