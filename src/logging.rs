use tracing_subscriber::{fmt, EnvFilter};

use crate::settings::Logging;

/// Install the global fmt subscriber. `RUST_LOG` takes precedence over `logging.filter`.
///
/// Returns `false` when a subscriber was already installed, leaving it untouched.
pub fn init_tracing(settings: &Logging) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).try_init().is_ok()
}
