pub mod config;
pub mod journal;
pub mod models;
pub mod session;
pub mod store;
pub mod triage;
pub mod voice;

use tracing_subscriber::EnvFilter;

pub use session::{SessionError, TriageReport, TriageSession};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the build's default filter. Calling this twice is a
/// no-op, so hosts that already installed a subscriber keep theirs.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    }
}
