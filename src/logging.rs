//! One-time, process-wide logging setup.
//!
//! Call [`init`] once before constructing any surface. Later calls are
//! no-ops, and a subscriber installed by the host application is left alone.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static LOGGING: OnceCell<bool> = OnceCell::new();

/// Install the fmt subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Returns true if this
/// call installed the subscriber, false if logging was already set up
/// (by an earlier call or by the host).
pub fn init(default_filter: &str) -> bool {
    let mut installed_now = false;
    LOGGING.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new(crate::constants::DEFAULT_LOG_FILTER));
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .is_ok();
        installed_now = installed;
        installed
    });
    if installed_now {
        tracing::debug!("Logging initialized");
    }
    installed_now
}

/// Returns true once [`init`] has run, whether or not it installed the subscriber
pub fn is_initialized() -> bool {
    LOGGING.get().is_some()
}
