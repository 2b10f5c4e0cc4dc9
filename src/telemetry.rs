//! Telemetry helpers for hosts embedding `donut-widgets`.
//!
//! The engines only emit `tracing` events. Hosts either call
//! `init_default_tracing` or install their own subscriber and filters.

/// Default directive when `RUST_LOG` is unset: this crate at `info`, others silent.
pub const DEFAULT_FILTER: &str = "donut_widgets=info";

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// `RUST_LOG` overrides [`DEFAULT_FILTER`].
/// Returns `true` when initialization succeeds.
/// Returns `false` when the feature is disabled or the host already installed
/// a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
