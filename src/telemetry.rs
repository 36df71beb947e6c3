//! Optional log output for hosts that have no subscriber of their own.
//!
//! Layout code logs through `tracing` under the `estate_charts` target:
//! `debug!` summaries per chart and `warn!` when negative bar values get
//! clamped. Nothing is printed until some subscriber is installed.

/// Target filter used when `RUST_LOG` is unset.
#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "estate_charts=info";

/// Installs a compact `fmt` subscriber honoring `RUST_LOG`.
///
/// Gives `false` without the `telemetry` feature, or when a global subscriber
/// is already set (a dashboard server usually installs one at startup).
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(all(test, not(feature = "telemetry")))]
mod tests {
    #[test]
    fn init_is_a_no_op_without_the_feature() {
        assert!(!super::init_default_tracing());
    }
}
