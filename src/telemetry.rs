//! Opt-in tracing setup for hosts embedding `timeline-rs`.
//!
//! The engine only emits `tracing` events. Hosts either install their own
//! subscriber or call one of these helpers with the `telemetry` feature on.
//! Per-frame reconciliation is logged at `debug`, per-scale diffs at `trace`.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is off or a global subscriber
/// is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        install(filter)
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Installs a compact fmt subscriber with an explicit filter directive such
/// as `"timeline_rs=trace"`, ignoring `RUST_LOG`.
#[must_use]
pub fn init_tracing_with_filter(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        install(tracing_subscriber::EnvFilter::new(directives))
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}

#[cfg(feature = "telemetry")]
fn install(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn helpers_are_inert_without_feature() {
        assert!(!super::init_default_tracing());
        assert!(!super::init_tracing_with_filter("debug"));
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn second_install_reports_existing_subscriber() {
        let _ = super::init_tracing_with_filter("timeline_rs=debug");
        assert!(!super::init_default_tracing());
    }
}
