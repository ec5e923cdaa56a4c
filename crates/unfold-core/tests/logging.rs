//! Logging helpers used from outside the crate.

use tracing_subscriber::EnvFilter;
use unfold_core::logging::{PerfSpan, span_names};
use unfold_core::{unfold_debug, unfold_error, unfold_info, unfold_trace, unfold_warn};

#[test]
fn test_macros_resolve_through_crate() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let _perf = PerfSpan::new(span_names::DISPATCH);
    unfold_trace!(items = 3, "trace");
    unfold_debug!("debug {}", 2);
    unfold_info!(ok = true, "info");
    unfold_warn!("warn");
    unfold_error!("error");
}
