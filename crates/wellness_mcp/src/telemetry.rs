//! Log filter and metrics recorder setup for the server binary.

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Appended to every filter to keep rmcp internals quiet.
pub const QUIET_DEPENDENCIES: &str = "rmcp=warn,serve_inner=warn";

/// Log directive from `WELLNESS_LOG_LEVEL`, then `RUST_LOG`, then `info`.
/// Blank values count as unset.
pub fn log_level_with<F>(mut get: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    ["WELLNESS_LOG_LEVEL", "RUST_LOG"]
        .into_iter()
        .filter_map(|key| get(key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

pub fn log_level() -> String {
    log_level_with(|key| std::env::var(key).ok())
}

/// Subscriber filter for `level`. A directive that does not parse falls back
/// to `info`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(format!("{level},{QUIET_DEPENDENCIES}")).unwrap_or_else(|_| {
        EnvFilter::new(format!("{DEFAULT_LOG_LEVEL},{QUIET_DEPENDENCIES}"))
    })
}

/// Installs the global Prometheus recorder. No HTTP listener is started; the
/// handle renders the text exposition on demand.
pub fn install_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}
