//! Logging and metrics around tool calls.

use std::fmt::Display;
use std::future::Future;
use std::time::Instant;

use tracing::debug;

pub const TOOL_CALLS_TOTAL: &str = "wellness_tool_calls_total";
pub const TOOL_DURATION_SECONDS: &str = "wellness_tool_duration_seconds";

/// Runs `operation`, logging its duration and outcome and counting the call
/// under the `tool` label.
pub async fn instrumented<T, E, Fut>(name: &'static str, operation: Fut) -> Result<T, E>
where
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let start = Instant::now();
    debug!("Starting operation: {}", name);

    let result = operation.await;

    let duration = start.elapsed();
    let outcome = match &result {
        Ok(_) => {
            debug!("Operation completed successfully: {} in {:?}", name, duration);
            "ok"
        }
        Err(e) => {
            debug!("Operation failed: {} in {:?} - error: {}", name, duration, e);
            "error"
        }
    };
    metrics::counter!(TOOL_CALLS_TOTAL, "tool" => name, "outcome" => outcome).increment(1);
    metrics::histogram!(TOOL_DURATION_SECONDS, "tool" => name).record(duration.as_secs_f64());

    result
}
