//! Prometheus wiring for match observations.

use std::time::Duration;

use docmatch::{MatchError, MatchKind, MatchMetrics, MatchResult};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// Install the process-wide Prometheus recorder.
///
/// Only one recorder can be installed per process.
pub fn install_prometheus() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// [`MatchMetrics`] backed by the `metrics` facade.
///
/// - `docmatch_matches_total{kind, outcome}`: outcome is `ok` or an error code
/// - `docmatch_match_duration_seconds{kind}`
/// - `docmatch_match_score{kind}`: successful matches only
#[derive(Debug, Clone, Copy, Default)]
pub struct FacadeMatchMetrics;

impl MatchMetrics for FacadeMatchMetrics {
    fn record_match(
        &self,
        kind: Option<MatchKind>,
        latency: Duration,
        result: Result<&MatchResult, &MatchError>,
    ) {
        let kind = kind.map_or("unknown", MatchKind::as_str);
        let outcome = match result {
            Ok(_) => "ok",
            Err(err) => err.code(),
        };

        metrics::counter!("docmatch_matches_total", "kind" => kind, "outcome" => outcome)
            .increment(1);
        metrics::histogram!("docmatch_match_duration_seconds", "kind" => kind)
            .record(latency.as_secs_f64());
        if let Ok(matched) = result {
            metrics::histogram!("docmatch_match_score", "kind" => kind).record(matched.score);
        }
    }
}
