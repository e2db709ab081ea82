use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::telemetry::{install_prometheus, FacadeMatchMetrics};
use docmatch::{DefaultDecoder, DocMatchConfig, DocumentDecoder, MatchOrchestrator};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Matcher shared by every request
    pub orchestrator: Arc<MatchOrchestrator>,

    /// Turns upload bytes into text or images
    pub decoder: Arc<dyn DocumentDecoder>,

    /// Renders `/metrics`; `None` when metrics are disabled
    pub prometheus: Option<PrometheusHandle>,
}

impl ServerState {
    /// Load the pipeline configuration and templates named by `config`.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let pipeline = DocMatchConfig::from_file(&config.pipeline_config)?;
        let mut orchestrator = MatchOrchestrator::from_config(&pipeline)?;

        let prometheus = if config.metrics_enabled {
            let handle = install_prometheus()
                .map_err(|err| ServerError::Config(format!("metrics recorder: {err}")))?;
            orchestrator = orchestrator.with_metrics(Arc::new(FacadeMatchMetrics));
            Some(handle)
        } else {
            None
        };

        Ok(Self::with_orchestrator(config, orchestrator, prometheus))
    }

    /// State around an already built orchestrator, using the default decoder.
    pub fn with_orchestrator(
        config: ServerConfig,
        orchestrator: MatchOrchestrator,
        prometheus: Option<PrometheusHandle>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            orchestrator: Arc::new(orchestrator),
            decoder: Arc::new(DefaultDecoder),
            prometheus,
        }
    }

    /// Swap in a different decoder, e.g. one with OCR or another PDF engine.
    pub fn with_decoder(mut self, decoder: Arc<dyn DocumentDecoder>) -> Self {
        self.decoder = decoder;
        self
    }
}
