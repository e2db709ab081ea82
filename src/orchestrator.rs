use std::sync::Arc;
use std::time::Instant;

use entities::{EntityRecognizer, RuleRecognizer, extract_key_features};
use image::GrayImage;
use imagematch::{ImageMatchConfig, match_template};
use similarity::{SimilarityConfig, score_with_config};
use tracing::{debug, warn};

use crate::config::DocMatchConfig;
use crate::document::{CandidateDocument, DocumentDecoder, DocumentFormat, MatchKind};
use crate::template::{TemplateError, TemplateSet};
use crate::{MatchError, MatchMetrics, MatchResult};

/// Dispatches uploads to the text or image path and assembles the result.
///
/// Built once at startup and shared (typically behind an `Arc`) by every
/// worker. Matching never mutates it, so no locking is involved.
#[derive(Clone)]
pub struct MatchOrchestrator {
    templates: Arc<TemplateSet>,
    recognizer: Arc<dyn EntityRecognizer>,
    similarity: SimilarityConfig,
    image: ImageMatchConfig,
    metrics: Option<Arc<dyn MatchMetrics>>,
}

impl MatchOrchestrator {
    /// Orchestrator with the rule-based recognizer and default tuning.
    pub fn new(templates: TemplateSet) -> Self {
        Self {
            templates: Arc::new(templates),
            recognizer: Arc::new(RuleRecognizer::new()),
            similarity: SimilarityConfig::default(),
            image: ImageMatchConfig::default(),
            metrics: None,
        }
    }

    /// Load the configured templates and apply every tuning section.
    pub fn from_config(cfg: &DocMatchConfig) -> Result<Self, TemplateError> {
        let text_path = cfg.text_template_path();
        let image_path = cfg.image_template_path();
        let templates = TemplateSet::load(text_path.as_deref(), image_path.as_deref())?;

        Ok(Self::new(templates)
            .with_recognizer(Arc::new(RuleRecognizer::from_config(&cfg.entities)))
            .with_similarity_config(cfg.similarity)
            .with_image_config(cfg.image))
    }

    pub fn with_recognizer(mut self, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        self.recognizer = recognizer;
        self
    }

    pub fn with_similarity_config(mut self, cfg: SimilarityConfig) -> Self {
        self.similarity = cfg;
        self
    }

    pub fn with_image_config(mut self, cfg: ImageMatchConfig) -> Self {
        self.image = cfg;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<dyn MatchMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Match an already decoded document.
    ///
    /// The path is chosen from `filename`'s extension. A document whose kind
    /// disagrees with that extension is rejected rather than rerouted.
    pub fn run(
        &self,
        filename: &str,
        document: CandidateDocument,
    ) -> Result<MatchResult, MatchError> {
        let start = Instant::now();
        let format = DocumentFormat::from_filename(filename);
        let result = match format {
            Some(format) => self.dispatch(format, &document),
            None => Err(unsupported(filename)),
        };
        self.finish(start, format.map(DocumentFormat::kind), filename, result)
    }

    /// Classify, decode with `decoder`, then match.
    pub fn run_bytes(
        &self,
        filename: &str,
        bytes: &[u8],
        decoder: &dyn DocumentDecoder,
    ) -> Result<MatchResult, MatchError> {
        let start = Instant::now();
        let format = DocumentFormat::from_filename(filename);
        let result = match format {
            Some(format) => decoder
                .decode(format, bytes)
                .and_then(|document| self.dispatch(format, &document)),
            None => Err(unsupported(filename)),
        };
        self.finish(start, format.map(DocumentFormat::kind), filename, result)
    }

    /// Score `text` against the text template and extract its key features.
    pub fn match_text(&self, text: &str) -> Result<MatchResult, MatchError> {
        let template = self
            .templates
            .text()
            .ok_or(MatchError::TemplateUnavailable(MatchKind::Text))?;

        let (score, features) = join(
            || score_with_config(text, template, &self.similarity),
            || extract_key_features(text, self.recognizer.as_ref()),
        );
        Ok(MatchResult::text(score, features))
    }

    /// Score `image` against the reference image.
    pub fn match_image(&self, image: &GrayImage) -> Result<MatchResult, MatchError> {
        let reference = self
            .templates
            .image()
            .ok_or(MatchError::TemplateUnavailable(MatchKind::Image))?;

        let matched = match_template(reference, image, &self.image)?;
        Ok(MatchResult::image(matched.score))
    }

    fn dispatch(
        &self,
        format: DocumentFormat,
        document: &CandidateDocument,
    ) -> Result<MatchResult, MatchError> {
        match (format.kind(), document) {
            (MatchKind::Text, CandidateDocument::Text(text)) => self.match_text(text),
            (MatchKind::Image, CandidateDocument::Image(image)) => self.match_image(image),
            (MatchKind::Image, CandidateDocument::Text(_)) => Err(MatchError::UnreadableImage(
                format!("{format} upload decoded to text"),
            )),
            (MatchKind::Text, CandidateDocument::Image(_)) => Err(MatchError::ExtractionFailure(
                format!("{format} upload decoded to an image"),
            )),
        }
    }

    fn finish(
        &self,
        start: Instant,
        kind: Option<MatchKind>,
        filename: &str,
        result: Result<MatchResult, MatchError>,
    ) -> Result<MatchResult, MatchError> {
        let latency = start.elapsed();
        let latency_ms = latency.as_secs_f64() * 1e3;
        match &result {
            Ok(matched) => debug!(
                filename,
                kind = %matched.kind,
                score = matched.score,
                latency_ms,
                "document matched"
            ),
            Err(err) => warn!(
                filename,
                code = err.code(),
                error = %err,
                latency_ms,
                "document rejected"
            ),
        }
        if let Some(metrics) = &self.metrics {
            metrics.record_match(kind, latency, result.as_ref());
        }
        result
    }
}

fn unsupported(filename: &str) -> MatchError {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or_default();
    if extension.is_empty() {
        MatchError::UnsupportedFormat(format!("{filename:?} has no extension"))
    } else {
        MatchError::UnsupportedFormat(format!(".{extension}"))
    }
}

#[cfg(feature = "parallel")]
fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    rayon::join(a, b)
}

#[cfg(not(feature = "parallel"))]
fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    (a(), b())
}
