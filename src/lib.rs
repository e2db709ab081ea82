//! Document matching against a fixed reference template.
//!
//! An upload is classified by its file extension and sent down one of two
//! paths:
//!
//! - **text** (PDF, DOCX, TXT): the extracted text is scored against the text
//!   template with the Ratcliff/Obershelp ratio ([`similarity`]) while the first
//!   person, date and location are pulled out of it ([`entities`]).
//! - **image** (PNG, JPEG, BMP, TIFF): the grayscale image is resized to the
//!   reference image and scored with normalized cross-correlation
//!   ([`imagematch`]).
//!
//! [`MatchOrchestrator`] owns the templates and the recognizer and is shared by
//! every caller. Decoding raw upload bytes sits behind [`DocumentDecoder`].

pub mod config;
mod document;
#[cfg(feature = "docx")]
mod docx;
mod orchestrator;
#[cfg(feature = "pdf")]
mod pdf;
mod template;

pub use crate::config::{ConfigLoadError, DocMatchConfig, TemplatePaths};
pub use crate::document::{
    CandidateDocument, DefaultDecoder, DocumentDecoder, DocumentFormat, MatchKind,
    decode_grayscale,
};
pub use crate::orchestrator::MatchOrchestrator;
pub use crate::template::{TemplateError, TemplateSet, load_image, load_text};

pub use entities::{EntityRecognizer, KeyFeatures, RecognizerConfig, RuleRecognizer};
pub use imagematch::{ImageMatchConfig, ImageMatchError, Interpolation};
pub use similarity::SimilarityConfig;

use std::time::Duration;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Reasons a single match call can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("unreadable image: {0}")]
    UnreadableImage(String),

    #[error("text extraction failed: {0}")]
    ExtractionFailure(String),

    #[error(
        "candidate image is {actual_width}x{actual_height}, smaller than the \
         {expected_width}x{expected_height} reference"
    )]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("no {0} template is configured")]
    TemplateUnavailable(MatchKind),
}

impl MatchError {
    /// Stable machine-readable identifier.
    pub fn code(&self) -> &'static str {
        match self {
            MatchError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            MatchError::UnreadableImage(_) => "UNREADABLE_IMAGE",
            MatchError::ExtractionFailure(_) => "EXTRACTION_FAILURE",
            MatchError::DimensionMismatch { .. } => "DIMENSION_MISMATCH",
            MatchError::TemplateUnavailable(_) => "TEMPLATE_UNAVAILABLE",
        }
    }
}

impl From<ImageMatchError> for MatchError {
    fn from(value: ImageMatchError) -> Self {
        match value {
            ImageMatchError::EmptyImage(role) => {
                MatchError::UnreadableImage(format!("{role} image has no pixels"))
            }
            ImageMatchError::DimensionMismatch {
                expected_width,
                expected_height,
                actual_width,
                actual_height,
            } => MatchError::DimensionMismatch {
                expected_width,
                expected_height,
                actual_width,
                actual_height,
            },
        }
    }
}

/// Outcome of a successful match.
///
/// Text results always carry `features`; image results never do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Similarity in `[0, 100]`. Serialized rounded to two decimals.
    #[serde(serialize_with = "serialize_score")]
    pub score: f64,
    pub kind: MatchKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<KeyFeatures>,
}

impl MatchResult {
    pub fn text(score: f64, features: KeyFeatures) -> Self {
        Self {
            score,
            kind: MatchKind::Text,
            features: Some(features),
        }
    }

    pub fn image(score: f64) -> Self {
        Self {
            score,
            kind: MatchKind::Image,
            features: None,
        }
    }

    /// Score rounded to two decimal places, as reported to clients.
    pub fn rounded_score(&self) -> f64 {
        round_two_places(self.score)
    }
}

fn round_two_places(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn serialize_score<S: Serializer>(score: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_two_places(*score))
}

/// Observer for match calls.
///
/// `kind` is `None` when the upload could not be classified.
pub trait MatchMetrics: Send + Sync {
    fn record_match(
        &self,
        kind: Option<MatchKind>,
        latency: Duration,
        result: Result<&MatchResult, &MatchError>,
    );
}
