//! Input classification and decoding.
//!
//! Every upload is classified by file extension alone. The extension decides
//! which comparison path runs; the decoder only has to turn the raw bytes into
//! a [`CandidateDocument`] of the matching kind.

use std::fmt;

use image::GrayImage;
use serde::{Deserialize, Serialize};

use crate::MatchError;

/// Which comparison path handles a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Text,
    Image,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Text => "text",
            MatchKind::Image => "image",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
    Png,
    Jpeg,
    Bmp,
    Tiff,
}

impl DocumentFormat {
    /// Classify a filename by its final extension, case-insensitively.
    ///
    /// ```
    /// use docmatch::{DocumentFormat, MatchKind};
    ///
    /// assert_eq!(DocumentFormat::from_filename("scan.JPG"), Some(DocumentFormat::Jpeg));
    /// assert_eq!(DocumentFormat::from_filename("a.pdf").map(|f| f.kind()), Some(MatchKind::Text));
    /// assert_eq!(DocumentFormat::from_filename("notes.xyz"), None);
    /// ```
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, extension) = filename.rsplit_once('.')?;
        Self::from_extension(extension)
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            "txt" => Some(DocumentFormat::Txt),
            "png" => Some(DocumentFormat::Png),
            "jpg" | "jpeg" => Some(DocumentFormat::Jpeg),
            "bmp" => Some(DocumentFormat::Bmp),
            "tif" | "tiff" => Some(DocumentFormat::Tiff),
            _ => None,
        }
    }

    pub fn kind(self) -> MatchKind {
        match self {
            DocumentFormat::Pdf | DocumentFormat::Docx | DocumentFormat::Txt => MatchKind::Text,
            DocumentFormat::Png
            | DocumentFormat::Jpeg
            | DocumentFormat::Bmp
            | DocumentFormat::Tiff => MatchKind::Image,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Txt => "txt",
            DocumentFormat::Png => "png",
            DocumentFormat::Jpeg => "jpeg",
            DocumentFormat::Bmp => "bmp",
            DocumentFormat::Tiff => "tiff",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded upload, owned by a single match call.
#[derive(Debug, Clone, PartialEq)]
pub enum CandidateDocument {
    Text(String),
    /// 8-bit single-channel image.
    Image(GrayImage),
}

impl CandidateDocument {
    pub fn kind(&self) -> MatchKind {
        match self {
            CandidateDocument::Text(_) => MatchKind::Text,
            CandidateDocument::Image(_) => MatchKind::Image,
        }
    }
}

/// Converts raw upload bytes of a known format into a [`CandidateDocument`].
///
/// Text formats must yield [`CandidateDocument::Text`] and image formats
/// [`CandidateDocument::Image`]; failures are reported as
/// [`MatchError::ExtractionFailure`] or [`MatchError::UnreadableImage`].
pub trait DocumentDecoder: Send + Sync {
    fn decode(&self, format: DocumentFormat, bytes: &[u8]) -> Result<CandidateDocument, MatchError>;
}

/// Decoder for every supported format.
///
/// PDF pages and DOCX paragraphs are extracted when the `pdf` and `docx`
/// features are enabled (the default); otherwise those formats fail with
/// [`MatchError::ExtractionFailure`]. Other extractors plug in by implementing
/// [`DocumentDecoder`] and delegating the remaining formats here.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDecoder;

impl DocumentDecoder for DefaultDecoder {
    fn decode(&self, format: DocumentFormat, bytes: &[u8]) -> Result<CandidateDocument, MatchError> {
        match format {
            DocumentFormat::Txt => std::str::from_utf8(bytes)
                .map(|text| CandidateDocument::Text(text.to_owned()))
                .map_err(|err| {
                    MatchError::ExtractionFailure(format!("text is not valid UTF-8: {err}"))
                }),
            DocumentFormat::Pdf => decode_pdf(bytes).map(CandidateDocument::Text),
            DocumentFormat::Docx => decode_docx(bytes).map(CandidateDocument::Text),
            DocumentFormat::Png | DocumentFormat::Jpeg | DocumentFormat::Bmp | DocumentFormat::Tiff => {
                decode_grayscale(bytes).map(CandidateDocument::Image)
            }
        }
    }
}

#[cfg(feature = "pdf")]
fn decode_pdf(bytes: &[u8]) -> Result<String, MatchError> {
    crate::pdf::extract_text(bytes)
}

#[cfg(not(feature = "pdf"))]
fn decode_pdf(_: &[u8]) -> Result<String, MatchError> {
    Err(MatchError::ExtractionFailure(
        "built without the `pdf` feature".into(),
    ))
}

#[cfg(feature = "docx")]
fn decode_docx(bytes: &[u8]) -> Result<String, MatchError> {
    crate::docx::extract_text(bytes)
}

#[cfg(not(feature = "docx"))]
fn decode_docx(_: &[u8]) -> Result<String, MatchError> {
    Err(MatchError::ExtractionFailure(
        "built without the `docx` feature".into(),
    ))
}

/// Decode any supported raster format to 8-bit grayscale.
///
/// The container is sniffed from the bytes, so a PNG uploaded as `.jpg` still
/// decodes.
pub fn decode_grayscale(bytes: &[u8]) -> Result<GrayImage, MatchError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|err| MatchError::UnreadableImage(err.to_string()))?;
    let gray = decoded.to_luma8();
    if gray.width() == 0 || gray.height() == 0 {
        return Err(MatchError::UnreadableImage("image has no pixels".into()));
    }
    Ok(gray)
}
