//! Every failure mode surfaces as a typed error, never a panic.

use std::io::Cursor;
use std::sync::Arc;

use docmatch::{
    CandidateDocument, ConfigLoadError, DefaultDecoder, DocMatchConfig, DocumentDecoder,
    DocumentFormat, MatchError, MatchKind, MatchOrchestrator, TemplateError, TemplateSet,
};
use image::{GrayImage, ImageFormat, Luma};

fn gradient(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| Luma([(x + y) as u8]))
}

fn both() -> MatchOrchestrator {
    MatchOrchestrator::new(
        TemplateSet::new()
            .with_text("Template text")
            .with_image(gradient(30, 20)),
    )
}

#[test]
fn unsupported_formats() {
    let orchestrator = both();
    for name in ["archive.zip", "photo.gif", "noextension", "trailingdot.", "doc.xyz"] {
        let err = orchestrator
            .run_bytes(name, b"whatever", &DefaultDecoder)
            .unwrap_err();
        assert!(
            matches!(err, MatchError::UnsupportedFormat(_)),
            "{name} gave {err:?}"
        );
        assert_eq!(err.code(), "UNSUPPORTED_FORMAT");
    }
}

#[test]
fn unreadable_images() {
    let orchestrator = both();
    let err = orchestrator
        .run_bytes("scan.jpg", b"\xff\xd8 truncated", &DefaultDecoder)
        .unwrap_err();
    assert!(matches!(err, MatchError::UnreadableImage(_)));

    let err = orchestrator
        .run("scan.tiff", CandidateDocument::Image(GrayImage::new(0, 0)))
        .unwrap_err();
    assert!(matches!(err, MatchError::UnreadableImage(_)));
}

#[test]
fn extraction_failures() {
    let orchestrator = both();
    let err = orchestrator
        .run_bytes("notes.txt", &[0xc3, 0x28], &DefaultDecoder)
        .unwrap_err();
    assert!(matches!(err, MatchError::ExtractionFailure(_)));

    for name in ["contract.pdf", "letter.docx"] {
        let err = orchestrator
            .run_bytes(name, b"binary", &DefaultDecoder)
            .unwrap_err();
        assert!(matches!(err, MatchError::ExtractionFailure(_)));
    }
}

#[test]
fn custom_decoder_supplies_pdf_text() {
    struct StubPdf;
    impl DocumentDecoder for StubPdf {
        fn decode(
            &self,
            format: DocumentFormat,
            bytes: &[u8],
        ) -> Result<CandidateDocument, MatchError> {
            match format {
                DocumentFormat::Pdf => Ok(CandidateDocument::Text("Template text".into())),
                other => DefaultDecoder.decode(other, bytes),
            }
        }
    }

    let result = both()
        .run_bytes("contract.pdf", b"%PDF-1.7", &StubPdf)
        .unwrap();
    assert_eq!(result.score, 100.0);
    assert_eq!(result.kind, MatchKind::Text);
}

#[test]
fn decoder_returning_wrong_kind_is_rejected() {
    struct Confused;
    impl DocumentDecoder for Confused {
        fn decode(&self, _: DocumentFormat, _: &[u8]) -> Result<CandidateDocument, MatchError> {
            Ok(CandidateDocument::Text("surprise".into()))
        }
    }

    let err = both()
        .run_bytes("scan.png", b"", &Confused)
        .unwrap_err();
    assert!(matches!(err, MatchError::UnreadableImage(_)));
}

#[test]
fn missing_templates() {
    let image_only = MatchOrchestrator::new(TemplateSet::new().with_image(gradient(4, 4)));
    let err = image_only
        .run_bytes("a.txt", b"text", &DefaultDecoder)
        .unwrap_err();
    assert_eq!(err, MatchError::TemplateUnavailable(MatchKind::Text));
    assert_eq!(err.code(), "TEMPLATE_UNAVAILABLE");
}

#[test]
fn image_decodes_even_without_a_matching_template() {
    let mut png = Cursor::new(Vec::new());
    gradient(8, 8).write_to(&mut png, ImageFormat::Png).unwrap();

    let text_only = MatchOrchestrator::new(TemplateSet::new().with_text("x"));
    let err = text_only
        .run_bytes("a.png", png.get_ref(), &DefaultDecoder)
        .unwrap_err();
    assert_eq!(err, MatchError::TemplateUnavailable(MatchKind::Image));
}

#[test]
fn config_errors() {
    assert!(matches!(
        DocMatchConfig::from_yaml("version: [unclosed"),
        Err(ConfigLoadError::YamlParse(_))
    ));
    assert!(matches!(
        DocMatchConfig::from_file("/nonexistent/docmatch.yaml"),
        Err(ConfigLoadError::FileRead(_))
    ));
    assert!(matches!(
        DocMatchConfig::from_yaml("version: \"9\"\ntemplates:\n  text_path: t.txt\n"),
        Err(ConfigLoadError::UnsupportedVersion(_))
    ));
}

#[test]
fn template_errors() {
    let config = DocMatchConfig::default().with_text_template("/nonexistent/template.txt");
    assert!(matches!(
        MatchOrchestrator::from_config(&config),
        Err(TemplateError::ReadText { .. })
    ));

    assert!(matches!(
        MatchOrchestrator::from_config(&DocMatchConfig::default()),
        Err(TemplateError::NoTemplate)
    ));
}

#[test]
fn errors_are_shareable_across_threads() {
    let err: Arc<dyn std::error::Error + Send + Sync> =
        Arc::new(MatchError::UnsupportedFormat(".xyz".into()));
    assert_eq!(err.to_string(), "unsupported file format: .xyz");
}
