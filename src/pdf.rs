//! PDF text extraction.

use lopdf::Document;
use tracing::debug;

use crate::MatchError;

/// Extract the text of every page in order, each page followed by a newline.
pub(crate) fn extract_text(bytes: &[u8]) -> Result<String, MatchError> {
    let doc = Document::load_mem(bytes)
        .map_err(|err| MatchError::ExtractionFailure(format!("malformed pdf: {err}")))?;

    let pages = doc.get_pages();
    let mut text = String::new();
    for &number in pages.keys() {
        let page = doc.extract_text(&[number]).map_err(|err| {
            MatchError::ExtractionFailure(format!("pdf page {number}: {err}"))
        })?;
        text.push_str(page.trim_end_matches(['\n', '\r']));
        text.push('\n');
    }
    debug!(pages = pages.len(), chars = text.chars().count(), "extracted pdf text");
    Ok(text)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{Object, Stream, dictionary};

    /// Build a PDF with one Helvetica text line per page.
    pub(crate) fn pdf_with_pages(lines: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for line in lines {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*line)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut out = Vec::new();
        doc.save_to(&mut out).unwrap();
        out
    }

    #[test]
    fn pages_are_joined_in_order() {
        let bytes = pdf_with_pages(&["Invoice 123", "Issued in Berlin"]);
        let text = extract_text(&bytes).unwrap();
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        assert_eq!(lines, ["Invoice 123", "Issued in Berlin"]);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn garbage_is_an_extraction_failure() {
        let err = extract_text(b"not a pdf document").unwrap_err();
        assert!(matches!(err, MatchError::ExtractionFailure(ref msg) if msg.contains("pdf")));
    }
}
