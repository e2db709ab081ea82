//! DOCX text extraction: body paragraphs of `word/document.xml`.

use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;
use zip::ZipArchive;

use crate::MatchError;

const DOCUMENT_PART: &str = "word/document.xml";

fn failure(err: impl std::fmt::Display) -> MatchError {
    MatchError::ExtractionFailure(format!("malformed docx: {err}"))
}

/// Paragraph texts joined with `\n`. Empty paragraphs are kept.
pub(crate) fn extract_text(bytes: &[u8]) -> Result<String, MatchError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(failure)?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(failure)?
        .read_to_string(&mut xml)
        .map_err(failure)?;

    let paragraphs = paragraphs(&xml)?;
    debug!(paragraphs = paragraphs.len(), "extracted docx text");
    Ok(paragraphs.join("\n"))
}

fn paragraphs(xml: &str) -> Result<Vec<String>, MatchError> {
    let mut reader = Reader::from_str(xml);
    let mut out = Vec::new();
    let mut current: Option<String> = None;
    let mut in_run_text = false;

    loop {
        match reader.read_event().map_err(failure)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => current = Some(String::new()),
                b"t" => in_run_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" => out.push(String::new()),
                b"tab" => {
                    if let Some(p) = current.as_mut() {
                        p.push('\t');
                    }
                }
                b"br" | b"cr" => {
                    if let Some(p) = current.as_mut() {
                        p.push('\n');
                    }
                }
                _ => {}
            },
            Event::Text(t) if in_run_text => {
                let text = t.unescape().map_err(failure)?;
                if let Some(p) = current.as_mut() {
                    p.push_str(&text);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"p" => out.extend(current.take()),
                b"t" => in_run_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(out)
}
