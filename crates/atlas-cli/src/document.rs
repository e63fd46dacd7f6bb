//! Plain text out of résumé files.
//!
//! The reader is chosen by extension: `.pdf` goes through pdf-extract,
//! `.docx` and `.doc` through docx-rs, anything else is read as UTF-8.

use crate::error::DocumentError;
use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use std::fs;
use std::panic;
use std::path::Path;
use tracing::debug;

/// How a file is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Text layer of a PDF
    Pdf,
    /// Office Open XML document
    Docx,
    /// Legacy Word document, attempted as DOCX
    Doc,
    /// Anything else, read as UTF-8
    Text,
}

impl DocumentKind {
    /// Classify a path by its (case-insensitive) extension.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("pdf") => DocumentKind::Pdf,
            Some("docx") => DocumentKind::Docx,
            Some("doc") => DocumentKind::Doc,
            _ => DocumentKind::Text,
        }
    }
}

/// Read the text content of a document.
pub fn read_document(path: &Path) -> Result<String, DocumentError> {
    let kind = DocumentKind::from_path(path);
    let bytes = fs::read(path)?;
    debug!("Reading {} as {:?} ({} bytes)", path.display(), kind, bytes.len());

    match kind {
        DocumentKind::Pdf => pdf_text(&bytes),
        DocumentKind::Docx | DocumentKind::Doc => docx_text(&bytes),
        DocumentKind::Text => Ok(String::from_utf8(bytes)?),
    }
}

/// pdf-extract panics on some malformed files; the panic is turned into an error.
fn pdf_text(bytes: &[u8]) -> Result<String, DocumentError> {
    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(DocumentError::Pdf(e.to_string())),
        Err(_) => Err(DocumentError::Pdf("parser panicked on malformed input".to_string())),
    }
}

/// Paragraph texts joined with newlines; tabs become spaces.
fn docx_text(bytes: &[u8]) -> Result<String, DocumentError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| DocumentError::Docx(format!("{:?}", e)))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => text.push_str(&t.text.replace('\t', " ")),
                    RunChild::Tab(_) => text.push(' '),
                    _ => {}
                }
            }
        }
    }
    text
}
