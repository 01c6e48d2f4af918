//! DOCX body-block edits
//!
//! The DOCX halves of the sentinel workaround (see [`crate::sentinel`]):
//! trimming the trailing artifact block from a converted document, and
//! padding a source document with one page-breaking blank paragraph.

use crate::error::ConvertError;
use docx_rs::{read_docx, BreakType, Docx, DocumentChild, Paragraph, Run};
use std::io::Cursor;

/// Remove the last structural block from a DOCX body.
///
/// Preference order matches the artifact the converter emits: the last
/// paragraph if the body has any paragraphs, otherwise the last table if it
/// has any tables. A body with neither is returned unchanged.
pub fn remove_last_block(docx_bytes: &[u8]) -> Result<Vec<u8>, ConvertError> {
    let mut docx = load_docx(docx_bytes)?;

    let children = &mut docx.document.children;
    let target = children
        .iter()
        .rposition(|c| matches!(c, DocumentChild::Paragraph(_)))
        .or_else(|| {
            children
                .iter()
                .rposition(|c| matches!(c, DocumentChild::Table(_)))
        });

    if let Some(index) = target {
        children.remove(index);
    }

    pack_docx(docx)
}

/// Append one paragraph holding a page break, so the converted PDF gains
/// exactly one trailing blank page.
pub fn append_sentinel_paragraph(docx_bytes: &[u8]) -> Result<Vec<u8>, ConvertError> {
    let mut docx = load_docx(docx_bytes)?;

    docx.document.children.push(DocumentChild::Paragraph(Box::new(
        Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
    )));

    pack_docx(docx)
}

fn load_docx(docx_bytes: &[u8]) -> Result<Docx, ConvertError> {
    read_docx(docx_bytes)
        .map_err(|e| ConvertError::ConversionFailed(format!("Failed to read DOCX: {}", e)))
}

fn pack_docx(docx: Docx) -> Result<Vec<u8>, ConvertError> {
    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| ConvertError::ConversionFailed(format!("Failed to write DOCX: {}", e)))?;
    Ok(cursor.into_inner())
}
