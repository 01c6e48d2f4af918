//! Sentinel-page PDF edits
//!
//! The conversion engine appends one spurious trailing unit to its output
//! for each trailing blank page of input. Padding the source by exactly one
//! blank page and trimming exactly one trailing unit from the result
//! cancels the artifact. These are the PDF halves of that workaround; the
//! DOCX halves live in [`crate::word`].

use crate::error::PdfError;
use crate::page_tree;
use lopdf::{Dictionary, Document, Object, ObjectId};

/// Parse PDF bytes and return the page count.
pub fn page_count(pdf_bytes: &[u8]) -> Result<u32, PdfError> {
    let doc = Document::load_mem(pdf_bytes).map_err(|e| PdfError::Parse(e.to_string()))?;
    Ok(doc.get_pages().len() as u32)
}

/// Append exactly one blank page to a PDF.
///
/// The new page copies the last page's MediaBox so the padding is invisible
/// in mixed-orientation documents; letter size is the fallback for an
/// empty document.
pub fn add_blank_page(pdf_bytes: &[u8]) -> Result<Vec<u8>, PdfError> {
    let mut doc =
        Document::load_mem(pdf_bytes).map_err(|e| PdfError::Parse(e.to_string()))?;

    let mut page_refs: Vec<ObjectId> = doc.get_pages().into_values().collect();

    let media_box = page_refs
        .last()
        .and_then(|&id| doc.get_object(id).ok())
        .and_then(|o| o.as_dict().ok())
        .and_then(|d| d.get(b"MediaBox").ok())
        .cloned()
        .unwrap_or_else(|| {
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ])
        });

    let pages_id = page_tree::pages_root_id(&doc)?;

    let blank = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(pages_id)),
        ("MediaBox", media_box),
    ]);
    let blank_id = doc.add_object(blank);
    page_refs.push(blank_id);

    page_tree::update_page_tree(&mut doc, page_refs)?;
    doc.compress();

    page_tree::save_to_bytes(&mut doc)
}

/// Remove the last page of a PDF. A document with no pages is returned
/// unchanged.
pub fn remove_last_page(pdf_bytes: &[u8]) -> Result<Vec<u8>, PdfError> {
    let mut doc =
        Document::load_mem(pdf_bytes).map_err(|e| PdfError::Parse(e.to_string()))?;

    let count = doc.get_pages().len() as u32;
    if count == 0 {
        return Ok(pdf_bytes.to_vec());
    }

    doc.delete_pages(&[count]);
    doc.prune_objects();
    doc.compress();

    page_tree::save_to_bytes(&mut doc)
}
