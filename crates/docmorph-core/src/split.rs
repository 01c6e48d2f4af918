//! Page extraction
//!
//! Builds a new PDF containing the requested pages, in the requested order.

use crate::error::{PdfError, SplitError};
use crate::page_tree;
use lopdf::{Document, Object, ObjectId};
use std::collections::HashSet;

/// Extract pages from a PDF by 1-based index.
///
/// Indices are honored in order, so `[3, 1]` produces a document whose
/// first page is the source's page 3. A repeated index selects the page
/// again. Out-of-range indices (including 0) are silently dropped; if
/// nothing survives the filter the operation fails with
/// [`SplitError::NoPagesSelected`].
pub fn select_pages(pdf_bytes: &[u8], indices: &[u32]) -> Result<Vec<u8>, SplitError> {
    let mut doc =
        Document::load_mem(pdf_bytes).map_err(|e| PdfError::Parse(e.to_string()))?;

    let page_map = doc.get_pages();
    let page_count = page_map.len() as u32;

    let mut selected: Vec<ObjectId> = Vec::new();
    let mut used: HashSet<ObjectId> = HashSet::new();

    for &index in indices {
        if index < 1 || index > page_count {
            continue;
        }
        let page_id = page_map[&index];
        if used.insert(page_id) {
            selected.push(page_id);
        } else {
            // A page object may appear only once in the tree; repeats get
            // a shallow copy referencing the same content streams.
            let page_dict = doc
                .get_object(page_id)
                .and_then(Object::as_dict)
                .map_err(|e| PdfError::Operation(format!("Invalid page object: {}", e)))?
                .clone();
            let copy_id = doc.add_object(Object::Dictionary(page_dict));
            selected.push(copy_id);
        }
    }

    if selected.is_empty() {
        return Err(SplitError::NoPagesSelected);
    }

    page_tree::update_page_tree(&mut doc, selected)?;

    // Drop the unselected pages and their orphaned resources
    doc.prune_objects();
    doc.compress();

    Ok(page_tree::save_to_bytes(&mut doc)?)
}
