//! Page-tree plumbing shared by the split and sentinel operations.

use crate::error::PdfError;
use lopdf::{Document, Object, ObjectId};

/// Resolve the root `/Pages` node of a document.
pub(crate) fn pages_root_id(doc: &Document) -> Result<ObjectId, PdfError> {
    let root_obj = doc
        .trailer
        .get(b"Root")
        .map_err(|_| PdfError::Operation("No Root in trailer".into()))?;

    let catalog_id = root_obj
        .as_reference()
        .map_err(|_| PdfError::Operation("Root is not a reference".into()))?;

    let catalog = doc
        .objects
        .get(&catalog_id)
        .ok_or_else(|| PdfError::Operation("Catalog not found".into()))?
        .as_dict()
        .map_err(|_| PdfError::Operation("Invalid catalog".into()))?;

    let pages_obj = catalog
        .get(b"Pages")
        .map_err(|_| PdfError::Operation("No Pages in catalog".into()))?;

    pages_obj
        .as_reference()
        .map_err(|_| PdfError::Operation("Pages is not a reference".into()))
}

/// Rewrite the root page tree so its Kids are exactly `page_refs`, in order.
///
/// The tree is flattened: intermediate page-tree nodes are bypassed and
/// later dropped by pruning.
pub(crate) fn update_page_tree(
    doc: &mut Document,
    page_refs: Vec<ObjectId>,
) -> Result<(), PdfError> {
    let pages_id = pages_root_id(doc)?;

    if let Some(Object::Dictionary(ref mut pages_dict)) = doc.objects.get_mut(&pages_id) {
        let kids = page_refs
            .iter()
            .map(|&id| Object::Reference(id))
            .collect::<Vec<_>>();
        pages_dict.set("Kids", Object::Array(kids));
        pages_dict.set("Count", Object::Integer(page_refs.len() as i64));
    } else {
        return Err(PdfError::Operation("Invalid pages dictionary".into()));
    }

    // Kids now hang directly off the root node
    for page_ref in page_refs {
        if let Some(Object::Dictionary(ref mut page_dict)) = doc.objects.get_mut(&page_ref) {
            page_dict.set("Parent", Object::Reference(pages_id));
        }
    }

    Ok(())
}

/// Serialize a document to bytes.
pub(crate) fn save_to_bytes(doc: &mut Document) -> Result<Vec<u8>, PdfError> {
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| PdfError::Operation(format!("Save failed: {}", e)))?;
    Ok(buffer)
}
