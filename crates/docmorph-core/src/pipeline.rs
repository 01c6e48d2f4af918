//! Sentinel conversion pipeline
//!
//! Wraps an external format converter with the blank-page workaround: pad
//! the source by one page, convert, trim one trailing unit from the result.
//! The converter itself stays behind [`ConvertEngine`] so the workaround
//! (and the engine) can be swapped without touching parsing or selection.

use crate::error::ConvertError;
use crate::{sentinel, word};

/// An external cross-format conversion engine. Implementations own the
/// actual PDF↔DOCX rendering; this crate never inspects their internals.
pub trait ConvertEngine {
    fn pdf_to_docx(&self, pdf: &[u8]) -> Result<Vec<u8>, ConvertError>;
    fn docx_to_pdf(&self, docx: &[u8]) -> Result<Vec<u8>, ConvertError>;
}

/// Convert a PDF to a Word document.
///
/// The source is padded with one blank page before conversion and the last
/// body block (paragraph, else table) is trimmed from the converted
/// result. An unloadable or zero-page source fails; no partial output is
/// ever returned.
pub fn pdf_to_word<E>(engine: &E, pdf_bytes: &[u8]) -> Result<Vec<u8>, ConvertError>
where
    E: ConvertEngine + ?Sized,
{
    let pages = sentinel::page_count(pdf_bytes)?;
    if pages == 0 {
        return Err(ConvertError::ConversionFailed(
            "Source PDF has no pages".into(),
        ));
    }

    let padded = sentinel::add_blank_page(pdf_bytes)?;
    let converted = engine.pdf_to_docx(&padded)?;
    word::remove_last_block(&converted)
}

/// Convert a Word document to a PDF.
///
/// The source gains one page-breaking blank paragraph before conversion
/// and the converted PDF loses its last page, cancelling the converter's
/// trailing-page artifact.
pub fn word_to_pdf<E>(engine: &E, docx_bytes: &[u8]) -> Result<Vec<u8>, ConvertError>
where
    E: ConvertEngine + ?Sized,
{
    let padded = word::append_sentinel_paragraph(docx_bytes)?;
    let converted = engine.docx_to_pdf(&padded)?;
    Ok(sentinel::remove_last_page(&converted)?)
}
