//! Document conversion and manipulation primitives
//!
//! This crate provides the core operations behind the docmorph API:
//! page-range parsing, page extraction, whole-document rotation, and the
//! sentinel-page pipeline that wraps an external PDF↔Word conversion
//! engine. PDF structure is handled with lopdf, DOCX structure with
//! docx-rs; the cross-format rendering itself lives behind the
//! [`ConvertEngine`] trait.

pub mod error;
mod page_tree;
pub mod pipeline;
pub mod range;
pub mod rotate;
pub mod sentinel;
pub mod split;
pub mod word;

#[cfg(test)]
mod test_pdf;

pub use error::{ConvertError, PageRangeError, PdfError, SplitError};
pub use pipeline::{pdf_to_word, word_to_pdf, ConvertEngine};
pub use range::parse_page_range;
pub use rotate::{rotate_pages, Rotation};
pub use sentinel::page_count;
pub use split::select_pages;
