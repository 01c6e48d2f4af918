use thiserror::Error;

/// Failures while loading, editing, or serializing a PDF document.
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Failed to parse PDF: {0}")]
    Parse(String),

    #[error("PDF operation failed: {0}")]
    Operation(String),
}

/// Failures while parsing a page-range expression like "1-3, 5".
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PageRangeError {
    #[error("Page range expression is empty")]
    EmptyExpression,

    #[error("Invalid page range token: {0}")]
    InvalidToken(String),
}

/// Failures while extracting pages into a new document.
#[derive(Error, Debug)]
pub enum SplitError {
    #[error(transparent)]
    Pdf(#[from] PdfError),

    #[error("No pages found in the specified range")]
    NoPagesSelected,
}

/// Failures in the format-conversion pipeline.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Conversion failed: {0}")]
    ConversionFailed(String),
}

impl From<PdfError> for ConvertError {
    fn from(e: PdfError) -> Self {
        ConvertError::ConversionFailed(e.to_string())
    }
}
