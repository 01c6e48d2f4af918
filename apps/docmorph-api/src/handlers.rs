//! HTTP handlers for the docmorph API

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// An uploaded document plus any accompanying form fields.
struct Upload {
    file_name: String,
    bytes: Vec<u8>,
    fields: HashMap<String, String>,
}

impl Upload {
    /// File name without its extension, or `fallback` when the upload
    /// carried no usable name.
    fn stem(&self, fallback: &str) -> String {
        std::path::Path::new(&self.file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Drain a multipart request: the `file` field becomes the document, every
/// other field is collected as text.
async fn read_upload(mut multipart: Multipart) -> Result<Upload, ApiError> {
    let mut file_name = String::new();
    let mut bytes: Option<Vec<u8>> = None;
    let mut fields = HashMap::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::InvalidRequest(format!("Malformed multipart request: {}", e))
    })? {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("file") => {
                file_name = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(|e| {
                    ApiError::InvalidRequest(format!("Failed to read file data: {}", e))
                })?;
                bytes = Some(data.to_vec());
            }
            Some(other) => {
                let other = other.to_string();
                let value = field.text().await.map_err(|e| {
                    ApiError::InvalidRequest(format!("Failed to read field {}: {}", other, e))
                })?;
                fields.insert(other, value);
            }
            None => {}
        }
    }

    let bytes = bytes.ok_or_else(|| ApiError::InvalidRequest("No file uploaded".into()))?;
    if bytes.is_empty() {
        return Err(ApiError::InvalidRequest("No file uploaded".into()));
    }

    Ok(Upload {
        file_name,
        bytes,
        fields,
    })
}

/// Build a file-download response with content type and filename headers.
fn file_response(bytes: Vec<u8>, content_type: &str, filename: &str) -> Response {
    (
        StatusCode::OK,
        [
            ("Content-Type".to_string(), content_type.to_string()),
            (
                "Content-Disposition".to_string(),
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    )
        .into_response()
}

/// Run a document operation off the async executor.
async fn run_blocking<T, E, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Into<ApiError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("Blocking task failed: {}", e)))?
        .map_err(Into::into)
}

/// Convert an uploaded PDF to a Word document.
pub async fn pdf_to_word(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let upload = read_upload(multipart).await?;

    if !upload.file_name.to_lowercase().ends_with(".pdf") {
        return Err(ApiError::InvalidRequest("Please upload a PDF file".into()));
    }

    let filename = format!("{}.docx", upload.stem("converted"));
    let engine = state.engine.clone();
    let bytes = upload.bytes;
    let word_bytes =
        run_blocking(move || docmorph_core::pdf_to_word(engine.as_ref(), &bytes)).await?;

    tracing::info!("Converted PDF to Word: {}", filename);
    Ok(file_response(word_bytes, DOCX_MIME, &filename))
}

/// Convert an uploaded Word document to PDF.
pub async fn word_to_pdf(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let upload = read_upload(multipart).await?;

    let filename = format!("{}.pdf", upload.stem("converted"));
    let engine = state.engine.clone();
    let bytes = upload.bytes;
    let pdf_bytes =
        run_blocking(move || docmorph_core::word_to_pdf(engine.as_ref(), &bytes)).await?;

    tracing::info!("Converted Word to PDF: {}", filename);
    Ok(file_response(pdf_bytes, PDF_MIME, &filename))
}

/// Rotate every page of an uploaded PDF a quarter turn.
pub async fn rotate_pdf(multipart: Multipart) -> Result<Response, ApiError> {
    let upload = read_upload(multipart).await?;

    let rotation: docmorph_core::Rotation = upload
        .fields
        .get("rotationDirection")
        .ok_or_else(|| ApiError::InvalidRequest("Invalid rotation direction".into()))?
        .parse()
        .map_err(|_| ApiError::InvalidRequest("Invalid rotation direction".into()))?;

    let filename = format!("{}_{}_Rotated.pdf", upload.stem("Rotated"), rotation);
    let bytes = upload.bytes;
    let rotated =
        run_blocking(move || docmorph_core::rotate_pages(&bytes, rotation)).await?;

    Ok(file_response(rotated, PDF_MIME, &filename))
}

/// Extract the requested page range of an uploaded PDF into a new file.
pub async fn split(multipart: Multipart) -> Result<Response, ApiError> {
    let upload = read_upload(multipart).await?;

    let page_range = upload
        .fields
        .get("pageRange")
        .ok_or_else(|| ApiError::InvalidRequest("Page range not provided".into()))?;
    let pages = docmorph_core::parse_page_range(page_range)?;

    let filename = split_file_name(
        upload.fields.get("newFileName").map(String::as_str),
        &upload.stem("document"),
    );
    let bytes = upload.bytes;
    let selected = run_blocking(move || docmorph_core::select_pages(&bytes, &pages)).await?;

    tracing::info!("Split PDF into {}", filename);
    Ok(file_response(selected, PDF_MIME, &filename))
}

/// Output name for a split: the caller's choice (with `.pdf` appended when
/// missing) or `<stem>_split.pdf`.
fn split_file_name(requested: Option<&str>, stem: &str) -> String {
    match requested.map(str::trim).filter(|s| !s.is_empty()) {
        Some(name) if name.to_lowercase().ends_with(".pdf") => name.to_string(),
        Some(name) => format!("{}.pdf", name),
        None => format!("{}_split.pdf", stem),
    }
}
