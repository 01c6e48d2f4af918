//! LibreOffice-backed conversion engine
//!
//! Shells out to `soffice --headless --convert-to`. Scratch files live in a
//! per-invocation temp directory that is removed when the guard drops, on
//! success and on every error path.

use docmorph_core::{ConvertEngine, ConvertError};
use std::process::Command;

pub struct SofficeEngine {
    binary: String,
}

impl SofficeEngine {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn convert(
        &self,
        input: &[u8],
        input_ext: &str,
        target: &str,
        extra_args: &[&str],
    ) -> Result<Vec<u8>, ConvertError> {
        let dir = tempfile::tempdir().map_err(|e| {
            ConvertError::ConversionFailed(format!("Failed to create temp dir: {}", e))
        })?;

        let input_path = dir.path().join(format!("input.{}", input_ext));
        std::fs::write(&input_path, input).map_err(|e| {
            ConvertError::ConversionFailed(format!("Failed to write temp input: {}", e))
        })?;

        let output = Command::new(&self.binary)
            .args(extra_args)
            .arg("--headless")
            .arg("--convert-to")
            .arg(target)
            .arg("--outdir")
            .arg(dir.path())
            .arg(&input_path)
            .output()
            .map_err(|e| {
                ConvertError::ConversionFailed(format!(
                    "Failed to run {}: {}",
                    self.binary, e
                ))
            })?;

        if !output.status.success() {
            return Err(ConvertError::ConversionFailed(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        // A convert-to target may carry a filter suffix ("docx:MS Word ...")
        let ext = target.split(':').next().unwrap_or(target);
        let output_path = dir.path().join(format!("input.{}", ext));
        std::fs::read(&output_path).map_err(|e| {
            ConvertError::ConversionFailed(format!("Converter produced no output: {}", e))
        })
    }
}

impl ConvertEngine for SofficeEngine {
    fn pdf_to_docx(&self, pdf: &[u8]) -> Result<Vec<u8>, ConvertError> {
        self.convert(
            pdf,
            "pdf",
            "docx:MS Word 2007 XML",
            &["--infilter=writer_pdf_import"],
        )
    }

    fn docx_to_pdf(&self, docx: &[u8]) -> Result<Vec<u8>, ConvertError> {
        self.convert(docx, "docx", "pdf", &[])
    }
}
