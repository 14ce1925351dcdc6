//! Document → text extraction for uploaded resumes.
//!
//! `AppState` holds an `Arc<dyn DocumentExtractor>` so the handler never knows
//! which backend turned bytes into text.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF";

#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    /// Returns the full text of the uploaded document.
    async fn extract_text(&self, file_name: &str, data: Bytes) -> Result<String, AppError>;
}

/// Supported upload formats, decided from file extension and magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    pub fn detect(file_name: &str, data: &[u8]) -> Option<Self> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => Some(DocumentKind::Pdf),
            Some("txt") | Some("md") => Some(DocumentKind::PlainText),
            _ if data.starts_with(PDF_MAGIC) => Some(DocumentKind::Pdf),
            _ => None,
        }
    }
}

/// Default extractor: PDF via `pdf-extract`, plain text as UTF-8.
pub struct UploadTextExtractor;

#[async_trait]
impl DocumentExtractor for UploadTextExtractor {
    async fn extract_text(&self, file_name: &str, data: Bytes) -> Result<String, AppError> {
        let kind = DocumentKind::detect(file_name, &data).ok_or_else(|| {
            AppError::ExtractionFailure(format!("unsupported document type: '{file_name}'"))
        })?;

        debug!(file_name, ?kind, bytes = data.len(), "Extracting document text");

        match kind {
            DocumentKind::Pdf => {
                // pdf-extract is synchronous and CPU-bound
                tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
                    .await
                    .map_err(|e| {
                        AppError::ExtractionFailure(format!("PDF parser aborted on '{file_name}': {e}"))
                    })?
                    .map_err(|e| AppError::ExtractionFailure(format!("'{file_name}': {e}")))
            }
            DocumentKind::PlainText => String::from_utf8(data.to_vec()).map_err(|e| {
                AppError::ExtractionFailure(format!("'{file_name}' is not valid UTF-8: {e}"))
            }),
        }
    }
}
