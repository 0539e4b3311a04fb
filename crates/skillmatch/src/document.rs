//! Resume document handling: format detection, plain-text extraction, and
//! the fetch boundary.
//!
//! Extraction fails softly. A resume whose bytes cannot be parsed still
//! flows through the pipeline as empty text and produces a valid (low) ATS
//! score and an empty skill set instead of aborting.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::warn;

use crate::errors::EngineError;
use crate::text;

/// Declared format of a resume document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Html,
    Text,
}

impl DocumentFormat {
    /// Resolves the format from the declared MIME type and the file name,
    /// in that order. Anything unrecognized is treated as plain text.
    pub fn detect(mime_type: Option<&str>, file_name: Option<&str>) -> Self {
        let mime = mime_type.map(str::to_lowercase).unwrap_or_default();
        let name = file_name.map(str::to_lowercase).unwrap_or_default();

        if mime.contains("pdf") || name.ends_with(".pdf") {
            DocumentFormat::Pdf
        } else if mime.contains("html") || name.ends_with(".html") {
            DocumentFormat::Html
        } else {
            DocumentFormat::Text
        }
    }
}

/// Extracts plain text from a document payload. Never fails: malformed
/// documents degrade to empty text.
pub fn extract_text(payload: &[u8], format: DocumentFormat) -> String {
    match format {
        DocumentFormat::Pdf => extract_pdf_text(payload),
        DocumentFormat::Html => text::strip_tags(&String::from_utf8_lossy(payload)),
        DocumentFormat::Text => String::from_utf8_lossy(payload).into_owned(),
    }
}

fn extract_pdf_text(payload: &[u8]) -> String {
    // pdf-extract panics on some malformed files; contain those along with
    // ordinary parse errors.
    let outcome = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(payload));
    match outcome {
        Ok(Ok(extracted)) => extracted,
        Ok(Err(err)) => {
            warn!("PDF text extraction failed: {err}");
            String::new()
        }
        Err(_) => {
            warn!("PDF text extraction panicked on malformed input");
            String::new()
        }
    }
}

/// A fetched resume document plus the hints needed for format detection.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub payload: Bytes,
    pub content_type: Option<String>,
    /// Location with any query string stripped, for extension sniffing.
    pub file_name: Option<String>,
}

impl FetchedDocument {
    pub fn format(&self) -> DocumentFormat {
        DocumentFormat::detect(self.content_type.as_deref(), self.file_name.as_deref())
    }

    pub fn extract_text(&self) -> String {
        extract_text(&self.payload, self.format())
    }
}

/// Where resume documents come from. The application layer owns upload and
/// storage; the engine only needs bytes plus format hints. This is the one
/// suspension point in the pipeline, so the caller's timeout lives behind
/// this trait.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<FetchedDocument, EngineError>;
}

/// Fetches documents over HTTP(S) with a request timeout.
pub struct HttpDocumentSource {
    client: reqwest::Client,
}

impl HttpDocumentSource {
    pub fn new(timeout: std::time::Duration) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EngineError::Fetch(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    async fn fetch(&self, location: &str) -> Result<FetchedDocument, EngineError> {
        let response = self
            .client
            .get(location)
            .send()
            .await
            .map_err(|e| EngineError::Fetch(format!("request to {location} failed: {e}")))?;

        if !response.status().is_success() {
            return Err(EngineError::Fetch(format!(
                "{location} returned {}",
                response.status()
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_lowercase);

        let file_name = location.split('?').next().map(str::to_lowercase);

        let payload = response
            .bytes()
            .await
            .map_err(|e| EngineError::Fetch(format!("reading body from {location} failed: {e}")))?;

        Ok(FetchedDocument {
            payload,
            content_type,
            file_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_pdf_by_mime() {
        let format = DocumentFormat::detect(Some("application/pdf"), Some("resume.bin"));
        assert_eq!(format, DocumentFormat::Pdf);
    }

    #[test]
    fn test_detect_pdf_by_extension() {
        let format = DocumentFormat::detect(None, Some("cv.pdf"));
        assert_eq!(format, DocumentFormat::Pdf);
    }

    #[test]
    fn test_detect_html_by_mime() {
        let format = DocumentFormat::detect(Some("text/html; charset=utf-8"), None);
        assert_eq!(format, DocumentFormat::Html);
    }

    #[test]
    fn test_detect_defaults_to_text() {
        assert_eq!(DocumentFormat::detect(None, None), DocumentFormat::Text);
        assert_eq!(
            DocumentFormat::detect(Some("text/plain"), Some("resume.txt")),
            DocumentFormat::Text
        );
    }

    #[test]
    fn test_detect_pdf_wins_over_html_extension() {
        let format = DocumentFormat::detect(Some("application/pdf"), Some("export.html"));
        assert_eq!(format, DocumentFormat::Pdf);
    }

    #[test]
    fn test_extract_text_plain_passthrough() {
        let payload = "Jane Doe\nSenior Engineer".as_bytes();
        assert_eq!(
            extract_text(payload, DocumentFormat::Text),
            "Jane Doe\nSenior Engineer"
        );
    }

    #[test]
    fn test_extract_text_html_strips_tags_keeps_case() {
        let payload = b"<html><body><h1>Jane Doe</h1><p>Python,   SQL</p></body></html>";
        assert_eq!(
            extract_text(payload, DocumentFormat::Html),
            "Jane Doe Python, SQL"
        );
    }

    #[test]
    fn test_extract_text_malformed_pdf_yields_empty() {
        assert_eq!(extract_text(b"definitely not a pdf", DocumentFormat::Pdf), "");
    }

    #[test]
    fn test_fetched_document_format_uses_both_hints() {
        let doc = FetchedDocument {
            payload: Bytes::from_static(b"<p>hi</p>"),
            content_type: None,
            file_name: Some("https://cdn.example.com/resumes/u42.html".to_string()),
        };
        assert_eq!(doc.format(), DocumentFormat::Html);
        assert_eq!(doc.extract_text(), "hi");
    }
}
