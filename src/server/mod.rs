//! Document-extraction service.
//!
//! A small HTTP service, deployable separately from the CLI, that turns an
//! uploaded resume file into plain text. One endpoint accepts a multipart
//! upload and dispatches on the declared MIME type to a PDF or DOCX text
//! extractor.
//!
//! ## Endpoints
//!
//! - `POST /extract`: multipart form with one `file` part; returns
//!   `{"text": ...}` on success
//! - `GET /health`: liveness probe

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, multipart::MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use std::io::{Cursor, Read};
use std::net::SocketAddr;
use thiserror::Error;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const DOC_MIME: &str = "application/msword";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("No file provided")]
    MissingFile,

    #[error("Invalid content type. Expected multipart/form-data")]
    InvalidRequest,

    #[error("Unsupported file type. Please upload a PDF or DOCX file.")]
    UnsupportedType,

    #[error("Failed to parse file: {0}")]
    Failed(String),
}

impl IntoResponse for ExtractError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ExtractError::MissingFile
            | ExtractError::InvalidRequest
            | ExtractError::UnsupportedType => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.to_string() }),
            ),
            ExtractError::Failed(details) => {
                tracing::error!(error = %details, "Extraction failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to parse file", "details": details }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Serialize)]
struct ExtractResponse {
    text: String,
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn extract(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractResponse>, ExtractError> {
    let mut multipart = multipart.map_err(|_| ExtractError::InvalidRequest)?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ExtractError::InvalidRequest)?
    {
        if field.name() != Some("file") {
            continue;
        }

        let mime = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ExtractError::Failed(e.to_string()))?;

        tracing::info!(mime = %mime, bytes = data.len(), "Extracting uploaded document");

        let text = match mime.as_str() {
            PDF_MIME => extract_pdf_text(&data)?,
            DOCX_MIME | DOC_MIME => extract_docx_text(&data)?,
            _ => return Err(ExtractError::UnsupportedType),
        };

        return Ok(Json(ExtractResponse { text }));
    }

    Err(ExtractError::MissingFile)
}

fn extract_pdf_text(data: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractError::Failed(e.to_string()))
}

/// Pull the text runs out of OOXML: unzip `word/document.xml` and collect
/// every text node, one line per paragraph.
fn extract_docx_text(data: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))
        .map_err(|e| ExtractError::Failed(format!("Not a DOCX archive: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Failed(format!("Missing document part: {}", e)))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Failed(e.to_string()))?;

    let mut reader = quick_xml::Reader::from_str(&xml);
    let mut text = String::new();
    loop {
        match reader.read_event() {
            Ok(quick_xml::events::Event::Text(t)) => {
                let chunk = t
                    .unescape()
                    .map_err(|e| ExtractError::Failed(e.to_string()))?;
                text.push_str(&chunk);
            }
            Ok(quick_xml::events::Event::End(e)) if e.name().as_ref() == b"w:p" => {
                text.push('\n');
            }
            Ok(quick_xml::events::Event::Eof) => break,
            Ok(_) => continue,
            Err(e) => return Err(ExtractError::Failed(e.to_string())),
        }
    }
    Ok(text)
}

pub fn router() -> Router {
    Router::new()
        .route("/extract", post(extract))
        .route("/health", get(health))
        // Uploaded resumes can be well past axum's 2 MB default
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
}

/// Bind and serve until the process is stopped.
pub async fn run(port: u16) -> anyhow::Result<()> {
    let app = router().layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Extraction service listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
