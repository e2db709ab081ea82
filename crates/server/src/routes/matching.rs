use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::body::Bytes;
use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use docmatch::MatchResult;
use std::sync::Arc;

/// Multipart field carrying the upload.
pub const FILE_FIELD: &str = "file";

/// Match an uploaded document against the configured template.
///
/// Expects a `multipart/form-data` body with the document in the `file`
/// field. The extension of the uploaded filename decides between the text
/// and the image path.
///
/// # Response
///
/// ```json
/// {
///   "score": 97.92,
///   "kind": "text",
///   "features": { "name": null, "date": "2024-01-02", "location": "Berlin" }
/// }
/// ```
pub async fn match_document(
    State(state): State<Arc<ServerState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ServerResult<Json<MatchResult>> {
    let mut multipart =
        multipart.map_err(|err| ServerError::BadRequest(err.body_text()))?;
    let upload = read_upload(&mut multipart, state.config.max_body_size_mb).await?;

    tracing::debug!(
        filename = %upload.filename,
        bytes = upload.bytes.len(),
        "received upload"
    );

    let orchestrator = state.orchestrator.clone();
    let decoder = state.decoder.clone();
    let result = tokio::task::spawn_blocking(move || {
        orchestrator.run_bytes(&upload.filename, &upload.bytes, decoder.as_ref())
    })
    .await
    .map_err(|err| ServerError::Internal(format!("match task failed: {err}")))??;

    Ok(Json(result))
}

struct Upload {
    filename: String,
    bytes: Bytes,
}

async fn read_upload(multipart: &mut Multipart, max_body_size_mb: usize) -> ServerResult<Upload> {
    let malformed = |err: MultipartError| {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::PayloadTooLarge(max_body_size_mb)
        } else {
            ServerError::BadRequest(err.body_text())
        }
    };

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(ServerError::BadRequest("No selected file".to_string()));
        }
        let bytes = field.bytes().await.map_err(malformed)?;
        return Ok(Upload { filename, bytes });
    }

    Err(ServerError::BadRequest("No file part".to_string()))
}
