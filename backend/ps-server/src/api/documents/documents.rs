//! Policy document upload handler

use crate::api::documents::document_response::DocumentResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::session::CurrentSession;
use crate::session::HeldDocument;
use crate::state::AppState;

use axum::{Json, extract::Multipart, extract::State};
use log::{debug, info};

/// POST /api/v1/documents
///
/// Accepts one PDF in a multipart `file` field, forwards it to the
/// analysis service, and holds the returned reference in the session.
/// Re-submitting the file currently held (same name) reuses the existing
/// reference without another upload.
pub async fn upload_document(
    State(state): State<AppState>,
    session: CurrentSession,
    mut multipart: Multipart,
) -> ApiResult<Json<DocumentResponse>> {
    let (file_name, bytes) = read_file_field(&mut multipart).await?;

    if !file_name.to_lowercase().ends_with(".pdf") {
        return Err(ApiError::validation(
            "Only PDF policy documents are accepted",
            Some("file"),
        ));
    }

    // Size gate runs before any outbound call
    if bytes.len() > state.max_upload_bytes {
        return Err(ApiError::validation(
            format!(
                "File exceeds the {} MB limit",
                state.max_upload_bytes / (1024 * 1024)
            ),
            Some("file"),
        ));
    }

    if let Some(held) = &session.context.document
        && held.file_name == file_name
    {
        debug!("Reusing held document reference {}", held.document_ref);
        return Ok(Json(DocumentResponse::from(held)));
    }

    let size_bytes = bytes.len();
    let document_ref = state.gateway.upload_document(&file_name, bytes).await?;

    let document = HeldDocument {
        document_ref,
        file_name,
        size_bytes,
    };
    let response = DocumentResponse::from(&document);

    let updated = state
        .sessions
        .update(session.token, |context| {
            context.document = Some(document);
        })
        .await;
    if !updated {
        return Err(ApiError::unauthorized("Session expired or logged out"));
    }

    info!(
        "Document held for user {}: {} ({} bytes)",
        session.context.user_id, response.file_name, response.size_bytes
    );

    Ok(Json(response))
}

/// Pulls the `file` field out of the multipart body.
async fn read_file_field(multipart: &mut Multipart) -> ApiResult<(String, Vec<u8>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::validation(format!("Malformed upload: {e}"), Some("file")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("policy.pdf").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::validation(format!("Upload could not be read: {e}"), Some("file")))?;

        return Ok((file_name, bytes.to_vec()));
    }

    Err(ApiError::validation("Missing file field", Some("file")))
}
