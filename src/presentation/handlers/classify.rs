use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{TextExtractor, TokenVerifier};
use crate::domain::{Category, Document, DocumentFormat, MAX_DOCUMENT_BYTES};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ClassifyResponse {
    pub category: Category,
    pub confidence: f64,
    pub processing_time: f64,
    pub filename: String,
    pub all_probabilities: BTreeMap<&'static str, f64>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Request gateway for the classification pipeline. Validates the envelope in
/// a fixed order — auth token, file presence, size cap, extension — and only
/// then invokes the orchestrator.
#[tracing::instrument(skip(state, headers, multipart))]
pub async fn classify_handler<E, T>(
    State(state): State<AppState<E, T>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    E: TextExtractor + 'static,
    T: TokenVerifier + 'static,
{
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let Some(token) = token else {
        tracing::warn!("Classification request without auth token");
        return error(StatusCode::UNAUTHORIZED, "Token is missing");
    };

    let token = token.strip_prefix("Bearer ").unwrap_or(token);
    if !state.token_verifier.verify(token).await {
        tracing::warn!("Classification request with rejected auth token");
        return error(StatusCode::UNAUTHORIZED, "Invalid token");
    }

    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Classification request with no file");
            return error(StatusCode::BAD_REQUEST, "No file provided");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return error(
                StatusCode::BAD_REQUEST,
                format!("Failed to read multipart: {}", e),
            );
        }
    };

    let filename = field.file_name().unwrap_or_default().to_string();
    if filename.is_empty() {
        return error(StatusCode::BAD_REQUEST, "No file selected");
    }

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return error(StatusCode::BAD_REQUEST, format!("Failed to read file: {}", e));
        }
    };

    if data.len() > MAX_DOCUMENT_BYTES {
        tracing::warn!(bytes = data.len(), "Oversized upload rejected");
        return error(
            StatusCode::PAYLOAD_TOO_LARGE,
            "File too large. Maximum size: 16MB",
        );
    }

    let Some(format) = DocumentFormat::from_filename(&filename) else {
        tracing::warn!(filename = %filename, "Unsupported file type");
        return error(
            StatusCode::BAD_REQUEST,
            "File type not supported. Allowed: pdf, docx",
        );
    };

    let document = Document::new(filename.clone(), format, data.len() as u64);

    match state.classification_service.classify(&data, &document).await {
        Ok(classification) => {
            let all_probabilities = Category::ALL
                .iter()
                .map(|category| {
                    (category.as_str(), classification.probability_of(*category))
                })
                .collect();

            (
                StatusCode::OK,
                Json(ClassifyResponse {
                    category: classification.category,
                    confidence: classification.confidence,
                    processing_time: classification.elapsed_seconds,
                    filename,
                    all_probabilities,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(stage = %e.stage, cause = %e.cause, "Classification failed");
            error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Classification failed: {}", e),
            )
        }
    }
}
