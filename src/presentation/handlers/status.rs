use std::time::{SystemTime, UNIX_EPOCH};

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::{Category, DocumentFormat};

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub timestamp: f64,
    pub model_loaded: bool,
    pub supported_formats: Vec<&'static str>,
    pub categories: Vec<&'static str>,
}

/// Health endpoint. The process refuses to start without valid model
/// artifacts, so a responding server always reports the model as loaded.
pub async fn status_handler() -> impl IntoResponse {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);

    (
        StatusCode::OK,
        Json(StatusResponse {
            status: "healthy",
            timestamp,
            model_loaded: true,
            supported_formats: vec![
                DocumentFormat::Pdf.as_str(),
                DocumentFormat::Docx.as_str(),
            ],
            categories: Category::ALL.iter().map(|c| c.as_str()).collect(),
        }),
    )
}
