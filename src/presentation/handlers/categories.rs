use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::Category;

#[derive(Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<&'static str>,
}

pub async fn categories_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(CategoriesResponse {
            categories: Category::ALL.iter().map(|c| c.as_str()).collect(),
        }),
    )
}
