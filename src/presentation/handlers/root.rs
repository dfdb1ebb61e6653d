use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct ServiceInfoResponse {
    pub message: String,
    pub routes: Vec<String>,
}

pub async fn root_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ServiceInfoResponse {
            message: "DropOut Catcher API is running ✅".to_string(),
            routes: vec!["GET /".to_string(), "POST /".to_string()],
        }),
    )
}
