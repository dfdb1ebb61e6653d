use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::{AnalysisError, ErrorKind};
use crate::domain::{InputSource, UploadedFile, select_input};
use crate::infrastructure::observability::RequestId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Form field carrying inline text alongside (or instead of) a file.
const TEXT_FIELD: &str = "text";

#[tracing::instrument(skip(state, request), fields(request_id = tracing::field::Empty))]
pub async fn analyze_handler<F, L>(
    State(state): State<AppState<F, L>>,
    request: Request,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    if let Some(RequestId(id)) = request.extensions().get::<RequestId>() {
        tracing::Span::current().record("request_id", id.as_str());
    }

    let input = if is_multipart(&request) {
        let multipart = match Multipart::from_request(request, &state).await {
            Ok(m) => m,
            Err(rejection) => {
                return rejection_response(rejection.status(), rejection.body_text());
            }
        };
        match read_multipart(multipart).await {
            Ok(input) => input,
            Err((status, message)) => return rejection_response(status, message),
        }
    } else {
        let body = match Bytes::from_request(request, &state).await {
            Ok(b) => b,
            Err(rejection) => {
                return rejection_response(rejection.status(), rejection.body_text());
            }
        };
        read_body(body)
    };

    match state.analysis_service.analyze(input).await {
        Ok(prediction) => (StatusCode::OK, Json(prediction)).into_response(),
        Err(e) => analysis_error_response(&e),
    }
}

fn is_multipart(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.to_ascii_lowercase().starts_with("multipart/form-data"))
}

async fn read_multipart(mut multipart: Multipart) -> Result<InputSource, (StatusCode, String)> {
    let mut file: Option<UploadedFile> = None;
    let mut text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (e.status(), format!("Failed to read multipart: {}", e.body_text())))?
    {
        if let Some(filename) = field.file_name().map(str::to_string) {
            if file.is_some() {
                continue;
            }
            let data = field
                .bytes()
                .await
                .map_err(|e| (e.status(), format!("Failed to read file: {}", e.body_text())))?;
            tracing::debug!(filename = %filename, bytes = data.len(), "File received");
            file = Some(UploadedFile {
                filename,
                data: data.to_vec(),
            });
        } else if field.name() == Some(TEXT_FIELD) && text.is_none() {
            text = Some(
                field
                    .text()
                    .await
                    .map_err(|e| {
                        (e.status(), format!("Failed to read text field: {}", e.body_text()))
                    })?,
            );
        }
    }

    Ok(select_input(file, text, Vec::new()))
}

fn read_body(body: Bytes) -> InputSource {
    let json_text = serde_json::from_slice::<Value>(&body)
        .ok()
        .and_then(|v| v.get(TEXT_FIELD).and_then(Value::as_str).map(String::from));

    select_input(None, json_text, body.to_vec())
}

fn analysis_error_response(error: &AnalysisError) -> Response {
    let status = match error.kind() {
        ErrorKind::UnsupportedFormat | ErrorKind::EmptyInput => {
            tracing::warn!(error = %error, "Rejected analysis request");
            StatusCode::BAD_REQUEST
        }
        ErrorKind::RemoteDecodeError | ErrorKind::GenericFailure => {
            tracing::error!(error = %error, kind = ?error.kind(), "Analysis failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    error_response(status, error.to_string())
}

/// Body extraction failures keep axum's status (400, 413, ...) but use the
/// JSON error shape.
fn rejection_response(status: StatusCode, message: String) -> Response {
    tracing::warn!(status = status.as_u16(), error = %message, "Rejected request body");
    error_response(status, message)
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}
