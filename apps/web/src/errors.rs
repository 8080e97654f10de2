use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Web-layer error type.
/// Implements `IntoResponse` so handlers can return `Result<T, AppError>`.
///
/// Match failures never surface here; the session turns them into the
/// user-facing message instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                ("TEMPLATE_ERROR", "The page could not be rendered")
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                ("INTERNAL_ERROR", "An internal server error occurred")
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;
    use serde_json::Value;

    use super::*;

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response =
            AppError::Internal(anyhow::anyhow!("secret connection string")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
        assert!(!json.to_string().contains("secret"));
    }
}
