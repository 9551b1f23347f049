//! JSON body extractor for Axum
//!
//! `JsonBody<T>` works like `axum::Json<T>`, but answers rejections with the
//! plain-text bodies clients of this API expect: 415 when the request is not
//! declared as JSON, 400 when the body does not deserialize into `T`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::debug;

pub const UNSUPPORTED_MEDIA_TYPE_MESSAGE: &str = "Content-Type must be application/json";

pub struct JsonBody<T>(pub T);

/// Error type for `JsonBody` extraction failures.
#[derive(Debug)]
pub enum JsonBodyRejection {
    /// `Content-Type` missing or not JSON.
    UnsupportedMediaType,
    /// Body is not valid JSON for the target type.
    Malformed(String),
}

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        match self {
            Self::UnsupportedMediaType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                UNSUPPORTED_MEDIA_TYPE_MESSAGE,
            )
                .into_response(),
            Self::Malformed(reason) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid JSON input: {}", reason),
            )
                .into_response(),
        }
    }
}

impl From<JsonRejection> for JsonBodyRejection {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => Self::UnsupportedMediaType,
            other => Self::Malformed(other.body_text()),
        }
    }
}

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            debug!(%rejection, "Rejected JSON body");
            JsonBodyRejection::from(rejection)
        })?;

        Ok(JsonBody(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct TestBody {
        #[allow(dead_code)]
        name: String,
    }

    async fn handler(JsonBody(_body): JsonBody<TestBody>) -> &'static str {
        "ok"
    }

    fn app() -> Router {
        Router::new().route("/test", post(handler))
    }

    async fn send(req: Request<Body>) -> (StatusCode, String) {
        use tower::Service;
        let mut svc = app().into_service();
        let resp = svc.call(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn request(content_type: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn valid_body_returns_ok() {
        let (status, _) = send(request("application/json", r#"{"name":"Alice"}"#)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn charset_parameter_is_accepted() {
        let (status, _) = send(request(
            "application/json; charset=utf-8",
            r#"{"name":"Alice"}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn non_json_content_type_returns_415() {
        let (status, body) = send(request("text/plain", r#"{"name":"Alice"}"#)).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body, UNSUPPORTED_MEDIA_TYPE_MESSAGE);
    }

    #[tokio::test]
    async fn missing_content_type_returns_415() {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .body(Body::from("{}"))
            .unwrap();
        let (status, _) = send(req).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn invalid_json_returns_400() {
        let (status, body) = send(request("application/json", "not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.starts_with("Invalid JSON input: "), "{body}");
    }

    #[tokio::test]
    async fn wrong_field_type_returns_400() {
        let (status, _) = send(request("application/json", r#"{"name":42}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
