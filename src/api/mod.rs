//! API handlers for the book catalog REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
pub mod users;

use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{de::DeserializeOwned, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{error::AppError, AppState};

/// Success envelope: `{ "success": true, "message"?: ..., "data"?: ... }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// [`axum::Json`] that rejects with an [`AppError`], keeping the failure envelope.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                tracing::warn!(rejection = ?rejection, "Rejected request body");
                Err(body_error(rejection))
            }
        }
    }
}

/// Like [`ApiJson`], but an empty body (with or without a content type)
/// extracts as `T::default()`.
pub struct ApiJsonOrDefault<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJsonOrDefault<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_json_content_type);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ApiJsonOrDefault(T::default()));
        }

        if !is_json {
            return Err(AppError::BadRequest(
                "Expected request with `Content-Type: application/json`".to_string(),
            ));
        }

        match Json::<T>::from_bytes(&bytes) {
            Ok(Json(value)) => Ok(ApiJsonOrDefault(value)),
            Err(rejection) => {
                tracing::warn!(rejection = ?rejection, "Rejected request body");
                Err(body_error(rejection))
            }
        }
    }
}

fn body_error(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

fn is_json_content_type(value: &str) -> bool {
    let mime = value.split(';').next().unwrap_or_default().trim();

    mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .merge(books::router())
        .merge(users::router())
        .fallback(not_found)
        .layer(middleware::from_fn(method_not_allowed))
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

/// Replace axum's empty 405 responses with the failure envelope
async fn method_not_allowed(req: Request, next: Next) -> Response {
    let response = next.run(req).await;

    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        return AppError::MethodNotAllowed.into_response();
    }

    response
}
