//! HTTP API for the school registry

use crate::common::tracing_middleware::request_tracing_middleware;
use crate::common::{timestamp_now, Config, Error};
use crate::registry::SchoolRegistry;
use crate::school::{RawSchoolPayload, INVALID_QUERY_MESSAGE};
use axum::{
    async_trait,
    body::Bytes,
    extract::{
        rejection::QueryRejection, DefaultBodyLimit, FromRequest, Multipart, Query, Request, State,
    },
    http::{header::CONTENT_TYPE, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::any::Any;
use std::collections::HashMap;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
};

/// Shared state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: SchoolRegistry,
}

/// Creates the HTTP router with all public endpoints.
pub fn create_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/addSchool", post(add_school))
        .route("/api/listSchools", get(list_schools))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(middleware::from_fn(request_tracing_middleware))
                .layer(CorsLayer::permissive())
                .map_response(IntoResponse::into_response)
                .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
                .layer(DefaultBodyLimit::disable())
                .layer(TimeoutLayer::new(config.request_timeout())),
        )
}

async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to School Management API" }))
}

/// Liveness plus a cheap storage round-trip
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let storage = state.registry.storage();
    match storage.count() {
        Ok(schools) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "storage": storage.kind().to_string(),
                "schools": schools,
                "version": env!("CARGO_PKG_VERSION"),
                "timestamp": timestamp_now(),
            })),
        ),
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "storage": storage.kind().to_string(),
                    "version": env!("CARGO_PKG_VERSION"),
                    "timestamp": timestamp_now(),
                })),
            )
        }
    }
}

/// Create body: JSON, URL-encoded form or multipart form, picked by content type.
pub struct CreateSchoolBody(pub RawSchoolPayload);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    UrlEncoded,
    Multipart,
    Unsupported,
}

fn body_kind(content_type: Option<&str>) -> BodyKind {
    let Some(ct) = content_type else {
        return BodyKind::Unsupported;
    };
    let essence = ct
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.as_str() {
        "application/x-www-form-urlencoded" => BodyKind::UrlEncoded,
        "multipart/form-data" => BodyKind::Multipart,
        "application/json" => BodyKind::Json,
        other if other.starts_with("application/") && other.ends_with("+json") => BodyKind::Json,
        _ => BodyKind::Unsupported,
    }
}

#[async_trait]
impl<S> FromRequest<S> for CreateSchoolBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = body_kind(req.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()));

        match kind {
            BodyKind::UrlEncoded => {
                let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                    .await
                    .map_err(|rejection| body_rejection(rejection.status(), Error::MalformedBody))?;
                Ok(Self(RawSchoolPayload::from_form(fields)))
            }
            BodyKind::Multipart => {
                let multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|rejection| body_rejection(rejection.status(), Error::MalformedBody))?;
                let fields = multipart_text_fields(multipart).await?;
                Ok(Self(RawSchoolPayload::from_form(fields)))
            }
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|rejection| body_rejection(rejection.status(), Error::MissingBody))?;
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Err(Error::MissingBody.into_response());
                }
                match Json::<RawSchoolPayload>::from_bytes(&bytes) {
                    Ok(Json(payload)) => Ok(Self(payload)),
                    Err(_) => Err(Error::MalformedBody.into_response()),
                }
            }
            BodyKind::Unsupported => Err(Error::MissingBody.into_response()),
        }
    }
}

/// Text parts of a multipart body, keyed by field name. File parts are refused.
async fn multipart_text_fields(
    mut multipart: Multipart,
) -> Result<HashMap<String, String>, Response> {
    let mut fields = HashMap::new();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(body_rejection(e.status(), Error::MalformedBody)),
        };
        if field.file_name().is_some() {
            return Err(Error::MalformedBody.into_response());
        }
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| body_rejection(e.status(), Error::MalformedBody))?;
        fields.insert(name, value);
    }
    Ok(fields)
}

fn body_rejection(status: StatusCode, fallback: Error) -> Response {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        return (
            status,
            Json(json!({ "success": false, "message": "Request body too large" })),
        )
            .into_response();
    }
    fallback.into_response()
}

async fn add_school(
    State(state): State<AppState>,
    CreateSchoolBody(payload): CreateSchoolBody,
) -> Result<impl IntoResponse, Error> {
    let school = state.registry.create(payload)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "School added successfully",
            "data": school,
        })),
    ))
}

#[derive(Debug, Deserialize)]
struct ListSchoolsQuery {
    latitude: Option<String>,
    longitude: Option<String>,
}

async fn list_schools(
    State(state): State<AppState>,
    query: Result<Query<ListSchoolsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(query) = query.map_err(|_| Error::InvalidQuery(INVALID_QUERY_MESSAGE.to_string()))?;
    let ranked = state
        .registry
        .list_by_distance_raw(query.latitude.as_deref(), query.longitude.as_deref())?;

    Ok(Json(json!({
        "success": true,
        "message": "Schools retrieved successfully",
        "data": ranked,
    })))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    Error::Internal(format!("handler panicked: {}", detail)).into_response()
}
