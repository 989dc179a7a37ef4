//! Axum Handlers for the REST API
//!
//! One handler per endpoint. Each decodes the query string with its binding,
//! delegates to the `EndpointService` and answers with an empty `200`.
//! It uses `utoipa` doc comments to generate OpenAPI documentation.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use params_core::{MultiValueMap, SingleValueMap};
use std::sync::Arc;
use tracing::{debug, error};

use crate::{
    models::{ErrorResponse, Props},
    state::AppState,
};

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalServerError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { message })).into_response()
            }
            ApiError::InternalServerError(err) => {
                error!("Internal Server Error: {:?}", err);
                let message = "An internal server error occurred.".to_string();
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { message }),
                )
                    .into_response()
            }
        }
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::InternalServerError(err.into())
    }
}

fn bound<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    match query {
        Ok(Query(value)) => Ok(value),
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "query string rejected");
            Err(ApiError::BadRequest(rejection.body_text()))
        }
    }
}

/// Bind the query string onto the fields of `Props`.
#[utoipa::path(
    get,
    path = "/endpoint-object",
    operation_id = "getEndpointObject",
    params(Props),
    responses(
        (status = 200, description = "Query bound successfully"),
        (status = 400, description = "Query string could not be decoded", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_endpoint_object(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Props>, QueryRejection>,
) -> Result<StatusCode, ApiError> {
    let props = bound(query)?;
    state.service.get_endpoint_object(props).await?;
    Ok(StatusCode::OK)
}

/// Bind all query parameters one value per key. A repeated key keeps its last value.
#[utoipa::path(
    get,
    path = "/endpoint-map",
    operation_id = "getEndpointMap",
    params(
        ("props" = std::collections::HashMap<String, String>, Query, description = "All query parameters, one value per name")
    ),
    responses(
        (status = 200, description = "Query bound successfully"),
        (status = 400, description = "Query string could not be decoded", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_endpoint_map(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SingleValueMap>, QueryRejection>,
) -> Result<StatusCode, ApiError> {
    let props = bound(query)?;
    state.service.get_endpoint_map(props).await?;
    Ok(StatusCode::OK)
}

/// Bind all query parameters as ordered lists per key, keeping repetitions.
#[utoipa::path(
    get,
    path = "/endpoint-multi-map",
    operation_id = "getEndpointMultiMap",
    params(
        ("props" = std::collections::HashMap<String, Vec<String>>, Query, description = "All query parameters, every value per name in request order")
    ),
    responses(
        (status = 200, description = "Query bound successfully"),
        (status = 400, description = "Query string could not be decoded", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_endpoint_multi_map(
    State(state): State<Arc<AppState>>,
    query: Result<Query<MultiValueMap>, QueryRejection>,
) -> Result<StatusCode, ApiError> {
    let props = bound(query)?;
    state.service.get_endpoint_multi_map(props).await?;
    Ok(StatusCode::OK)
}
