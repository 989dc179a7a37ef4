//! Axum Router Configuration
//!
//! This module defines the complete HTTP routing for the application. Routes
//! are mounted from the endpoint descriptors, each binding mapped to the
//! handler that decodes it. OpenAPI documentation is merged on top.

use crate::{
    handlers,
    models::{ErrorResponse, Props},
    state::AppState,
};

use axum::{
    Router,
    routing::{MethodFilter, MethodRouter, on},
};
use params_core::{EndpointDescriptor, HttpMethod, ParameterBinding, endpoints};
use std::sync::Arc;
use tracing::{debug, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::get_endpoint_object,
        handlers::get_endpoint_map,
        handlers::get_endpoint_multi_map,
    ),
    components(
        schemas(Props, ErrorResponse)
    ),
    tags(
        (name = "Endpoint Params API", description = "Query parameter binding as object, single-value map and multi-value map")
    )
)]
pub struct ApiDoc;

fn method_filter(method: HttpMethod) -> MethodFilter {
    match method {
        HttpMethod::Get => MethodFilter::GET,
        HttpMethod::Post => MethodFilter::POST,
        HttpMethod::Put => MethodFilter::PUT,
        HttpMethod::Patch => MethodFilter::PATCH,
        HttpMethod::Delete => MethodFilter::DELETE,
    }
}

/// Picks the handler decoding the endpoint's binding. Named bindings have no
/// whole-query handler and are not routable here.
fn endpoint_route(endpoint: &EndpointDescriptor) -> Option<MethodRouter<Arc<AppState>>> {
    let filter = method_filter(endpoint.method);
    match endpoint.binding() {
        ParameterBinding::Object => Some(on(filter, handlers::get_endpoint_object)),
        ParameterBinding::SingleValueMap => Some(on(filter, handlers::get_endpoint_map)),
        ParameterBinding::MultiValueMap => Some(on(filter, handlers::get_endpoint_multi_map)),
        ParameterBinding::Named(_) => None,
    }
}

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let mut api_router = Router::new();
    for endpoint in endpoints() {
        match endpoint_route(&endpoint) {
            Some(route) => {
                debug!(
                    path = endpoint.path,
                    method = %endpoint.method,
                    binding = %endpoint.binding(),
                    "Mounting endpoint"
                );
                api_router = api_router.route(endpoint.path, route);
            }
            None => warn!(
                path = endpoint.path,
                binding = %endpoint.binding(),
                "No handler for endpoint binding, skipping"
            ),
        }
    }
    let swagger_ui = app_state.config.swagger_ui;
    let api_router = api_router.with_state(app_state);

    if swagger_ui {
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .merge(api_router)
    } else {
        api_router
    }
}
