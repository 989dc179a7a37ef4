//! Endpoint Service Contract
//!
//! The operations behind the three routes. Handlers decode the query string
//! and hand the bound value to an implementation of `EndpointService`.

use anyhow::Result;
use async_trait::async_trait;
use params_core::{MultiValueMap, SingleValueMap};
use tracing::info;

use crate::models::Props;

/// Defines the contract for whatever handles the decoded query parameters.
///
/// Implementations only see bound values; decoding and routing happen in the
/// HTTP layer. Returning an error turns into a `500` response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EndpointService: Send + Sync {
    /// Handles `/endpoint-object` with the query bound onto `Props`.
    async fn get_endpoint_object(&self, props: Props) -> Result<()>;

    /// Handles `/endpoint-map` with the query bound one value per key.
    async fn get_endpoint_map(&self, props: SingleValueMap) -> Result<()>;

    /// Handles `/endpoint-multi-map` with the query bound as lists per key.
    async fn get_endpoint_multi_map(&self, props: MultiValueMap) -> Result<()>;
}

/// An `EndpointService` that logs what it received and succeeds.
pub struct LoggingEndpointService;

#[async_trait]
impl EndpointService for LoggingEndpointService {
    async fn get_endpoint_object(&self, props: Props) -> Result<()> {
        info!(prop1 = ?props.prop1, prop2 = ?props.prop2, "endpoint-object called");
        Ok(())
    }

    async fn get_endpoint_map(&self, props: SingleValueMap) -> Result<()> {
        info!(params = props.len(), ?props, "endpoint-map called");
        Ok(())
    }

    async fn get_endpoint_multi_map(&self, props: MultiValueMap) -> Result<()> {
        info!(params = props.len(), ?props, "endpoint-multi-map called");
        Ok(())
    }
}
