//! Endpoint Descriptors
//!
//! The routing contract: which paths exist, which method they answer and how
//! their query string is bound.

use crate::parameter::{
    DataType, MULTI_VALUE_MAP_TARGET, ParameterBinding, QueryParameter, SINGLE_VALUE_MAP_TARGET,
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// A single route of the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub path: &'static str,
    pub method: HttpMethod,
    pub operation_id: &'static str,
    pub parameter: QueryParameter,
}

impl EndpointDescriptor {
    /// Creates a `GET` endpoint taking `parameter` from the query string.
    pub fn new(path: &'static str, operation_id: &'static str, parameter: QueryParameter) -> Self {
        Self {
            path,
            method: HttpMethod::Get,
            operation_id,
            parameter,
        }
    }

    pub fn binding(&self) -> ParameterBinding {
        self.parameter.binding()
    }
}

pub const ENDPOINT_OBJECT_PATH: &str = "/endpoint-object";
pub const ENDPOINT_MAP_PATH: &str = "/endpoint-map";
pub const ENDPOINT_MULTI_MAP_PATH: &str = "/endpoint-multi-map";

/// All endpoints of the contract, in declaration order.
pub fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            ENDPOINT_OBJECT_PATH,
            "getEndpointObject",
            QueryParameter::new("props", DataType::object("Props")),
        ),
        EndpointDescriptor::new(
            ENDPOINT_MAP_PATH,
            "getEndpointMap",
            QueryParameter::new("props", DataType::mapped(SINGLE_VALUE_MAP_TARGET, false)),
        ),
        EndpointDescriptor::new(
            ENDPOINT_MULTI_MAP_PATH,
            "getEndpointMultiMap",
            QueryParameter::new("props", DataType::mapped(MULTI_VALUE_MAP_TARGET, false)),
        ),
    ]
}

/// Looks up an endpoint by its exact path.
pub fn find(path: &str) -> Option<EndpointDescriptor> {
    endpoints().into_iter().find(|endpoint| endpoint.path == path)
}
