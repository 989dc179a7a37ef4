//! Query binding domain types.
//!
//! Parameter maps, query parameter classification and the endpoint
//! descriptors of the routing contract. Nothing here depends on an HTTP
//! framework; the `params-api` service wires these into axum.

pub mod endpoint;
pub mod parameter;
pub mod params;

pub use endpoint::{EndpointDescriptor, HttpMethod, endpoints};
pub use parameter::{DataType, ParameterBinding, QueryParameter};
pub use params::{MultiValueMap, SingleValueMap};
