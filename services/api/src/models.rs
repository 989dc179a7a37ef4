//! API Models
//!
//! Query-bound values and response bodies, with `utoipa` schemas for the
//! OpenAPI document.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Structured value bound from the query string of `/endpoint-object`.
///
/// Each field is filled from the query parameter of the same name. Parameters
/// that do not name a field are ignored.
#[derive(Deserialize, Serialize, ToSchema, IntoParams, Debug, Clone, Default, PartialEq, Eq)]
#[into_params(parameter_in = Query)]
pub struct Props {
    #[param(example = "alpha")]
    pub prop1: Option<String>,
    #[param(example = "beta")]
    pub prop2: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorResponse {
    pub message: String,
}
