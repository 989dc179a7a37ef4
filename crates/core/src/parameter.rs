//! Query Parameter Classification
//!
//! Decides how a declared query parameter is bound: as a structured object
//! filled field by field, as a whole-query map, or as a single named value.

use std::fmt;

/// Type name of the single-valued map target.
pub const SINGLE_VALUE_MAP_TARGET: &str = "std::collections::HashMap";

/// Type name of the multi-valued map target.
pub const MULTI_VALUE_MAP_TARGET: &str = "params_core::MultiValueMap";

const MAP_TARGETS: [&str; 2] = [SINGLE_VALUE_MAP_TARGET, MULTI_VALUE_MAP_TARGET];

/// The declared type of a query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    /// A scalar schema such as a string or an integer.
    Simple(String),
    /// An object schema with named properties.
    Object(String),
    /// A schema replaced by a target type. `simple` records whether the
    /// replaced schema was a scalar one.
    Mapped { target: String, simple: bool },
}

impl DataType {
    pub fn simple(name: impl Into<String>) -> Self {
        Self::Simple(name.into())
    }

    pub fn object(name: impl Into<String>) -> Self {
        Self::Object(name.into())
    }

    pub fn mapped(target: impl Into<String>, simple: bool) -> Self {
        Self::Mapped {
            target: target.into(),
            simple,
        }
    }

    /// The type name parameters of this type are bound to.
    pub fn name(&self) -> &str {
        match self {
            DataType::Simple(name) | DataType::Object(name) => name.as_str(),
            DataType::Mapped { target, .. } => target.as_str(),
        }
    }

    fn is_mapped_map(&self) -> bool {
        match self {
            DataType::Mapped { target, .. } => MAP_TARGETS.contains(&target.as_str()),
            _ => false,
        }
    }
}

/// How the query string reaches a handler argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterBinding {
    /// The whole query string is bound onto the fields of a structured value.
    Object,
    /// The whole query string is bound one value per key.
    SingleValueMap,
    /// The whole query string is bound as ordered lists per key.
    MultiValueMap,
    /// Only the query parameter with this name is bound.
    Named(String),
}

impl fmt::Display for ParameterBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterBinding::Object => write!(f, "object"),
            ParameterBinding::SingleValueMap => write!(f, "single-value map"),
            ParameterBinding::MultiValueMap => write!(f, "multi-value map"),
            ParameterBinding::Named(name) => write!(f, "named '{}'", name),
        }
    }
}

/// A query parameter as declared on an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameter {
    pub name: String,
    pub data_type: DataType,
    pub required: bool,
    pub deprecated: bool,
    pub description: Option<String>,
}

impl QueryParameter {
    /// Creates an optional, non-deprecated parameter without description.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            required: false,
            deprecated: false,
            description: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether the parameter is explicitly marked as a request parameter.
    ///
    /// Mapped maps are. Objects are not, their fields are bound implicitly. A
    /// mapped type is only marked when it replaced a scalar schema.
    pub fn with_annotation(&self) -> bool {
        if self.data_type.is_mapped_map() {
            return true;
        }

        match &self.data_type {
            DataType::Object(_) => false,
            DataType::Mapped { simple, .. } => *simple,
            DataType::Simple(_) => true,
        }
    }

    /// Whether the request parameter marker carries the parameter's own
    /// attributes (name, required flag). Maps and objects take the whole
    /// query, so they carry none.
    pub fn with_parameters(&self) -> bool {
        if self.data_type.is_mapped_map() {
            return false;
        }

        !matches!(self.data_type, DataType::Object(_))
    }

    /// The binding strategy this parameter gets.
    pub fn binding(&self) -> ParameterBinding {
        match &self.data_type {
            DataType::Mapped { target, .. } if target == MULTI_VALUE_MAP_TARGET => {
                ParameterBinding::MultiValueMap
            }
            DataType::Mapped { target, .. } if target == SINGLE_VALUE_MAP_TARGET => {
                ParameterBinding::SingleValueMap
            }
            _ if !self.with_annotation() => ParameterBinding::Object,
            _ => ParameterBinding::Named(self.name.clone()),
        }
    }
}
