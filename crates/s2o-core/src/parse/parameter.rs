use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::schema::SchemaRef;

/// A Swagger 2.0 parameter, discriminated by its `in` field.
///
/// Non-body parameters share one shape; a body parameter carries a schema
/// and becomes a `requestBody` in the target document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "in", rename_all = "lowercase")]
pub enum Parameter {
    Query(SimpleParameter),
    Header(SimpleParameter),
    Path(SimpleParameter),
    Body(BodyParameter),
}

impl Parameter {
    pub fn name(&self) -> &str {
        match self {
            Parameter::Query(p) | Parameter::Header(p) | Parameter::Path(p) => &p.name,
            Parameter::Body(p) => &p.name,
        }
    }

    pub fn is_body(&self) -> bool {
        matches!(self, Parameter::Body(_))
    }
}

/// A `query`, `header` or `path` parameter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimpleParameter {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,

    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,

    /// Any other keys (`format`, `enum`, `x-*`, ...), kept in document order.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

/// An `in: body` parameter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BodyParameter {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaRef>,
}
