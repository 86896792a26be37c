use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A response with one media type entry per produced content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub description: String,

    pub content: IndexMap<String, MediaType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    pub schema: SchemaRef,
}

/// A reference into `#/components/schemas`, optionally carrying the
/// source schema's `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaRef {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    #[serde(rename = "$ref")]
    pub ref_path: String,
}
