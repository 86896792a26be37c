use serde::{Deserialize, Serialize};

use super::schema::SchemaRef;

/// A Swagger 2.0 response definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaRef>,
}
