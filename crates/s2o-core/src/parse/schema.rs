use serde::{Deserialize, Serialize};

/// A schema that points at a named definition, either directly
/// (`{ $ref }`) or as the element type of an array (`{ items: { $ref } }`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchemaRef {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<ItemsRef>,
}

/// The `items` object of an array schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemsRef {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,
}

impl SchemaRef {
    /// The direct `$ref`, falling back to `items.$ref`.
    pub fn reference(&self) -> Option<&str> {
        self.ref_path
            .as_deref()
            .or_else(|| self.items.as_ref()?.ref_path.as_deref())
    }
}
