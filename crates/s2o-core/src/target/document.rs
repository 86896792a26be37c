use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::operation::PathItem;

/// The OpenAPI version string written to every converted document.
pub const OPENAPI_VERSION: &str = "3.0.3";

/// Top-level OpenAPI 3.0.3 document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    pub openapi: String,

    pub info: serde_json::Value,

    pub paths: IndexMap<String, PathItem>,

    pub components: Components,
}

/// Reusable definitions. Only `schemas` is ever populated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Components {
    pub schemas: IndexMap<String, serde_json::Value>,
}

impl OpenApiDocument {
    /// Number of operations across all paths.
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(IndexMap::len).sum()
    }
}
