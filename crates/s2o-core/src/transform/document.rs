use crate::error::ConvertError;
use crate::parse::spec::SwaggerSpec;
use crate::target::{Components, OPENAPI_VERSION, OpenApiDocument};

use super::definitions::map_definitions;
use super::paths::map_paths;

/// Convert a Swagger 2.0 document into an OpenAPI 3.0.3 document.
///
/// Any mapping error aborts the whole conversion; there is no partial output.
pub fn assemble(source: &SwaggerSpec) -> Result<OpenApiDocument, ConvertError> {
    let info = source.info.clone().ok_or_else(|| missing("info"))?;
    let paths = source.paths.as_ref().ok_or_else(|| missing("paths"))?;
    let definitions = source
        .definitions
        .as_ref()
        .ok_or_else(|| missing("definitions"))?;

    let document = OpenApiDocument {
        openapi: OPENAPI_VERSION.to_string(),
        info,
        paths: map_paths(paths)?,
        components: Components {
            schemas: map_definitions(definitions)?,
        },
    };

    log::info!(
        "converted {} paths, {} operations, {} schemas",
        document.paths.len(),
        document.operation_count(),
        document.components.schemas.len()
    );

    Ok(document)
}

fn missing(field: &str) -> ConvertError {
    ConvertError::MalformedSourceDocument(format!("missing required field `{field}`"))
}
