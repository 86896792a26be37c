use indexmap::IndexMap;

use crate::error::ConvertError;
use crate::parse::response::Response;
use crate::target;

use super::compact::omit_empty;
use super::schema_name::component_ref;

/// Convert a Swagger `responses` map into OpenAPI responses keyed by status
/// code. Every content type in `produces` receives the same schema block.
pub fn map_responses(
    responses: &IndexMap<String, Response>,
    produces: &[String],
) -> Result<IndexMap<String, target::Response>, ConvertError> {
    let mut mapped = IndexMap::with_capacity(responses.len());

    for (status, response) in responses {
        let schema = map_response_schema(status, response)?;
        let content = produces
            .iter()
            .map(|content_type| {
                (
                    content_type.clone(),
                    target::MediaType {
                        schema: schema.clone(),
                    },
                )
            })
            .collect();

        mapped.insert(
            status.clone(),
            target::Response {
                description: response.description.clone(),
                content,
            },
        );
    }

    Ok(mapped)
}

fn map_response_schema(
    status: &str,
    response: &Response,
) -> Result<target::SchemaRef, ConvertError> {
    let reference = response
        .schema
        .as_ref()
        .and_then(|schema| schema.reference())
        .ok_or_else(|| {
            ConvertError::MalformedSourceDocument(format!(
                "response `{status}` has no schema `$ref` or `items.$ref`"
            ))
        })?;

    Ok(target::SchemaRef {
        schema_type: omit_empty(
            response
                .schema
                .as_ref()
                .and_then(|schema| schema.schema_type.clone()),
        ),
        ref_path: component_ref(reference)?,
    })
}
