use indexmap::IndexMap;

use crate::error::ConvertError;
use crate::parse::parameter::{BodyParameter, Parameter, SimpleParameter};
use crate::target::{self, ParameterLocation};

use super::compact::non_empty;
use super::schema_name::component_ref;

/// Content type of every generated request body.
pub const REQUEST_BODY_CONTENT_TYPE: &str = "application/json";

/// Convert the non-body parameters of an operation.
///
/// Returns `None` when nothing is left, so the caller can omit the
/// `parameters` key altogether.
pub fn map_parameters(parameters: &[Parameter]) -> Option<Vec<target::Parameter>> {
    let mapped: Vec<target::Parameter> = parameters
        .iter()
        .filter_map(|parameter| match parameter {
            Parameter::Query(p) => Some(map_parameter(ParameterLocation::Query, p)),
            Parameter::Header(p) => Some(map_parameter(ParameterLocation::Header, p)),
            Parameter::Path(p) => Some(map_parameter(ParameterLocation::Path, p)),
            Parameter::Body(_) => None,
        })
        .collect();

    non_empty(mapped)
}

/// `default` is dropped and `type` moves under `schema`.
fn map_parameter(location: ParameterLocation, parameter: &SimpleParameter) -> target::Parameter {
    target::Parameter {
        name: parameter.name.clone(),
        location,
        description: parameter.description.clone(),
        required: parameter.required,
        schema: parameter
            .param_type
            .clone()
            .map(|schema_type| target::ParameterSchema { schema_type }),
        extra: parameter.extra.clone(),
    }
}

/// Convert the body parameter of an operation, if it has one, into a
/// `requestBody`.
pub fn map_request_body(
    parameters: &[Parameter],
) -> Result<Option<target::RequestBody>, ConvertError> {
    let bodies: Vec<&BodyParameter> = parameters
        .iter()
        .filter_map(|parameter| match parameter {
            Parameter::Body(body) => Some(body),
            _ => None,
        })
        .collect();

    match bodies.as_slice() {
        [] => Ok(None),
        [body] => map_body(body).map(Some),
        _ => Err(ConvertError::MultipleBodyParameters {
            count: bodies.len(),
        }),
    }
}

fn map_body(body: &BodyParameter) -> Result<target::RequestBody, ConvertError> {
    let reference = body
        .schema
        .as_ref()
        .and_then(|schema| schema.ref_path.as_deref())
        .ok_or_else(|| {
            ConvertError::MalformedSourceDocument(format!(
                "body parameter `{}` has no schema `$ref`",
                body.name
            ))
        })?;

    let mut content = IndexMap::new();
    content.insert(
        REQUEST_BODY_CONTENT_TYPE.to_string(),
        target::MediaType {
            schema: target::SchemaRef {
                schema_type: None,
                ref_path: component_ref(reference)?,
            },
        },
    );

    Ok(target::RequestBody {
        description: body.description.clone(),
        required: body.required,
        content,
    })
}
