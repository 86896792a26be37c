pub mod operation;
pub mod parameter;
pub mod response;
pub mod schema;
pub mod spec;

use crate::config::DocumentFormat;
use crate::error::ParseError;
use spec::SwaggerSpec;

/// Parse a Swagger 2.0 document from YAML.
pub fn from_yaml(input: &str) -> Result<SwaggerSpec, ParseError> {
    let spec: SwaggerSpec = serde_yaml_ng::from_str(input)?;
    validate_version(&spec)?;
    Ok(spec)
}

/// Parse a Swagger 2.0 document from JSON.
pub fn from_json(input: &str) -> Result<SwaggerSpec, ParseError> {
    let spec: SwaggerSpec = serde_json::from_str(input)?;
    validate_version(&spec)?;
    Ok(spec)
}

/// Parse a Swagger 2.0 document in the given format.
pub fn from_str(input: &str, format: DocumentFormat) -> Result<SwaggerSpec, ParseError> {
    match format {
        DocumentFormat::Yaml => from_yaml(input),
        DocumentFormat::Json => from_json(input),
    }
}

/// The `swagger` field is optional, but when present it has to be a 2.x version.
fn validate_version(spec: &SwaggerSpec) -> Result<(), ParseError> {
    match spec.swagger.as_deref() {
        Some(version) if !version.starts_with("2.") => {
            Err(ParseError::UnsupportedVersion(version.to_string()))
        }
        _ => Ok(()),
    }
}
