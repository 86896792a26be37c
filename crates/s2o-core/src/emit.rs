use crate::config::DocumentFormat;
use crate::error::EmitError;
use crate::target::OpenApiDocument;

/// Serialize a converted document as YAML.
pub fn to_yaml(document: &OpenApiDocument) -> Result<String, EmitError> {
    Ok(serde_yaml_ng::to_string(document)?)
}

/// Serialize a converted document as pretty-printed JSON with a trailing newline.
pub fn to_json(document: &OpenApiDocument) -> Result<String, EmitError> {
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');
    Ok(json)
}

pub fn to_string(document: &OpenApiDocument, format: DocumentFormat) -> Result<String, EmitError> {
    match format {
        DocumentFormat::Yaml => to_yaml(document),
        DocumentFormat::Json => to_json(document),
    }
}
