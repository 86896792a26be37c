use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported Swagger version: {0}")]
    UnsupportedVersion(String),
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("malformed source document: {0}")]
    MalformedSourceDocument(String),

    #[error("invalid reference `{0}`: leaf name is empty")]
    InvalidReference(String),

    #[error("operation declares {count} body parameters, at most one is supported")]
    MultipleBodyParameters { count: usize },
}

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to write YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}
