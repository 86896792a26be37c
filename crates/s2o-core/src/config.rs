use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Project configuration loaded from `.s2o.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct S2oConfig {
    /// Swagger 2.0 document to read.
    pub input: String,
    /// Where the OpenAPI 3.0.3 document is written.
    pub output: String,
    /// Output format. Derived from the `output` extension when unset.
    pub format: Option<DocumentFormat>,
}

impl Default for S2oConfig {
    fn default() -> Self {
        Self {
            input: "swagger.yaml".to_string(),
            output: "openapi.yaml".to_string(),
            format: None,
        }
    }
}

impl S2oConfig {
    /// The configured output format, or the one implied by the output path.
    pub fn output_format(&self) -> DocumentFormat {
        self.format
            .unwrap_or_else(|| DocumentFormat::from_path(Path::new(&self.output)))
    }
}

/// Text format of a source or target document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `.json` files are JSON, everything else is treated as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".s2o.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<S2oConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: S2oConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# s2o configuration
input: swagger.yaml     # Swagger 2.0 source (YAML or JSON)
output: openapi.yaml    # OpenAPI 3.0.3 destination
# format: yaml          # yaml | json (defaults to the output file extension)
"#
}
