use crate::error::ConvertError;

/// Prefix of every reference emitted into the target document.
pub const COMPONENT_SCHEMAS_PREFIX: &str = "#/components/schemas/";

/// Derive a target schema name from a `$ref` string or a definition key.
///
/// Keeps what follows the last `/`, then what follows the last `.`, and
/// upper-cases the first character of that leaf. The rest is left as is.
///
/// Examples:
/// - `#/definitions/translations.makeTranslationResponse` → `MakeTranslationResponse`
/// - `translations.supportedLocaleResponse` → `SupportedLocaleResponse`
/// - `Pet` → `Pet`
pub fn resolve_schema_name(reference: &str) -> Result<String, ConvertError> {
    let leaf = reference.rsplit('/').next().unwrap_or(reference);
    let leaf = leaf.rsplit('.').next().unwrap_or(leaf);

    let mut chars = leaf.chars();
    match chars.next() {
        Some(first) => Ok(first.to_uppercase().chain(chars).collect()),
        None => Err(ConvertError::InvalidReference(reference.to_string())),
    }
}

/// Build `#/components/schemas/<Name>` for a source reference.
pub fn component_ref(reference: &str) -> Result<String, ConvertError> {
    Ok(format!(
        "{COMPONENT_SCHEMAS_PREFIX}{}",
        resolve_schema_name(reference)?
    ))
}
