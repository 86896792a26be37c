use indexmap::IndexMap;

use crate::error::ConvertError;

use super::schema_name::resolve_schema_name;

/// Rename every definition key to its schema name. Bodies are copied as is;
/// `$ref`s nested inside a body are not rewritten.
///
/// Two keys resolving to the same name is logged and the later body wins,
/// keeping the position of the first.
pub fn map_definitions(
    definitions: &IndexMap<String, serde_json::Value>,
) -> Result<IndexMap<String, serde_json::Value>, ConvertError> {
    let mut schemas = IndexMap::with_capacity(definitions.len());

    for (key, definition) in definitions {
        let name = resolve_schema_name(key)?;
        if schemas.insert(name.clone(), definition.clone()).is_some() {
            log::warn!("definition `{key}` overwrites an earlier definition named `{name}`");
        }
    }

    Ok(schemas)
}
