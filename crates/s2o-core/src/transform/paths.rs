use indexmap::IndexMap;

use crate::error::ConvertError;
use crate::parse::operation::{Operation, PathItem};
use crate::target;

use super::compact::{non_empty, omit_empty};
use super::parameters::{map_parameters, map_request_body};
use super::responses::map_responses;

/// Convert every path and operation, keeping document order.
pub fn map_paths(
    paths: &IndexMap<String, PathItem>,
) -> Result<IndexMap<String, target::PathItem>, ConvertError> {
    let mut mapped = IndexMap::with_capacity(paths.len());

    for (path, item) in paths {
        let mut operations = IndexMap::with_capacity(item.len());
        for (method, operation) in item {
            log::debug!("mapping {} {}", method.to_uppercase(), path);
            let target_op = map_operation(operation).inspect_err(|e| {
                log::error!("failed to map {} {}: {}", method.to_uppercase(), path, e);
            })?;
            operations.insert(method.clone(), target_op);
        }
        mapped.insert(path.clone(), operations);
    }

    Ok(mapped)
}

/// Build one target operation, leaving out every empty field.
pub fn map_operation(operation: &Operation) -> Result<target::Operation, ConvertError> {
    let responses = map_responses(&operation.responses, &operation.produces)?;
    let request_body = map_request_body(&operation.parameters)?;

    Ok(target::Operation {
        description: omit_empty(operation.description.clone()),
        operation_id: omit_empty(operation.operation_id.clone()),
        responses: non_empty(responses),
        summary: omit_empty(operation.summary.clone()),
        tags: non_empty(operation.tags.clone()),
        parameters: map_parameters(&operation.parameters),
        request_body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths_from(yaml: &str) -> IndexMap<String, PathItem> {
        serde_yaml_ng::from_str(yaml).unwrap()
    }

    const PING: &str = r##"
/health/ping:
  get:
    description: ping the server
    operationId: healthPing
    produces:
      - application/json
    responses:
      "200":
        description: OK
        schema:
          $ref: '#/definitions/health.pingResponse'
    summary: Ping
    tags:
      - health
"##;

    #[test]
    fn test_operation_without_parameters_has_no_parameter_keys() {
        let mapped = map_paths(&paths_from(PING)).unwrap();
        let value = serde_json::to_value(&mapped).unwrap();
        let op = value["/health/ping"]["get"].as_object().unwrap();

        let keys: Vec<&str> = op.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["description", "operationId", "responses", "summary", "tags"]
        );
        assert!(!op.contains_key("parameters"));
        assert!(!op.contains_key("requestBody"));
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let paths = paths_from(
            r##"
/translations:
  post:
    description: ""
    operationId: makeTranslation
    summary: ""
    tags: []
    produces: [application/json]
    parameters:
      - name: body
        in: body
        required: true
        description: payload
        schema:
          $ref: '#/definitions/translations.makeTranslationPayload'
    responses:
      "200":
        description: OK
        schema:
          $ref: '#/definitions/translations.makeTranslationResponse'
"##,
        );
        let mapped = map_paths(&paths).unwrap();
        let op = &mapped["/translations"]["post"];

        assert_eq!(op.description, None);
        assert_eq!(op.summary, None);
        assert_eq!(op.tags, None);
        assert_eq!(op.parameters, None);
        assert_eq!(op.operation_id.as_deref(), Some("makeTranslation"));
        assert!(op.request_body.is_some());
    }

    #[test]
    fn test_operation_without_responses_omits_them() {
        let paths = paths_from("/noop:\n  delete:\n    operationId: noop\n");
        let mapped = map_paths(&paths).unwrap();
        let value = serde_json::to_value(&mapped).unwrap();
        assert_eq!(
            value["/noop"]["delete"],
            serde_json::json!({"operationId": "noop"})
        );
    }

    #[test]
    fn test_path_and_method_order_is_preserved() {
        let paths = paths_from(
            r#"
/z:
  post: {}
  get: {}
/a:
  put: {}
/m:
  get: {}
"#,
        );
        let mapped = map_paths(&paths).unwrap();
        let path_keys: Vec<&str> = mapped.keys().map(String::as_str).collect();
        assert_eq!(path_keys, ["/z", "/a", "/m"]);
        let methods: Vec<&str> = mapped["/z"].keys().map(String::as_str).collect();
        assert_eq!(methods, ["post", "get"]);
    }

    #[test]
    fn test_errors_abort_the_mapping() {
        let paths = paths_from(
            r#"
/broken:
  get:
    produces: [application/json]
    responses:
      "200":
        description: OK
"#,
        );
        assert!(matches!(
            map_paths(&paths),
            Err(ConvertError::MalformedSourceDocument(_))
        ));
    }
}
