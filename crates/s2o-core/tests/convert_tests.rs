use s2o_core::error::ConvertError;
use s2o_core::target::OpenApiDocument;
use s2o_core::{assemble, emit, parse};

const POCKETSLATE: &str = include_str!("fixtures/pocketslate-swagger.yaml");

fn convert_pocketslate() -> OpenApiDocument {
    let source = parse::from_yaml(POCKETSLATE).unwrap();
    assemble(&source).unwrap()
}

#[test]
fn convert_pocketslate_document_shell() {
    let doc = convert_pocketslate();
    assert_eq!(doc.openapi, "3.0.3");
    assert_eq!(doc.info["title"], "PocketSlate API");
    assert_eq!(doc.info["version"], "1.0");
    assert_eq!(doc.paths.len(), 3);
    assert_eq!(doc.operation_count(), 3);

    let schema_names: Vec<&str> = doc.components.schemas.keys().map(String::as_str).collect();
    assert_eq!(
        schema_names,
        [
            "PingResponse",
            "MakeTranslationPayload",
            "MakeTranslationResponse",
            "SupportedLocaleResponse",
            "ErrorMessage",
        ]
    );
}

#[test]
fn convert_ping_operation() {
    let doc = convert_pocketslate();
    let value = serde_json::to_value(&doc.paths["/health/ping"]["get"]).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "description": "To ping the server",
            "operationId": "healthPing",
            "responses": {
                "200": {
                    "description": "OK",
                    "content": {
                        "application/json": {
                            "schema": {"$ref": "#/components/schemas/PingResponse"}
                        }
                    }
                }
            },
            "summary": "Ping the server",
            "tags": ["health"]
        })
    );
}

#[test]
fn convert_translation_operation_splits_body() {
    let doc = convert_pocketslate();
    let op = &doc.paths["/translations"]["post"];

    let parameters = op.parameters.as_ref().expect("header parameters remain");
    let names: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["App-Version", "App-Name", "Api-Key"]);

    let body = op.request_body.as_ref().expect("body becomes requestBody");
    assert_eq!(body.description.as_deref(), Some("Payload"));
    assert!(body.required);
    assert_eq!(
        body.content["application/json"].schema.ref_path,
        "#/components/schemas/MakeTranslationPayload"
    );

    let responses = op.responses.as_ref().unwrap();
    assert_eq!(
        responses["400"].content["application/json"].schema.ref_path,
        "#/components/schemas/ErrorMessage"
    );
}

#[test]
fn convert_array_response_and_query_default() {
    let doc = convert_pocketslate();
    let op = &doc.paths["/translations/supported-locales"]["get"];
    assert!(op.request_body.is_none());

    let value = serde_json::to_value(op).unwrap();
    assert_eq!(
        value["responses"]["200"]["content"]["application/json"]["schema"],
        serde_json::json!({
            "type": "array",
            "$ref": "#/components/schemas/SupportedLocaleResponse"
        })
    );
    assert_eq!(
        value["parameters"][0],
        serde_json::json!({
            "description": "Target locale",
            "in": "query",
            "name": "target",
            "schema": {"type": "string"}
        })
    );
}

#[test]
fn convert_definition_bodies_verbatim() {
    let source = parse::from_yaml(POCKETSLATE).unwrap();
    let doc = assemble(&source).unwrap();
    let definitions = source.definitions.as_ref().unwrap();
    assert_eq!(
        doc.components.schemas["MakeTranslationPayload"],
        definitions["translations.makeTranslationPayload"]
    );
}

#[test]
fn convert_is_deterministic() {
    let source = parse::from_yaml(POCKETSLATE).unwrap();
    let first = emit::to_yaml(&assemble(&source).unwrap()).unwrap();
    let second = emit::to_yaml(&assemble(&source).unwrap()).unwrap();
    assert_eq!(first, second);

    let first = emit::to_json(&assemble(&source).unwrap()).unwrap();
    let second = emit::to_json(&assemble(&source).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn emitted_yaml_reads_back() {
    let doc = convert_pocketslate();
    let yaml = emit::to_yaml(&doc).unwrap();
    assert!(yaml.starts_with("openapi: 3.0.3\n"));
    assert!(!yaml.contains("null"));

    let back: OpenApiDocument = serde_yaml_ng::from_str(&yaml).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn emitted_json_reads_back() {
    let doc = convert_pocketslate();
    let json = emit::to_json(&doc).unwrap();
    assert!(json.ends_with("}\n"));

    let back: OpenApiDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn convert_rejects_multiple_bodies() {
    let yaml = r##"
info: {title: t}
definitions: {}
paths:
  /x:
    post:
      parameters:
        - {name: a, in: body, schema: {$ref: '#/definitions/a'}}
        - {name: b, in: body, schema: {$ref: '#/definitions/b'}}
"##;
    let source = parse::from_yaml(yaml).unwrap();
    assert!(matches!(
        assemble(&source),
        Err(ConvertError::MultipleBodyParameters { count: 2 })
    ));
}

#[test]
fn convert_rejects_empty_reference() {
    let yaml = r##"
info: {title: t}
definitions: {}
paths:
  /x:
    get:
      produces: [application/json]
      responses:
        "200":
          description: OK
          schema:
            $ref: '#/definitions/health.'
"##;
    let source = parse::from_yaml(yaml).unwrap();
    assert!(matches!(
        assemble(&source),
        Err(ConvertError::InvalidReference(r)) if r == "#/definitions/health."
    ));
}
