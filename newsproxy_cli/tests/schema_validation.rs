use newsproxy_lib::gnews_api::Error;
use newsproxy_lib::Envelope;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_fixture(name: &str) -> Value {
    let path = workspace_root().join("gnews_api/tests/fixtures").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("fixture is valid JSON")
}

fn load_schema(name: &str) -> Value {
    let path = workspace_root().join("schema").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

fn envelope_validator() -> jsonschema::Validator {
    jsonschema::draft202012::new(&load_schema("envelope.schema.json"))
        .expect("envelope schema compiles")
}

// ---------------------------------------------------------------------------
// Positive validation: produced envelopes conform to the schema
// ---------------------------------------------------------------------------

#[test]
fn test_success_envelope_conforms_to_schema() {
    let envelope = Envelope::success(load_fixture("search.json"));
    let value = serde_json::to_value(&envelope).unwrap();

    let result = envelope_validator().validate(&value);
    if let Err(e) = &result {
        panic!("success envelope failed validation: {e}");
    }
}

#[test]
fn test_failure_envelopes_conform_to_schema() {
    let errors = [
        Error::HttpStatus {
            status: 401,
            body: serde_json::to_string(&load_fixture("error_unauthorized.json")).unwrap(),
        },
        Error::HttpStatus {
            status: 502,
            body: "Bad Gateway".to_string(),
        },
        Error::Transport("connection refused".to_string()),
        Error::Decode("expected value at line 1 column 1".to_string()),
    ];
    let validator = envelope_validator();
    for err in errors {
        let value = serde_json::to_value(Envelope::from_result(Err(err))).unwrap();
        if let Err(e) = validator.validate(&value) {
            panic!("failure envelope {value} failed validation: {e}");
        }
    }
}

#[test]
fn test_fixtures_conform_to_article_list_schema() {
    let validator = jsonschema::draft202012::new(&load_schema("article_list.schema.json"))
        .expect("article list schema compiles");
    for name in ["search.json", "headlines.json", "empty.json"] {
        let fixture = load_fixture(name);
        if let Err(e) = validator.validate(&fixture) {
            panic!("{name} failed validation: {e}");
        }
    }
}

// ---------------------------------------------------------------------------
// Negative validation: inconsistent envelopes are rejected
// ---------------------------------------------------------------------------

#[test]
fn test_schema_rejects_success_with_500() {
    let value = json!({
        "status": 500,
        "success": true,
        "message": "Successfully fetched the data",
        "data": {}
    });
    assert!(!envelope_validator().is_valid(&value));
}

#[test]
fn test_schema_rejects_failure_with_200() {
    let value = json!({
        "status": 200,
        "success": false,
        "message": "Failed to fetch data from the API",
        "error": "x"
    });
    assert!(!envelope_validator().is_valid(&value));
}

#[test]
fn test_schema_rejects_failure_without_error() {
    let value = json!({
        "status": 500,
        "success": false,
        "message": "Failed to fetch data from the API"
    });
    assert!(!envelope_validator().is_valid(&value));
}

#[test]
fn test_error_payload_is_not_an_article_list() {
    let validator = jsonschema::draft202012::new(&load_schema("article_list.schema.json"))
        .expect("article list schema compiles");
    assert!(!validator.is_valid(&load_fixture("error_unauthorized.json")));
}
