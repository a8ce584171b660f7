use serde_json::{json, Value};

/// JSON Schema for a catalog document as served by the content store.
/// Deliberately loose: only the fields the listing pipeline relies on are
/// constrained, everything else passes through untouched.
pub fn catalog_document_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["projects"],
        "properties": {
            "projects": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["id", "title"],
                    "properties": {
                        "id": {"type": "string"},
                        "title": {"type": "string"},
                        "titleCs": {"type": "string"},
                        "dateValue": {"type": "integer"},
                        "difficulty": {
                            "type": "string",
                            "enum": ["Beginner", "Intermediate", "Advanced"]
                        },
                        "filters": {
                            "type": "array",
                            "items": {"type": "string"}
                        },
                        "sortOrder": {"type": "integer"}
                    }
                }
            }
        }
    })
}

/// JSON Schema for the filter metadata document
pub fn filters_document_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["filters"],
        "properties": {
            "filters": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["id"],
                    "properties": {
                        "id": {"type": "string"},
                        "name": {"type": "string"},
                        "nameCs": {"type": "string"},
                        "options": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "required": ["value"],
                                "properties": {
                                    "value": {"type": "string"},
                                    "label": {"type": "string"},
                                    "labelCs": {"type": "string"}
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

/// Validate a raw document against a JSON Schema
/// Returns Ok(()) if valid, Err with list of validation errors if invalid
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    match compiled.validate(data) {
        Ok(()) => Ok(()),
        Err(error) => {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            Err(vec![format!("{} at {}", error, location)])
        }
    }
}
