use super::*;
use serde_json::json;

fn make_record(value: Value) -> Record {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_restaurants_schema_is_all_strings() {
    let schema = Schema::restaurants();

    assert_eq!(schema.len(), 12);
    assert!(schema.fields().all(|(_, ty)| ty == FieldType::String));
    assert_eq!(schema.field_type("PhoneNumber"), Some(FieldType::String));
    assert_eq!(schema.field_type("Stars"), None);
}

#[test]
fn test_with_field_rejects_blank_names() {
    let err = Schema::new().with_field("  ", FieldType::String).unwrap_err();
    assert_eq!(err, SchemaError::InvalidFieldName("  ".to_string()));
}

#[test]
fn test_with_field_retypes_existing_field() {
    let schema = Schema::restaurants()
        .with_field("Latitude", FieldType::Number)
        .unwrap();

    assert_eq!(schema.len(), 12);
    assert_eq!(schema.field_type("Latitude"), Some(FieldType::Number));
}

#[test]
fn test_validate_accepts_partial_records() {
    let schema = Schema::restaurants();
    let record = make_record(json!({ "Name": "Odette", "PhoneNumber": null }));

    schema.validate(&record).unwrap();
}

#[test]
fn test_validate_ignores_fields_outside_schema() {
    let schema = Schema::restaurants();
    let record = make_record(json!({
        "Name": "Odette",
        "Description": "Modern French",
        "GreenStar": false,
    }));

    schema.validate(&record).unwrap();
}

#[test]
fn test_validate_rejects_type_mismatch() {
    let schema = Schema::restaurants();
    let record = make_record(json!({ "Latitude": 1.29 }));

    assert_eq!(
        schema.validate(&record).unwrap_err(),
        SchemaError::TypeMismatch {
            field: "Latitude".to_string(),
            expected: "string",
            found: "number",
        }
    );
}

#[test]
fn test_field_type_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&FieldType::Number).unwrap(), "\"number\"");
    assert_eq!(FieldType::String.to_string(), "string");
}
