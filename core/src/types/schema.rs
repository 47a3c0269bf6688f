use crate::error::SchemaError;
use crate::types::{FieldName, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Primitive type of a schema field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (FieldType::String, Value::String(_)) | (FieldType::Number, Value::Number(_))
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const RESTAURANT_FIELDS: [&str; 12] = [
    "Name",
    "Address",
    "Location",
    "Price",
    "Cuisine",
    "Longitude",
    "Latitude",
    "PhoneNumber",
    "Url",
    "WebsiteUrl",
    "Award",
    "FacilitiesAndServices",
];

/// Field name to type mapping, fixed when an index is created.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<(FieldName, FieldType)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// The restaurant dataset schema. Every field, coordinates and phone
    /// number included, is a string.
    pub fn restaurants() -> Self {
        let fields = RESTAURANT_FIELDS
            .iter()
            .map(|name| {
                // SAFETY: constant names, already trimmed and non-empty.
                let name = unsafe { FieldName::new_unchecked(name.to_string()) };
                (name, FieldType::String)
            })
            .collect();
        Self { fields }
    }

    /// Adds or retypes a field.
    pub fn with_field(mut self, name: &str, field_type: FieldType) -> Result<Self, SchemaError> {
        let name = FieldName::try_from(name)
            .map_err(|_| SchemaError::InvalidFieldName(name.to_string()))?;

        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, ty)) => *ty = field_type,
            None => self.fields.push((name, field_type)),
        }
        Ok(self)
    }

    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.fields
            .iter()
            .find(|(field, _)| field.as_str() == name)
            .map(|(_, ty)| *ty)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&FieldName, FieldType)> {
        self.fields.iter().map(|(name, ty)| (name, *ty))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Checks a record against the schema.
    ///
    /// Missing fields and `null` values are accepted as absent. Fields the
    /// schema doesn't list are not checked and never get indexed.
    pub fn validate(&self, record: &Record) -> Result<(), SchemaError> {
        for (field, value) in record.fields() {
            let Some(expected) = self.field_type(field) else {
                continue;
            };
            if value.is_null() || expected.accepts(value) {
                continue;
            }
            return Err(SchemaError::TypeMismatch {
                field: field.to_string(),
                expected: expected.as_str(),
                found: json_type_name(value),
            });
        }
        Ok(())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests;
