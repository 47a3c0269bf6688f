use crate::error::SearchError;
use crate::tolerance::{Word, tokenize};
use mym_core::types::{FieldType, Record, Schema};
use nucleo::Utf32String;

/// Searchable form of one string field.
pub(crate) struct Field {
    pub(crate) haystack: Utf32String,
    pub(crate) words: Vec<Word>,
}

pub(crate) struct Document {
    pub(crate) record: Record,
    /// One slot per schema field, `None` for absent or non-string fields.
    fields: Vec<Option<Field>>,
}

impl Document {
    pub(crate) fn field(&self, slot: usize) -> Option<&Field> {
        self.fields.get(slot)?.as_ref()
    }
}

/// Append-only record store with per-field matcher data.
pub(crate) struct Index {
    schema: Schema,
    documents: Vec<Document>,
}

impl Index {
    pub(crate) fn new(schema: Schema) -> Self {
        Self {
            schema,
            documents: Vec::new(),
        }
    }

    pub(crate) fn schema(&self) -> &Schema {
        &self.schema
    }

    pub(crate) fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub(crate) fn len(&self) -> usize {
        self.documents.len()
    }

    /// Checks every record before any is inserted.
    pub(crate) fn validate(&self, records: &[Record]) -> Result<(), SearchError> {
        for (index, record) in records.iter().enumerate() {
            self.schema
                .validate(record)
                .map_err(|source| SearchError::Schema { index, source })?;
        }
        Ok(())
    }

    pub(crate) fn insert(&mut self, record: Record) {
        let fields = self
            .schema
            .fields()
            .map(|(name, field_type)| match field_type {
                FieldType::String => record.text(name).map(|text| Field {
                    haystack: Utf32String::from(&*text),
                    words: tokenize(&text).map(Word::new).collect(),
                }),
                FieldType::Number => None,
            })
            .collect();

        self.documents.push(Document { record, fields });
    }

    /// Maps property names to field slots. An empty list means every string
    /// field.
    pub(crate) fn resolve(&self, properties: &[String]) -> Result<Vec<usize>, SearchError> {
        if properties.is_empty() {
            return Ok(self
                .schema
                .fields()
                .enumerate()
                .filter(|(_, (_, field_type))| *field_type == FieldType::String)
                .map(|(slot, _)| slot)
                .collect());
        }

        let mut slots = Vec::with_capacity(properties.len());
        for property in properties {
            let Some((slot, (_, field_type))) = self
                .schema
                .fields()
                .enumerate()
                .find(|(_, (name, _))| name.as_str() == property.as_str())
            else {
                return Err(SearchError::UnknownProperty(property.clone()));
            };
            if field_type != FieldType::String {
                return Err(SearchError::NotSearchable(property.clone()));
            }
            if !slots.contains(&slot) {
                slots.push(slot);
            }
        }
        Ok(slots)
    }
}
