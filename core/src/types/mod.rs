pub mod config;

pub(crate) mod field_name;
pub use field_name::{FieldName, FieldNameError};

pub(crate) mod record;
pub use record::Record;

pub(crate) mod schema;
pub use schema::{FieldType, Schema};
