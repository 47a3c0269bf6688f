pub mod error;
pub mod loader;
pub mod types;

pub use error::{LoadError, SchemaError};
