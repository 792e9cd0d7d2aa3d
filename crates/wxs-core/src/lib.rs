pub mod config;
pub mod logging;

pub mod error;
pub mod fetch;
pub mod http;
pub mod loader;
pub mod parse;
pub mod resolve;
pub mod schema;
pub mod strip;
pub mod tag;

pub use error::SchemaError;
pub use loader::SchemaLoader;
pub use schema::{NamespaceIndex, NamespaceSchema, RawSchemas, Schemas};
pub use tag::VersionTag;
