//! GraphQL introspection JSON → RealmSwift/ObjectMapper model source.
//!
//! Pipeline: [`schema::collect_types`] → [`filter::filter_types`] →
//! [`codegen::emit_type`] per type (fields go through [`resolve::resolve_field`]).
//! [`generate::generate`] runs all of it; the core does no I/O.
pub mod cli;
pub mod codegen;
pub mod config;
pub mod error;
pub mod filter;
pub mod generate;
pub mod ir;
pub mod lower;
pub mod naming;
pub mod path_de;
pub mod resolve;
pub mod schema;

pub use config::{GeneratorConfig, KindSet};
pub use error::{EmitError, SchemaError, TypeRefError};
pub use generate::{Generated, generate};
pub use ir::GeneratedClass;
pub use schema::SourceDocument;
