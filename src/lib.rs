pub mod compiler;
pub mod config;
pub mod error;
pub mod models;
pub mod naming;
pub mod pipeline;
pub mod schema;
pub mod store;

pub use compiler::{RustTypeCompiler, SchemaCompiler};
pub use pipeline::{BatchReport, EntryOutcome, Pipeline};
pub use store::{SchemaEntry, SchemaStore};
