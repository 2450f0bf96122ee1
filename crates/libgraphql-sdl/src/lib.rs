pub mod ast;
pub mod directives;
mod file_reader;
pub mod loc;
mod passes;
mod printer;
pub mod schema;
pub mod types;
mod value;

pub use file_reader::ReadContentError;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;
pub use value::Value;
