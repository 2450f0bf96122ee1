mod diagnostics;
mod element_path;
#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;
mod schema_root;
mod validation_error;

pub(crate) use diagnostics::Diagnostics;
pub(crate) use element_path::element_directives;
pub(crate) use element_path::element_path;
pub use element_path::ElementPath;
pub use element_path::PathSegment;
pub use schema::Schema;
pub use schema_builder::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub(crate) use schema_builder::SourcedDeclaration;
pub use schema_root::OperationKind;
pub use schema_root::OperationTypeBinding;
pub use schema_root::SchemaDefinition;
pub use schema_root::SchemaRoot;
pub use validation_error::SchemaValidationError;
pub use validation_error::ValidationErrorKind;

#[cfg(test)]
mod tests;
