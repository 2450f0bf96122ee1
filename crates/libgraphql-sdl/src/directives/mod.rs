mod builtins;
mod directive_definition;
mod directive_location;
mod directive_usage;

pub(crate) use builtins::BUILTIN_SDL;
pub use builtins::BUILTIN_DIRECTIVE_NAMES;
pub use builtins::BUILTIN_SCALAR_NAMES;
pub use directive_definition::DirectiveDefinition;
pub use directive_location::DirectiveLocation;
pub use directive_location::DirectiveLocations;
pub use directive_usage::DirectiveUsage;

use indexmap::IndexMap;

/// All directive definitions of a schema keyed by name (without `@`). A
/// directive's position in this map is its
/// [`DirectiveId`](crate::types::DirectiveId).
pub type DirectivesMap = IndexMap<String, DirectiveDefinition>;
