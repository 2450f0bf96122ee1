use crate::directives::DirectiveLocations;
use crate::directives::DirectiveUsage;
use crate::loc;
use crate::types::DirectiveUsageId;
use crate::types::InputValueDefinition;
use crate::types::SchemaElement;
use indexmap::IndexMap;
use inherent::inherent;

/// A directive declared with `directive @name(...) on ...`, or one of the
/// built-in directives (`@include`, `@skip`, `@deprecated`, `@specifiedBy`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveDefinition {
    pub(crate) arguments: IndexMap<String, InputValueDefinition>,
    pub(crate) built_in: bool,
    pub(crate) description: Option<String>,
    pub(crate) location: loc::SourceLocation,
    pub(crate) locations: DirectiveLocations,
    pub(crate) name: String,
    pub(crate) references: Vec<DirectiveUsageId>,
    pub(crate) repeatable: bool,
}
impl DirectiveDefinition {
    pub fn arguments(&self) -> &IndexMap<String, InputValueDefinition> {
        &self.arguments
    }

    pub fn is_builtin(&self) -> bool {
        self.built_in
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    /// Where this directive may legally be applied.
    pub fn locations(&self) -> DirectiveLocations {
        self.locations
    }

    /// Every usage of this directive in the schema, in link order.
    pub fn references(&self) -> &[DirectiveUsageId] {
        &self.references
    }
}

#[inherent]
impl SchemaElement for DirectiveDefinition {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Directive definitions cannot themselves be annotated.
    pub fn directives(&self) -> &[DirectiveUsage] {
        &[]
    }

    pub fn location(&self) -> &loc::SourceLocation {
        &self.location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
