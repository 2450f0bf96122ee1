use crate::loc;
use crate::types::DirectiveId;
use crate::types::ElementId;
use crate::Value;
use indexmap::IndexMap;

/// One application of a directive (e.g. `@deprecated(reason: "old")`) to
/// some element of the schema.
///
/// A usage names its [`DirectiveDefinition`](crate::directives::DirectiveDefinition)
/// symbolically; `definition` is filled in by the link pass and stays `None`
/// when no directive of that name exists.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveUsage {
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) definition: Option<DirectiveId>,
    pub(crate) location: loc::SourceLocation,
    pub(crate) name: String,
    pub(crate) parent: Option<ElementId>,
}
impl DirectiveUsage {
    /// Argument values in the order they were supplied.
    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn definition(&self) -> Option<DirectiveId> {
        self.definition
    }

    pub fn location(&self) -> &loc::SourceLocation {
        &self.location
    }

    /// Name of the directive, without the leading `@`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The element this directive is applied to.
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }
}
