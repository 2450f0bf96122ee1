use crate::directives::DirectiveUsage;
use crate::loc;
use crate::types::ElementId;
use crate::types::InputValueDefinition;
use crate::types::SchemaElement;
use crate::types::TypeNode;
use indexmap::IndexMap;
use inherent::inherent;

/// A field declared on an object or interface type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDefinition {
    pub(crate) arguments: IndexMap<String, InputValueDefinition>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveUsage>,
    pub(crate) location: loc::SourceLocation,
    pub(crate) name: String,
    pub(crate) parent: Option<ElementId>,
    pub(crate) type_node: TypeNode,
}
impl FieldDefinition {
    /// Arguments in declaration order; arguments added by an extension of
    /// this field follow the original ones.
    pub fn arguments(&self) -> &IndexMap<String, InputValueDefinition> {
        &self.arguments
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn type_node(&self) -> &TypeNode {
        &self.type_node
    }
}

#[inherent]
impl SchemaElement for FieldDefinition {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveUsage] {
        &self.directives
    }

    pub fn location(&self) -> &loc::SourceLocation {
        &self.location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
