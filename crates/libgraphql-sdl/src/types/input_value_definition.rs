use crate::directives::DirectiveUsage;
use crate::loc;
use crate::types::ElementId;
use crate::types::SchemaElement;
use crate::types::TypeNode;
use crate::Value;
use inherent::inherent;

/// An argument (of a field or directive) or an input field (of an input
/// object). Both share the same shape.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputValueDefinition {
    pub(crate) default_value: Option<Value>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveUsage>,
    pub(crate) location: loc::SourceLocation,
    pub(crate) name: String,
    pub(crate) parent: Option<ElementId>,
    pub(crate) type_node: TypeNode,
}
impl InputValueDefinition {
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// Non-null without a default: a value must always be supplied.
    pub fn is_required(&self) -> bool {
        self.type_node.is_non_null() && self.default_value.is_none()
    }

    /// The element this argument or input field is declared on. Set by the
    /// link pass.
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn type_node(&self) -> &TypeNode {
        &self.type_node
    }
}

#[inherent]
impl SchemaElement for InputValueDefinition {
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
