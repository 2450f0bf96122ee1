use crate::directives::DirectiveUsage;
use crate::loc;
use crate::types::ElementId;
use crate::types::SchemaElement;
use indexmap::IndexMap;
use inherent::inherent;

/// Data specific to an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    pub(crate) values: IndexMap<String, EnumValueDefinition>,
}
impl EnumType {
    pub fn values(&self) -> &IndexMap<String, EnumValueDefinition> {
        &self.values
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValueDefinition {
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveUsage>,
    pub(crate) location: loc::SourceLocation,
    pub(crate) name: String,
    pub(crate) parent: Option<ElementId>,
}
impl EnumValueDefinition {
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }
}

#[inherent]
impl SchemaElement for EnumValueDefinition {
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
