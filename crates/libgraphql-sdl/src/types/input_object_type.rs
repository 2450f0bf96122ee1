use crate::types::InputValueDefinition;
use indexmap::IndexMap;

/// Data specific to an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectType {
    pub(crate) fields: IndexMap<String, InputValueDefinition>,
}
impl InputObjectType {
    pub fn fields(&self) -> &IndexMap<String, InputValueDefinition> {
        &self.fields
    }
}
