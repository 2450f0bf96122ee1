use crate::types::NamedTypeRef;
use indexmap::IndexMap;

/// Data specific to a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(crate) members: IndexMap<String, NamedTypeRef>,
}
impl UnionType {
    /// Member references in declaration order. Members added from type
    /// extensions follow the ones on the base declaration.
    pub fn members(&self) -> &IndexMap<String, NamedTypeRef> {
        &self.members
    }

    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys()
            .map(|type_name| type_name.as_str())
            .collect()
    }
}
