use crate::types::FieldDefinition;
use crate::types::NamedTypeRef;
use indexmap::IndexMap;

/// Data shared by object and interface types.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectOrInterfaceTypeData {
    pub(crate) fields: IndexMap<String, FieldDefinition>,
    pub(crate) implements: IndexMap<String, NamedTypeRef>,
}
impl ObjectOrInterfaceTypeData {
    pub fn fields(&self) -> &IndexMap<String, FieldDefinition> {
        &self.fields
    }

    /// Interfaces this type declares it implements, keyed by name.
    pub fn implements(&self) -> &IndexMap<String, NamedTypeRef> {
        &self.implements
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.implements.keys()
            .map(|iface_name| iface_name.as_str())
            .collect()
    }
}
