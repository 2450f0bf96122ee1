use crate::loc;
use crate::types::TypeId;

/// A by-name reference to a type: the leaf of a [`TypeNode`](crate::types::TypeNode),
/// an `implements` entry, a union member or a root operation binding.
///
/// `target` stays `None` until the link pass resolves the name. A reference
/// that is still unresolved after linking has already been reported and is
/// skipped by every later check.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeRef {
    pub(crate) name: String,
    pub(crate) ref_location: loc::SourceLocation,
    pub(crate) target: Option<TypeId>,
}
impl NamedTypeRef {
    pub fn new(name: impl AsRef<str>, ref_location: loc::SourceLocation) -> Self {
        Self {
            name: name.as_ref().to_string(),
            ref_location,
            target: None,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Where the reference itself appears (not where the referenced type is
    /// defined).
    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }

    pub fn target(&self) -> Option<TypeId> {
        self.target
    }
}
