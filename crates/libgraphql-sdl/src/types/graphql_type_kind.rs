use crate::types::TypeDefinition;
use crate::types::TypeDefinitionKind;

/// Similar to [`TypeDefinitionKind`] except without the corresponding type
/// metadata. Useful when representing a group or category of types.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLTypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl GraphQLTypeKind {
    /// Lower-case name as used in element paths (e.g. `input object`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::InputObject => "input object",
            Self::Interface => "interface",
            Self::Object => "object",
            Self::Scalar => "scalar",
            Self::Union => "union",
        }
    }

    pub fn is_input_type(&self) -> bool {
        matches!(self, Self::Enum | Self::InputObject | Self::Scalar)
    }

    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject)
    }
}
impl std::convert::From<&TypeDefinitionKind> for GraphQLTypeKind {
    fn from(value: &TypeDefinitionKind) -> Self {
        match value {
            TypeDefinitionKind::Enum(_) => Self::Enum,
            TypeDefinitionKind::InputObject(_) => Self::InputObject,
            TypeDefinitionKind::Interface(_) => Self::Interface,
            TypeDefinitionKind::Object(_) => Self::Object,
            TypeDefinitionKind::Scalar => Self::Scalar,
            TypeDefinitionKind::Union(_) => Self::Union,
        }
    }
}
impl std::convert::From<&TypeDefinition> for GraphQLTypeKind {
    fn from(value: &TypeDefinition) -> Self {
        (&value.kind).into()
    }
}
impl std::fmt::Display for GraphQLTypeKind {
    /// Sentence-case name (e.g. `Input object`), for the start of a message.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}
