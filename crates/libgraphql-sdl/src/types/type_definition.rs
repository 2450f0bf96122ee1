use crate::directives::DirectiveUsage;
use crate::loc;
use crate::types::EnumType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::SchemaElement;
use crate::types::TypeReference;
use crate::types::UnionType;
use inherent::inherent;

/// Kind-specific data of a [`TypeDefinition`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeDefinitionKind {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(ObjectOrInterfaceTypeData),
    Object(ObjectOrInterfaceTypeData),
    Scalar,
    Union(UnionType),
}

/// A named type in the schema's type namespace.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeDefinition {
    pub(crate) built_in: bool,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveUsage>,
    pub(crate) kind: TypeDefinitionKind,
    pub(crate) location: loc::SourceLocation,
    pub(crate) name: String,
    pub(crate) references: Vec<TypeReference>,
    pub(crate) rooted: bool,
}
impl TypeDefinition {
    pub(crate) fn new(
        name: impl Into<String>,
        location: loc::SourceLocation,
        description: Option<String>,
        directives: Vec<DirectiveUsage>,
        kind: TypeDefinitionKind,
    ) -> Self {
        Self {
            built_in: location.is_builtin(),
            description,
            directives,
            kind,
            location,
            name: name.into(),
            references: vec![],
            rooted: false,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        if let TypeDefinitionKind::Enum(enum_type) = &self.kind {
            Some(enum_type)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let TypeDefinitionKind::InputObject(input_obj) = &self.kind {
            Some(input_obj)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&ObjectOrInterfaceTypeData> {
        if let TypeDefinitionKind::Interface(iface) = &self.kind {
            Some(iface)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectOrInterfaceTypeData> {
        if let TypeDefinitionKind::Object(obj) = &self.kind {
            Some(obj)
        } else {
            None
        }
    }

    pub fn as_object_or_interface(&self) -> Option<&ObjectOrInterfaceTypeData> {
        match &self.kind {
            TypeDefinitionKind::Interface(data)
                | TypeDefinitionKind::Object(data) => Some(data),
            _ => None,
        }
    }

    pub(crate) fn as_object_or_interface_mut(&mut self) -> Option<&mut ObjectOrInterfaceTypeData> {
        match &mut self.kind {
            TypeDefinitionKind::Interface(data)
                | TypeDefinitionKind::Object(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let TypeDefinitionKind::Union(union_type) = &self.kind {
            Some(union_type)
        } else {
            None
        }
    }

    /// Predefined by GraphQL (`Int`, `Float`, `String`, `Boolean`, `ID`).
    pub fn is_builtin(&self) -> bool {
        self.built_in
    }

    pub fn is_input_type(&self) -> bool {
        self.type_kind().is_input_type()
    }

    pub fn is_output_type(&self) -> bool {
        self.type_kind().is_output_type()
    }

    /// Reachable from one of the schema's root operation types.
    pub fn is_rooted(&self) -> bool {
        self.rooted
    }

    pub fn kind(&self) -> &TypeDefinitionKind {
        &self.kind
    }

    /// Every site in the schema that names this type.
    pub fn references(&self) -> &[TypeReference] {
        &self.references
    }

    pub fn type_kind(&self) -> GraphQLTypeKind {
        (&self.kind).into()
    }
}

#[inherent]
impl SchemaElement for TypeDefinition {
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
