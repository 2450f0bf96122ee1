/// Stable handle to a [`TypeDefinition`](crate::types::TypeDefinition) within
/// the schema that owns it. Handles are insertion-order indices and are only
/// meaningful for the schema (or build) that produced them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
pub struct TypeId(pub(crate) usize);
impl TypeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Stable handle to a
/// [`DirectiveDefinition`](crate::directives::DirectiveDefinition) within the
/// schema that owns it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
pub struct DirectiveId(pub(crate) usize);
impl DirectiveId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Handle to any addressable node of the schema graph. Used for `parent`
/// back-links and as the site of a recorded reference.
///
/// Nested indices (`field`, `argument`, `value`) are positions within the
/// insertion-ordered maps of the owning definition.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ElementId {
    Directive(DirectiveId),
    DirectiveArgument {
        directive_id: DirectiveId,
        argument: usize,
    },
    EnumValue {
        type_id: TypeId,
        value: usize,
    },
    Field {
        type_id: TypeId,
        field: usize,
    },
    FieldArgument {
        type_id: TypeId,
        field: usize,
        argument: usize,
    },
    InputField {
        type_id: TypeId,
        field: usize,
    },
    Schema,
    Type(TypeId),
}
impl ElementId {
    /// The element this one is syntactically nested in, if any.
    pub fn container(&self) -> Option<ElementId> {
        match *self {
            Self::Directive(_) | Self::Schema | Self::Type(_) => None,
            Self::DirectiveArgument { directive_id, .. } =>
                Some(Self::Directive(directive_id)),
            Self::EnumValue { type_id, .. }
                | Self::Field { type_id, .. }
                | Self::InputField { type_id, .. } =>
                Some(Self::Type(type_id)),
            Self::FieldArgument { type_id, field, .. } =>
                Some(Self::Field { type_id, field }),
        }
    }

    /// The type this element is declared within (or is), if any.
    pub fn owning_type(&self) -> Option<TypeId> {
        match *self {
            Self::Directive(_) | Self::DirectiveArgument { .. } | Self::Schema => None,
            Self::EnumValue { type_id, .. }
                | Self::Field { type_id, .. }
                | Self::FieldArgument { type_id, .. }
                | Self::InputField { type_id, .. }
                | Self::Type(type_id) => Some(type_id),
        }
    }
}

/// Identifies one directive usage: the `index`-th directive applied to
/// `owner`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveUsageId {
    pub index: usize,
    pub owner: ElementId,
}
