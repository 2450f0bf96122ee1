use crate::ast;

/// A place in a GraphQL document where a directive may be applied.
///
/// See the
/// [relevant section of the GraphQL spec](https://spec.graphql.org/October2021/#DirectiveLocations).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum DirectiveLocation {
    // Executable locations
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    Mutation,
    Query,
    Subscription,
    VariableDefinition,

    // Type-system locations
    ArgumentDefinition,
    Enum,
    EnumValue,
    FieldDefinition,
    InputFieldDefinition,
    InputObject,
    Interface,
    Object,
    Scalar,
    Schema,
    Union,
}
impl DirectiveLocation {
    pub const ALL: [DirectiveLocation; 19] = [
        Self::Field,
        Self::FragmentDefinition,
        Self::FragmentSpread,
        Self::InlineFragment,
        Self::Mutation,
        Self::Query,
        Self::Subscription,
        Self::VariableDefinition,
        Self::ArgumentDefinition,
        Self::Enum,
        Self::EnumValue,
        Self::FieldDefinition,
        Self::InputFieldDefinition,
        Self::InputObject,
        Self::Interface,
        Self::Object,
        Self::Scalar,
        Self::Schema,
        Self::Union,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|loc| loc.name() == name)
    }

    /// The location as spelled in SDL (e.g. `INPUT_FIELD_DEFINITION`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::Field => "FIELD",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::Mutation => "MUTATION",
            Self::Object => "OBJECT",
            Self::Query => "QUERY",
            Self::Scalar => "SCALAR",
            Self::Schema => "SCHEMA",
            Self::Subscription => "SUBSCRIPTION",
            Self::Union => "UNION",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
        }
    }

    pub(crate) fn from_ast(ast_loc: &ast::schema::DirectiveLocation) -> Self {
        use crate::ast::schema::DirectiveLocation as Gp;
        match ast_loc {
            Gp::ArgumentDefinition => Self::ArgumentDefinition,
            Gp::Enum => Self::Enum,
            Gp::EnumValue => Self::EnumValue,
            Gp::Field => Self::Field,
            Gp::FieldDefinition => Self::FieldDefinition,
            Gp::FragmentDefinition => Self::FragmentDefinition,
            Gp::FragmentSpread => Self::FragmentSpread,
            Gp::InlineFragment => Self::InlineFragment,
            Gp::InputFieldDefinition => Self::InputFieldDefinition,
            Gp::InputObject => Self::InputObject,
            Gp::Interface => Self::Interface,
            Gp::Mutation => Self::Mutation,
            Gp::Object => Self::Object,
            Gp::Query => Self::Query,
            Gp::Scalar => Self::Scalar,
            Gp::Schema => Self::Schema,
            Gp::Subscription => Self::Subscription,
            Gp::Union => Self::Union,
            Gp::VariableDefinition => Self::VariableDefinition,
        }
    }

    pub(crate) fn to_ast(self) -> ast::schema::DirectiveLocation {
        use crate::ast::schema::DirectiveLocation as Gp;
        match self {
            Self::ArgumentDefinition => Gp::ArgumentDefinition,
            Self::Enum => Gp::Enum,
            Self::EnumValue => Gp::EnumValue,
            Self::Field => Gp::Field,
            Self::FieldDefinition => Gp::FieldDefinition,
            Self::FragmentDefinition => Gp::FragmentDefinition,
            Self::FragmentSpread => Gp::FragmentSpread,
            Self::InlineFragment => Gp::InlineFragment,
            Self::InputFieldDefinition => Gp::InputFieldDefinition,
            Self::InputObject => Gp::InputObject,
            Self::Interface => Gp::Interface,
            Self::Mutation => Gp::Mutation,
            Self::Object => Gp::Object,
            Self::Query => Gp::Query,
            Self::Scalar => Gp::Scalar,
            Self::Schema => Gp::Schema,
            Self::Subscription => Gp::Subscription,
            Self::Union => Gp::Union,
            Self::VariableDefinition => Gp::VariableDefinition,
        }
    }

    fn bit(self) -> u32 {
        1 << (self as u32)
    }
}
impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The set of locations a directive definition permits, stored as a bitset.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveLocations(u32);
impl DirectiveLocations {
    pub fn contains(&self, location: DirectiveLocation) -> bool {
        self.0 & location.bit() != 0
    }

    /// Adds `location`, returning `false` if it was already present.
    pub fn insert(&mut self, location: DirectiveLocation) -> bool {
        let was_present = self.contains(location);
        self.0 |= location.bit();
        !was_present
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in [`DirectiveLocation::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = DirectiveLocation> + '_ {
        DirectiveLocation::ALL.into_iter().filter(|loc| self.contains(*loc))
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
}
impl std::iter::FromIterator<DirectiveLocation> for DirectiveLocations {
    fn from_iter<T: IntoIterator<Item = DirectiveLocation>>(iter: T) -> Self {
        let mut locations = Self::default();
        for location in iter {
            locations.insert(location);
        }
        locations
    }
}
