pub use graphql_parser::Pos;

pub type Directive = graphql_parser::query::Directive<'static, String>;
pub type Number = graphql_parser::query::Number;
pub type Type = graphql_parser::query::Type<'static, String>;
pub type Value = graphql_parser::query::Value<'static, String>;

pub mod query {
    pub use graphql_parser::query::ParseError;

    pub type Definition = graphql_parser::query::Definition<'static, String>;
    pub type Document = graphql_parser::query::Document<'static, String>;
    pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;

    pub fn parse(content: &str) -> Result<Document, ParseError> {
        Ok(graphql_parser::query::parse_query::<String>(content)?.into_static())
    }
}

pub mod schema {
    pub use graphql_parser::schema::DirectiveLocation;
    pub use graphql_parser::schema::ParseError;

    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type DirectiveDefinition = graphql_parser::schema::DirectiveDefinition<'static, String>;
    pub type Document = graphql_parser::schema::Document<'static, String>;
    pub type EnumType = graphql_parser::schema::EnumType<'static, String>;
    pub type EnumTypeExtension = graphql_parser::schema::EnumTypeExtension<'static, String>;
    pub type EnumValue = graphql_parser::schema::EnumValue<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InputObjectType = graphql_parser::schema::InputObjectType<'static, String>;
    pub type InputObjectTypeExtension = graphql_parser::schema::InputObjectTypeExtension<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type InterfaceType = graphql_parser::schema::InterfaceType<'static, String>;
    pub type InterfaceTypeExtension = graphql_parser::schema::InterfaceTypeExtension<'static, String>;
    pub type ObjectType = graphql_parser::schema::ObjectType<'static, String>;
    pub type ObjectTypeExtension = graphql_parser::schema::ObjectTypeExtension<'static, String>;
    pub type ScalarType = graphql_parser::schema::ScalarType<'static, String>;
    pub type ScalarTypeExtension = graphql_parser::schema::ScalarTypeExtension<'static, String>;
    pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
    pub type UnionType = graphql_parser::schema::UnionType<'static, String>;
    pub type UnionTypeExtension = graphql_parser::schema::UnionTypeExtension<'static, String>;

    pub fn parse(content: &str) -> Result<Document, ParseError> {
        Ok(graphql_parser::schema::parse_schema::<String>(content)?.into_static())
    }
}

/// An `extend schema` declaration.
///
/// `graphql_parser` has no syntax node for schema extensions, so callers that
/// need one construct it directly and hand it to
/// [`SchemaBuilder::add`](crate::schema::SchemaBuilder::add).
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaExtension {
    pub directives: Vec<Directive>,
    pub mutation: Option<String>,
    pub position: Pos,
    pub query: Option<String>,
    pub subscription: Option<String>,
}

/// One top-level declaration accepted by the
/// [`SchemaBuilder`](crate::schema::SchemaBuilder).
///
/// Executable definitions (operations and fragments) are representable so
/// that mixed documents can be handed over as-is, but they are rejected as a
/// fatal error when a build runs.
#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    DirectiveDefinition(schema::DirectiveDefinition),
    ExecutableDefinition(query::Definition),
    SchemaDefinition(schema::SchemaDefinition),
    SchemaExtension(SchemaExtension),
    TypeDefinition(schema::TypeDefinition),
    TypeExtension(schema::TypeExtension),
}
impl Declaration {
    pub fn position(&self) -> Pos {
        match self {
            Self::DirectiveDefinition(def) => def.position,
            Self::ExecutableDefinition(def) => executable_definition_position(def),
            Self::SchemaDefinition(def) => def.position,
            Self::SchemaExtension(ext) => ext.position,
            Self::TypeDefinition(def) => type_definition_position(def),
            Self::TypeExtension(ext) => type_extension_position(ext),
        }
    }

    pub(crate) fn is_extension(&self) -> bool {
        matches!(self, Self::SchemaExtension(_) | Self::TypeExtension(_))
    }
}
impl std::convert::From<schema::Definition> for Declaration {
    fn from(def: schema::Definition) -> Self {
        match def {
            schema::Definition::DirectiveDefinition(def) =>
                Self::DirectiveDefinition(def),
            schema::Definition::SchemaDefinition(def) =>
                Self::SchemaDefinition(def),
            schema::Definition::TypeDefinition(def) =>
                Self::TypeDefinition(def),
            schema::Definition::TypeExtension(ext) =>
                Self::TypeExtension(ext),
        }
    }
}
impl std::convert::From<query::Definition> for Declaration {
    fn from(def: query::Definition) -> Self {
        Self::ExecutableDefinition(def)
    }
}
impl std::convert::From<SchemaExtension> for Declaration {
    fn from(ext: SchemaExtension) -> Self {
        Self::SchemaExtension(ext)
    }
}

pub(crate) fn executable_definition_kind(def: &query::Definition) -> &'static str {
    match def {
        query::Definition::Fragment(_) => "fragment",
        query::Definition::Operation(query::OperationDefinition::Mutation(_)) =>
            "mutation operation",
        query::Definition::Operation(query::OperationDefinition::Query(_)) =>
            "query operation",
        query::Definition::Operation(query::OperationDefinition::SelectionSet(_)) =>
            "anonymous operation",
        query::Definition::Operation(query::OperationDefinition::Subscription(_)) =>
            "subscription operation",
    }
}

fn executable_definition_position(def: &query::Definition) -> Pos {
    match def {
        query::Definition::Fragment(frag) => frag.position,
        query::Definition::Operation(query::OperationDefinition::Mutation(op)) =>
            op.position,
        query::Definition::Operation(query::OperationDefinition::Query(op)) =>
            op.position,
        query::Definition::Operation(query::OperationDefinition::SelectionSet(set)) =>
            set.span.0,
        query::Definition::Operation(query::OperationDefinition::Subscription(op)) =>
            op.position,
    }
}

fn type_definition_position(def: &schema::TypeDefinition) -> Pos {
    match def {
        schema::TypeDefinition::Enum(def) => def.position,
        schema::TypeDefinition::InputObject(def) => def.position,
        schema::TypeDefinition::Interface(def) => def.position,
        schema::TypeDefinition::Object(def) => def.position,
        schema::TypeDefinition::Scalar(def) => def.position,
        schema::TypeDefinition::Union(def) => def.position,
    }
}

fn type_extension_position(ext: &schema::TypeExtension) -> Pos {
    match ext {
        schema::TypeExtension::Enum(ext) => ext.position,
        schema::TypeExtension::InputObject(ext) => ext.position,
        schema::TypeExtension::Interface(ext) => ext.position,
        schema::TypeExtension::Object(ext) => ext.position,
        schema::TypeExtension::Scalar(ext) => ext.position,
        schema::TypeExtension::Union(ext) => ext.position,
    }
}
