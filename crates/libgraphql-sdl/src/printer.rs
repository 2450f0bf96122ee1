use crate::ast;
use crate::directives::DirectiveDefinition;
use crate::directives::DirectiveUsage;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::types::EnumValueDefinition;
use crate::types::FieldDefinition;
use crate::types::InputValueDefinition;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::TypeDefinition;
use crate::types::TypeDefinitionKind;
use graphql_parser::schema as gp;
use indexmap::IndexMap;

impl Schema {
    /// Renders the schema back to SDL text.
    ///
    /// Built-in scalars and directives are omitted, and a `schema` block is
    /// only printed when one was declared (a synthesized root is implied by
    /// the `Query`/`Mutation`/`Subscription` type names). Extensions come out
    /// merged into the definitions they extended.
    pub fn to_sdl(&self) -> String {
        let mut definitions = vec![];

        if let Some(schema_def) = self.root().and_then(|root| root.definition()) {
            let operation_type_name = |kind| {
                self.root()
                    .and_then(|root| root.operation_type_id(kind))
                    .and_then(|type_id| self.type_def(type_id))
                    .map(|type_def| type_def.name.to_string())
            };
            definitions.push(ast::schema::Definition::SchemaDefinition(gp::SchemaDefinition {
                position: ast::Pos::default(),
                directives: directives_to_ast(&schema_def.directives),
                query: operation_type_name(OperationKind::Query),
                mutation: operation_type_name(OperationKind::Mutation),
                subscription: operation_type_name(OperationKind::Subscription),
            }));
        }

        definitions.extend(
            self.directives.values()
                .filter(|directive_def| !directive_def.built_in)
                .map(directive_def_to_ast)
                .map(ast::schema::Definition::DirectiveDefinition),
        );

        definitions.extend(
            self.types.values()
                .filter(|type_def| !type_def.built_in)
                .map(type_def_to_ast)
                .map(ast::schema::Definition::TypeDefinition),
        );

        ast::schema::Document { definitions }.to_string()
    }
}

fn directive_def_to_ast(directive_def: &DirectiveDefinition) -> ast::schema::DirectiveDefinition {
    gp::DirectiveDefinition {
        position: ast::Pos::default(),
        description: directive_def.description.clone(),
        name: directive_def.name.to_string(),
        arguments: input_values_to_ast(&directive_def.arguments),
        repeatable: directive_def.repeatable,
        locations: directive_def.locations.iter()
            .map(|location| location.to_ast())
            .collect(),
    }
}

fn directives_to_ast(usages: &[DirectiveUsage]) -> Vec<ast::Directive> {
    usages.iter().map(|usage| ast::Directive {
        position: ast::Pos::default(),
        name: usage.name.to_string(),
        arguments: usage.arguments.iter()
            .map(|(arg_name, value)| (arg_name.to_string(), value.to_ast()))
            .collect(),
    }).collect()
}

fn enum_value_to_ast(value_def: &EnumValueDefinition) -> ast::schema::EnumValue {
    gp::EnumValue {
        position: ast::Pos::default(),
        description: value_def.description.clone(),
        name: value_def.name.to_string(),
        directives: directives_to_ast(&value_def.directives),
    }
}

fn field_to_ast(field_def: &FieldDefinition) -> ast::schema::Field {
    gp::Field {
        position: ast::Pos::default(),
        description: field_def.description.clone(),
        name: field_def.name.to_string(),
        arguments: input_values_to_ast(&field_def.arguments),
        field_type: field_def.type_node.to_ast(),
        directives: directives_to_ast(&field_def.directives),
    }
}

fn fields_to_ast(data: &ObjectOrInterfaceTypeData) -> Vec<ast::schema::Field> {
    data.fields.values().map(field_to_ast).collect()
}

fn implements_to_ast(data: &ObjectOrInterfaceTypeData) -> Vec<String> {
    data.implements.keys().cloned().collect()
}

fn input_values_to_ast(
    values: &IndexMap<String, InputValueDefinition>,
) -> Vec<ast::schema::InputValue> {
    values.values().map(|value_def| gp::InputValue {
        position: ast::Pos::default(),
        description: value_def.description.clone(),
        name: value_def.name.to_string(),
        value_type: value_def.type_node.to_ast(),
        default_value: value_def.default_value.as_ref().map(|value| value.to_ast()),
        directives: directives_to_ast(&value_def.directives),
    }).collect()
}

fn type_def_to_ast(type_def: &TypeDefinition) -> ast::schema::TypeDefinition {
    let position = ast::Pos::default();
    let description = type_def.description.clone();
    let name = type_def.name.to_string();
    let directives = directives_to_ast(&type_def.directives);

    match &type_def.kind {
        TypeDefinitionKind::Enum(enum_type) => gp::TypeDefinition::Enum(gp::EnumType {
            position,
            description,
            name,
            directives,
            values: enum_type.values.values().map(enum_value_to_ast).collect(),
        }),

        TypeDefinitionKind::InputObject(input_obj) =>
            gp::TypeDefinition::InputObject(gp::InputObjectType {
                position,
                description,
                name,
                directives,
                fields: input_values_to_ast(&input_obj.fields),
            }),

        TypeDefinitionKind::Interface(data) =>
            gp::TypeDefinition::Interface(gp::InterfaceType {
                position,
                description,
                name,
                implements_interfaces: implements_to_ast(data),
                directives,
                fields: fields_to_ast(data),
            }),

        TypeDefinitionKind::Object(data) => gp::TypeDefinition::Object(gp::ObjectType {
            position,
            description,
            name,
            implements_interfaces: implements_to_ast(data),
            directives,
            fields: fields_to_ast(data),
        }),

        TypeDefinitionKind::Scalar => gp::TypeDefinition::Scalar(gp::ScalarType {
            position,
            description,
            name,
            directives,
        }),

        TypeDefinitionKind::Union(union_type) => gp::TypeDefinition::Union(gp::UnionType {
            position,
            description,
            name,
            directives,
            types: union_type.members.keys().cloned().collect(),
        }),
    }
}
