use crate::ast;
use crate::directives::DirectiveDefinition;
use crate::directives::DirectiveLocation;
use crate::directives::DirectiveLocations;
use crate::directives::DirectiveUsage;
use crate::loc;
use crate::passes::SchemaGraph;
use crate::schema::Diagnostics;
use crate::schema::ElementPath;
use crate::schema::OperationKind;
use crate::schema::OperationTypeBinding;
use crate::schema::PathSegment;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaDefinition;
use crate::schema::SourcedDeclaration;
use crate::schema::ValidationErrorKind;
use crate::types::EnumType;
use crate::types::EnumValueDefinition;
use crate::types::FieldDefinition;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InputValueDefinition;
use crate::types::NamedTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::TypeDefinition;
use crate::types::TypeDefinitionKind;
use crate::types::TypeNode;
use crate::types::UnionType;
use crate::Value;
use indexmap::IndexMap;

/// Instantiates one semantic node per buffered declaration.
///
/// All base declarations are converted before any extension is merged, so an
/// extension may appear earlier in the buffer than the type it extends.
/// Executable definitions abort the whole build before anything is
/// converted.
pub(crate) fn convert<'d>(
    graph: &mut SchemaGraph,
    declarations: impl Iterator<Item = &'d SourcedDeclaration>,
    diagnostics: &mut Diagnostics,
) -> Result<(), SchemaBuildError> {
    let declarations: Vec<&SourcedDeclaration> = declarations.collect();
    for sourced in declarations.iter() {
        if let ast::Declaration::ExecutableDefinition(def) = &sourced.declaration {
            return Err(SchemaBuildError::ExecutableDefinitionInSchema {
                definition_kind: ast::executable_definition_kind(def),
                location: sourced.location(sourced.declaration.position()),
            });
        }
    }

    let errors_before = diagnostics.len();
    let mut converter = Converter { diagnostics };
    let (extensions, definitions): (Vec<_>, Vec<_>) = declarations.into_iter()
        .partition(|sourced| sourced.declaration.is_extension());

    for sourced in definitions.iter() {
        converter.visit_definition(graph, sourced);
    }
    for sourced in extensions.iter() {
        converter.visit_extension(graph, sourced);
    }

    log::debug!(
        "Converted {} definitions and {} extensions ({} errors).",
        definitions.len(),
        extensions.len(),
        converter.diagnostics.len() - errors_before,
    );
    Ok(())
}

/// The parts of an object or interface extension that get merged.
struct ObjectLikeExtension<'e> {
    directives: &'e [ast::Directive],
    fields: &'e [ast::schema::Field],
    implements: &'e [String],
    name: &'e str,
}

struct Converter<'a> {
    diagnostics: &'a mut Diagnostics,
}
impl Converter<'_> {
    fn visit_definition(&mut self, graph: &mut SchemaGraph, sourced: &SourcedDeclaration) {
        match &sourced.declaration {
            ast::Declaration::DirectiveDefinition(def) =>
                self.visit_directive_def(graph, sourced, def),
            ast::Declaration::SchemaDefinition(def) =>
                self.visit_schema_def(graph, sourced, def),
            ast::Declaration::TypeDefinition(def) =>
                self.visit_type_def(graph, sourced, def),
            ast::Declaration::ExecutableDefinition(_)
                | ast::Declaration::SchemaExtension(_)
                | ast::Declaration::TypeExtension(_) => (),
        }
    }

    fn visit_extension(&mut self, graph: &mut SchemaGraph, sourced: &SourcedDeclaration) {
        match &sourced.declaration {
            ast::Declaration::SchemaExtension(ext) =>
                self.merge_schema_extension(graph, sourced, ext),
            ast::Declaration::TypeExtension(ext) =>
                self.merge_type_extension(graph, sourced, ext),
            ast::Declaration::DirectiveDefinition(_)
                | ast::Declaration::ExecutableDefinition(_)
                | ast::Declaration::SchemaDefinition(_)
                | ast::Declaration::TypeDefinition(_) => (),
        }
    }

    fn visit_directive_def(
        &mut self,
        graph: &mut SchemaGraph,
        sourced: &SourcedDeclaration,
        def: &ast::schema::DirectiveDefinition,
    ) {
        let location = sourced.location(def.position);
        let directive_path = ElementPath::new(vec![
            PathSegment::Directive(def.name.to_string()),
        ]);

        if graph.directives.contains_key(def.name.as_str()) {
            self.diagnostics.report(
                ValidationErrorKind::DuplicateDirectiveDefinition {
                    directive_name: def.name.to_string(),
                },
                &location,
                directive_path,
            );
            return;
        }

        let mut locations = DirectiveLocations::default();
        for ast_loc in def.locations.iter() {
            let dir_loc = DirectiveLocation::from_ast(ast_loc);
            if !locations.insert(dir_loc) {
                self.report_duplicate(
                    "Directive location",
                    dir_loc.name(),
                    &directive_path,
                    &location,
                );
            }
        }

        let arguments = self.convert_input_values(
            sourced,
            &directive_path,
            "Argument",
            PathSegment::Argument,
            &def.arguments,
        );

        graph.directives.insert(def.name.to_string(), DirectiveDefinition {
            arguments,
            built_in: sourced.built_in,
            description: def.description.clone(),
            location,
            locations,
            name: def.name.to_string(),
            references: vec![],
            repeatable: def.repeatable,
        });
    }

    fn visit_schema_def(
        &mut self,
        graph: &mut SchemaGraph,
        sourced: &SourcedDeclaration,
        def: &ast::schema::SchemaDefinition,
    ) {
        let location = sourced.location(def.position);
        let schema_path = ElementPath::new(vec![PathSegment::Schema]);

        if graph.schema_def.is_some() {
            self.diagnostics.report(
                ValidationErrorKind::DuplicateSchemaDefinition,
                &location,
                schema_path,
            );
            return;
        }

        graph.schema_def = Some(SchemaDefinition {
            directives: self.convert_directives(sourced, &schema_path, &def.directives),
            operations: operation_bindings(
                &location,
                &def.query,
                &def.mutation,
                &def.subscription,
            ),
            location,
        });
    }

    fn visit_type_def(
        &mut self,
        graph: &mut SchemaGraph,
        sourced: &SourcedDeclaration,
        def: &ast::schema::TypeDefinition,
    ) {
        let (type_name, position, type_kind) = type_definition_header(def);
        let location = sourced.location(position);
        let type_path = type_path(type_kind, type_name);

        if graph.types.contains_key(type_name) {
            self.diagnostics.report(
                ValidationErrorKind::DuplicateTypeDefinition {
                    type_name: type_name.to_string(),
                },
                &location,
                type_path,
            );
            return;
        }

        let (description, directives, kind) = match def {
            ast::schema::TypeDefinition::Enum(def) => (
                def.description.clone(),
                self.convert_directives(sourced, &type_path, &def.directives),
                TypeDefinitionKind::Enum(EnumType {
                    values: self.convert_enum_values(sourced, &type_path, &def.values),
                }),
            ),

            ast::schema::TypeDefinition::InputObject(def) => (
                def.description.clone(),
                self.convert_directives(sourced, &type_path, &def.directives),
                TypeDefinitionKind::InputObject(InputObjectType {
                    fields: self.convert_input_values(
                        sourced,
                        &type_path,
                        "Input field",
                        PathSegment::InputField,
                        &def.fields,
                    ),
                }),
            ),

            ast::schema::TypeDefinition::Interface(def) => (
                def.description.clone(),
                self.convert_directives(sourced, &type_path, &def.directives),
                TypeDefinitionKind::Interface(ObjectOrInterfaceTypeData {
                    fields: self.convert_fields(sourced, &type_path, &def.fields),
                    implements: self.convert_type_refs(
                        &location,
                        &type_path,
                        "Implemented interface",
                        &def.implements_interfaces,
                    ),
                }),
            ),

            ast::schema::TypeDefinition::Object(def) => (
                def.description.clone(),
                self.convert_directives(sourced, &type_path, &def.directives),
                TypeDefinitionKind::Object(ObjectOrInterfaceTypeData {
                    fields: self.convert_fields(sourced, &type_path, &def.fields),
                    implements: self.convert_type_refs(
                        &location,
                        &type_path,
                        "Implemented interface",
                        &def.implements_interfaces,
                    ),
                }),
            ),

            ast::schema::TypeDefinition::Scalar(def) => (
                def.description.clone(),
                self.convert_directives(sourced, &type_path, &def.directives),
                TypeDefinitionKind::Scalar,
            ),

            ast::schema::TypeDefinition::Union(def) => (
                def.description.clone(),
                self.convert_directives(sourced, &type_path, &def.directives),
                TypeDefinitionKind::Union(UnionType {
                    members: self.convert_type_refs(
                        &location,
                        &type_path,
                        "Member type",
                        &def.types,
                    ),
                }),
            ),
        };

        graph.types.insert(
            type_name.to_string(),
            TypeDefinition::new(type_name, location, description, directives, kind),
        );
    }

    fn merge_schema_extension(
        &mut self,
        graph: &mut SchemaGraph,
        sourced: &SourcedDeclaration,
        ext: &ast::SchemaExtension,
    ) {
        let location = sourced.location(ext.position);
        let schema_path = ElementPath::new(vec![PathSegment::Schema]);

        if graph.schema_def.is_none() {
            self.diagnostics.report(
                ValidationErrorKind::SchemaExtensionWithoutSchema,
                &location,
                schema_path,
            );
            return;
        }

        let directives = self.convert_directives(sourced, &schema_path, &ext.directives);
        let operations = operation_bindings(
            &location,
            &ext.query,
            &ext.mutation,
            &ext.subscription,
        );
        if directives.is_empty() && operations.is_empty() {
            self.diagnostics.report(
                ValidationErrorKind::EmptyExtension {
                    element: schema_path.to_string(),
                },
                &location,
                schema_path,
            );
            return;
        }

        log::trace!("Merging schema extension from {location}.");
        if let Some(schema_def) = graph.schema_def.as_mut() {
            schema_def.directives.extend(directives);
            schema_def.operations.extend(operations);
        }
    }

    fn merge_type_extension(
        &mut self,
        graph: &mut SchemaGraph,
        sourced: &SourcedDeclaration,
        ext: &ast::schema::TypeExtension,
    ) {
        let (type_name, position, extension_kind) = type_extension_header(ext);
        let location = sourced.location(position);
        let type_path = type_path(extension_kind, type_name);

        let actual_kind = match graph.types.get(type_name) {
            Some(type_def) => type_def.type_kind(),
            None => {
                self.diagnostics.report(
                    ValidationErrorKind::ExtensionOfUndefinedType {
                        extension_kind,
                        type_name: type_name.to_string(),
                    },
                    &location,
                    type_path,
                );
                return;
            },
        };

        if actual_kind != extension_kind {
            self.diagnostics.report(
                ValidationErrorKind::ExtensionKindMismatch {
                    actual_kind,
                    extension_kind,
                    type_name: type_name.to_string(),
                },
                &location,
                type_path,
            );
            return;
        }

        if type_extension_is_empty(ext) {
            self.diagnostics.report(
                ValidationErrorKind::EmptyExtension {
                    element: type_path.to_string(),
                },
                &location,
                type_path,
            );
            return;
        }

        log::trace!("Merging extension of {type_path} from {location}.");
        match ext {
            ast::schema::TypeExtension::Enum(ext) =>
                self.merge_enum_extension(graph, sourced, &type_path, ext),

            ast::schema::TypeExtension::InputObject(ext) =>
                self.merge_input_object_extension(graph, sourced, &type_path, ext),

            ast::schema::TypeExtension::Interface(ext) =>
                self.merge_object_like_extension(graph, sourced, &type_path, &location, ObjectLikeExtension {
                    directives: &ext.directives,
                    fields: &ext.fields,
                    implements: &ext.implements_interfaces,
                    name: &ext.name,
                }),

            ast::schema::TypeExtension::Object(ext) =>
                self.merge_object_like_extension(graph, sourced, &type_path, &location, ObjectLikeExtension {
                    directives: &ext.directives,
                    fields: &ext.fields,
                    implements: &ext.implements_interfaces,
                    name: &ext.name,
                }),

            ast::schema::TypeExtension::Scalar(ext) => {
                let directives = self.convert_directives(sourced, &type_path, &ext.directives);
                if let Some(type_def) = graph.types.get_mut(ext.name.as_str()) {
                    type_def.directives.extend(directives);
                }
            },

            ast::schema::TypeExtension::Union(ext) => {
                let directives = self.convert_directives(sourced, &type_path, &ext.directives);
                let Some(type_def) = graph.types.get_mut(ext.name.as_str()) else {
                    return;
                };
                type_def.directives.extend(directives);
                if let TypeDefinitionKind::Union(union_type) = &mut type_def.kind {
                    for member_name in ext.types.iter() {
                        if union_type.members.contains_key(member_name.as_str()) {
                            self.report_duplicate("Member type", member_name, &type_path, &location);
                        } else {
                            union_type.members.insert(
                                member_name.to_string(),
                                NamedTypeRef::new(member_name, location.clone()),
                            );
                        }
                    }
                }
            },
        }
    }

    fn merge_enum_extension(
        &mut self,
        graph: &mut SchemaGraph,
        sourced: &SourcedDeclaration,
        type_path: &ElementPath,
        ext: &ast::schema::EnumTypeExtension,
    ) {
        let directives = self.convert_directives(sourced, type_path, &ext.directives);
        let ext_values = self.convert_enum_values(sourced, type_path, &ext.values);
        let Some(type_def) = graph.types.get_mut(ext.name.as_str()) else {
            return;
        };
        type_def.directives.extend(directives);

        if let TypeDefinitionKind::Enum(enum_type) = &mut type_def.kind {
            for (value_name, value_def) in ext_values {
                if enum_type.values.contains_key(value_name.as_str()) {
                    self.report_duplicate("Enum value", &value_name, type_path, &value_def.location);
                } else {
                    enum_type.values.insert(value_name, value_def);
                }
            }
        }
    }

    fn merge_input_object_extension(
        &mut self,
        graph: &mut SchemaGraph,
        sourced: &SourcedDeclaration,
        type_path: &ElementPath,
        ext: &ast::schema::InputObjectTypeExtension,
    ) {
        let directives = self.convert_directives(sourced, type_path, &ext.directives);
        let ext_fields = self.convert_input_values(
            sourced,
            type_path,
            "Input field",
            PathSegment::InputField,
            &ext.fields,
        );
        let Some(type_def) = graph.types.get_mut(ext.name.as_str()) else {
            return;
        };
        type_def.directives.extend(directives);

        if let TypeDefinitionKind::InputObject(input_obj) = &mut type_def.kind {
            for (field_name, ext_field) in ext_fields {
                if let Some(existing) = input_obj.fields.get_mut(field_name.as_str()) {
                    let field_path = type_path.with(PathSegment::InputField(field_name));
                    self.merge_input_value(&field_path, existing, ext_field);
                } else {
                    input_obj.fields.insert(field_name, ext_field);
                }
            }
        }
    }

    fn merge_object_like_extension(
        &mut self,
        graph: &mut SchemaGraph,
        sourced: &SourcedDeclaration,
        type_path: &ElementPath,
        location: &loc::SourceLocation,
        ext: ObjectLikeExtension<'_>,
    ) {
        let directives = self.convert_directives(sourced, type_path, ext.directives);
        let ext_implements = self.convert_type_refs(
            location,
            type_path,
            "Implemented interface",
            ext.implements,
        );
        let ext_fields = self.convert_fields(sourced, type_path, ext.fields);
        let Some(type_def) = graph.types.get_mut(ext.name) else {
            return;
        };
        type_def.directives.extend(directives);
        let Some(data) = type_def.as_object_or_interface_mut() else {
            return;
        };

        for (iface_name, iface_ref) in ext_implements {
            if data.implements.contains_key(iface_name.as_str()) {
                self.report_duplicate("Implemented interface", &iface_name, type_path, location);
            } else {
                data.implements.insert(iface_name, iface_ref);
            }
        }

        for (field_name, ext_field) in ext_fields {
            if let Some(existing) = data.fields.get_mut(field_name.as_str()) {
                self.merge_field(type_path, existing, ext_field);
            } else {
                data.fields.insert(field_name, ext_field);
            }
        }
    }

    /// Merges a field redeclared by an extension into the existing one. The
    /// redeclaration must keep the field's type and add at least one
    /// directive or argument, or a directive on an existing argument.
    fn merge_field(
        &mut self,
        type_path: &ElementPath,
        existing: &mut FieldDefinition,
        ext_field: FieldDefinition,
    ) {
        let field_path = type_path.with(PathSegment::Field(ext_field.name.to_string()));
        if !existing.type_node.is_equivalent_to(&ext_field.type_node) {
            self.diagnostics.report(
                ValidationErrorKind::ExtensionChangesType {
                    element: field_path.to_string(),
                    existing_type: existing.type_node.to_string(),
                    new_type: ext_field.type_node.to_string(),
                },
                &ext_field.location,
                field_path,
            );
            return;
        }

        let mut changed = !ext_field.directives.is_empty();
        existing.directives.extend(ext_field.directives);

        for (arg_name, ext_arg) in ext_field.arguments {
            if let Some(existing_arg) = existing.arguments.get_mut(arg_name.as_str()) {
                if !existing_arg.type_node.is_equivalent_to(&ext_arg.type_node) {
                    let arg_path = field_path.with(PathSegment::Argument(arg_name));
                    self.diagnostics.report(
                        ValidationErrorKind::ExtensionChangesType {
                            element: arg_path.to_string(),
                            existing_type: existing_arg.type_node.to_string(),
                            new_type: ext_arg.type_node.to_string(),
                        },
                        &ext_arg.location,
                        arg_path,
                    );
                } else if !ext_arg.directives.is_empty() {
                    existing_arg.directives.extend(ext_arg.directives);
                    changed = true;
                }
            } else {
                existing.arguments.insert(arg_name, ext_arg);
                changed = true;
            }
        }

        if !changed {
            self.diagnostics.report(
                ValidationErrorKind::EmptyExtension {
                    element: field_path.to_string(),
                },
                &ext_field.location,
                field_path,
            );
        }
    }

    /// Merges an input field redeclared by an extension. Only new directives
    /// count as a change.
    fn merge_input_value(
        &mut self,
        field_path: &ElementPath,
        existing: &mut InputValueDefinition,
        ext_field: InputValueDefinition,
    ) {
        if !existing.type_node.is_equivalent_to(&ext_field.type_node) {
            self.diagnostics.report(
                ValidationErrorKind::ExtensionChangesType {
                    element: field_path.to_string(),
                    existing_type: existing.type_node.to_string(),
                    new_type: ext_field.type_node.to_string(),
                },
                &ext_field.location,
                field_path.clone(),
            );
            return;
        }

        if ext_field.directives.is_empty() {
            self.diagnostics.report(
                ValidationErrorKind::EmptyExtension {
                    element: field_path.to_string(),
                },
                &ext_field.location,
                field_path.clone(),
            );
            return;
        }
        existing.directives.extend(ext_field.directives);
    }

    fn convert_directives(
        &mut self,
        sourced: &SourcedDeclaration,
        owner_path: &ElementPath,
        ast_directives: &[ast::Directive],
    ) -> Vec<DirectiveUsage> {
        let mut usages = Vec::with_capacity(ast_directives.len());
        for ast_directive in ast_directives.iter() {
            let location = sourced.location(ast_directive.position);
            let mut arguments = IndexMap::new();
            for (arg_name, ast_value) in ast_directive.arguments.iter() {
                if arguments.contains_key(arg_name.as_str()) {
                    let usage_path = owner_path
                        .with(PathSegment::DirectiveUsage(ast_directive.name.to_string()))
                        .with(PathSegment::Argument(arg_name.to_string()));
                    self.diagnostics.report(
                        ValidationErrorKind::DuplicateDirectiveUsageArgument {
                            argument_name: arg_name.to_string(),
                            directive_name: ast_directive.name.to_string(),
                            element: owner_path.to_string(),
                        },
                        &location,
                        usage_path,
                    );
                    continue;
                }
                arguments.insert(arg_name.to_string(), Value::from_ast(ast_value));
            }

            usages.push(DirectiveUsage {
                arguments,
                definition: None,
                location,
                name: ast_directive.name.to_string(),
                parent: None,
            });
        }
        usages
    }

    fn convert_enum_values(
        &mut self,
        sourced: &SourcedDeclaration,
        type_path: &ElementPath,
        ast_values: &[ast::schema::EnumValue],
    ) -> IndexMap<String, EnumValueDefinition> {
        let mut values = IndexMap::new();
        for ast_value in ast_values.iter() {
            let location = sourced.location(ast_value.position);
            if values.contains_key(ast_value.name.as_str()) {
                self.report_duplicate("Enum value", &ast_value.name, type_path, &location);
                continue;
            }

            let value_path = type_path.with(PathSegment::EnumValue(ast_value.name.to_string()));
            values.insert(ast_value.name.to_string(), EnumValueDefinition {
                description: ast_value.description.clone(),
                directives: self.convert_directives(sourced, &value_path, &ast_value.directives),
                location,
                name: ast_value.name.to_string(),
                parent: None,
            });
        }
        values
    }

    fn convert_fields(
        &mut self,
        sourced: &SourcedDeclaration,
        type_path: &ElementPath,
        ast_fields: &[ast::schema::Field],
    ) -> IndexMap<String, FieldDefinition> {
        let mut fields = IndexMap::new();
        for ast_field in ast_fields.iter() {
            let location = sourced.location(ast_field.position);
            if fields.contains_key(ast_field.name.as_str()) {
                self.report_duplicate("Field", &ast_field.name, type_path, &location);
                continue;
            }

            let field_path = type_path.with(PathSegment::Field(ast_field.name.to_string()));
            fields.insert(ast_field.name.to_string(), FieldDefinition {
                arguments: self.convert_input_values(
                    sourced,
                    &field_path,
                    "Argument",
                    PathSegment::Argument,
                    &ast_field.arguments,
                ),
                description: ast_field.description.clone(),
                directives: self.convert_directives(sourced, &field_path, &ast_field.directives),
                name: ast_field.name.to_string(),
                parent: None,
                type_node: TypeNode::from_ast(&location, &ast_field.field_type),
                location,
            });
        }
        fields
    }

    /// Converts arguments (of fields or directives) and input fields.
    fn convert_input_values(
        &mut self,
        sourced: &SourcedDeclaration,
        container_path: &ElementPath,
        what: &'static str,
        segment: fn(String) -> PathSegment,
        ast_values: &[ast::schema::InputValue],
    ) -> IndexMap<String, InputValueDefinition> {
        let mut values = IndexMap::new();
        for ast_value in ast_values.iter() {
            let location = sourced.location(ast_value.position);
            if values.contains_key(ast_value.name.as_str()) {
                self.report_duplicate(what, &ast_value.name, container_path, &location);
                continue;
            }

            let value_path = container_path.with(segment(ast_value.name.to_string()));
            values.insert(ast_value.name.to_string(), InputValueDefinition {
                default_value: ast_value.default_value.as_ref().map(Value::from_ast),
                description: ast_value.description.clone(),
                directives: self.convert_directives(sourced, &value_path, &ast_value.directives),
                name: ast_value.name.to_string(),
                parent: None,
                type_node: TypeNode::from_ast(&location, &ast_value.value_type),
                location,
            });
        }
        values
    }

    /// Converts `implements` lists and union member lists. `graphql_parser`
    /// does not track positions of individual names, so every reference
    /// points at the declaration itself.
    fn convert_type_refs(
        &mut self,
        location: &loc::SourceLocation,
        type_path: &ElementPath,
        what: &'static str,
        type_names: &[String],
    ) -> IndexMap<String, NamedTypeRef> {
        let mut refs = IndexMap::new();
        for type_name in type_names.iter() {
            if refs.contains_key(type_name.as_str()) {
                self.report_duplicate(what, type_name, type_path, location);
                continue;
            }
            refs.insert(type_name.to_string(), NamedTypeRef::new(type_name, location.clone()));
        }
        refs
    }

    fn report_duplicate(
        &mut self,
        what: &'static str,
        name: &str,
        container_path: &ElementPath,
        location: &loc::SourceLocation,
    ) {
        self.diagnostics.report(
            ValidationErrorKind::DuplicateName {
                element: container_path.to_string(),
                name: name.to_string(),
                what,
            },
            location,
            container_path.clone(),
        );
    }
}

fn operation_bindings(
    location: &loc::SourceLocation,
    query: &Option<String>,
    mutation: &Option<String>,
    subscription: &Option<String>,
) -> Vec<OperationTypeBinding> {
    [
        (OperationKind::Query, query),
        (OperationKind::Mutation, mutation),
        (OperationKind::Subscription, subscription),
    ].into_iter().filter_map(|(kind, type_name)| {
        type_name.as_ref().map(|type_name| OperationTypeBinding {
            kind,
            type_ref: NamedTypeRef::new(type_name, location.clone()),
        })
    }).collect()
}

fn type_definition_header(def: &ast::schema::TypeDefinition) -> (&str, ast::Pos, GraphQLTypeKind) {
    match def {
        ast::schema::TypeDefinition::Enum(def) =>
            (def.name.as_str(), def.position, GraphQLTypeKind::Enum),
        ast::schema::TypeDefinition::InputObject(def) =>
            (def.name.as_str(), def.position, GraphQLTypeKind::InputObject),
        ast::schema::TypeDefinition::Interface(def) =>
            (def.name.as_str(), def.position, GraphQLTypeKind::Interface),
        ast::schema::TypeDefinition::Object(def) =>
            (def.name.as_str(), def.position, GraphQLTypeKind::Object),
        ast::schema::TypeDefinition::Scalar(def) =>
            (def.name.as_str(), def.position, GraphQLTypeKind::Scalar),
        ast::schema::TypeDefinition::Union(def) =>
            (def.name.as_str(), def.position, GraphQLTypeKind::Union),
    }
}

fn type_extension_header(ext: &ast::schema::TypeExtension) -> (&str, ast::Pos, GraphQLTypeKind) {
    match ext {
        ast::schema::TypeExtension::Enum(ext) =>
            (ext.name.as_str(), ext.position, GraphQLTypeKind::Enum),
        ast::schema::TypeExtension::InputObject(ext) =>
            (ext.name.as_str(), ext.position, GraphQLTypeKind::InputObject),
        ast::schema::TypeExtension::Interface(ext) =>
            (ext.name.as_str(), ext.position, GraphQLTypeKind::Interface),
        ast::schema::TypeExtension::Object(ext) =>
            (ext.name.as_str(), ext.position, GraphQLTypeKind::Object),
        ast::schema::TypeExtension::Scalar(ext) =>
            (ext.name.as_str(), ext.position, GraphQLTypeKind::Scalar),
        ast::schema::TypeExtension::Union(ext) =>
            (ext.name.as_str(), ext.position, GraphQLTypeKind::Union),
    }
}

/// An extension with no syntactic content at all.
fn type_extension_is_empty(ext: &ast::schema::TypeExtension) -> bool {
    match ext {
        ast::schema::TypeExtension::Enum(ext) =>
            ext.directives.is_empty() && ext.values.is_empty(),
        ast::schema::TypeExtension::InputObject(ext) =>
            ext.directives.is_empty() && ext.fields.is_empty(),
        ast::schema::TypeExtension::Interface(ext) =>
            ext.directives.is_empty()
                && ext.fields.is_empty()
                && ext.implements_interfaces.is_empty(),
        ast::schema::TypeExtension::Object(ext) =>
            ext.directives.is_empty()
                && ext.fields.is_empty()
                && ext.implements_interfaces.is_empty(),
        ast::schema::TypeExtension::Scalar(ext) =>
            ext.directives.is_empty(),
        ast::schema::TypeExtension::Union(ext) =>
            ext.directives.is_empty() && ext.types.is_empty(),
    }
}

fn type_path(type_kind: GraphQLTypeKind, type_name: &str) -> ElementPath {
    ElementPath::new(vec![PathSegment::Type {
        kind: type_kind,
        name: type_name.to_string(),
    }])
}
