mod cycle_detector;
mod directive_usage;
mod interface_validator;

use crate::directives::DirectiveDefinition;
use crate::directives::DirectiveLocation;
use crate::loc;
use crate::passes::SchemaGraph;
use crate::schema::Diagnostics;
use crate::schema::ElementPath;
use crate::schema::PathSegment;
use crate::schema::ValidationErrorKind;
use crate::types;
use crate::types::DirectiveId;
use crate::types::ElementId;
use crate::types::GraphQLTypeKind;
use crate::types::InputValueDefinition;
use crate::types::TypeDefinition;
use crate::types::TypeDefinitionKind;
use crate::types::TypeId;

/// Checks every semantic rule over the linked graph. Nothing is modified;
/// problems are only reported.
///
/// Edges the link pass could not resolve are skipped, since they have
/// already been reported.
pub(crate) fn validate(graph: &SchemaGraph, diagnostics: &mut Diagnostics) {
    let errors_before = diagnostics.len();
    let mut validator = Validator {
        diagnostics: &mut *diagnostics,
        graph,
    };

    for (idx, type_def) in graph.types.values().enumerate() {
        if !type_def.built_in {
            validator.validate_type(TypeId(idx), type_def);
        }
    }

    for (idx, directive_def) in graph.directives.values().enumerate() {
        if !directive_def.built_in {
            validator.validate_directive_def(DirectiveId(idx), directive_def);
        }
    }

    if let Some(schema_def) = &graph.schema_def {
        validator.check_directive_usages(
            &schema_def.directives,
            DirectiveLocation::Schema,
            &ElementPath::new(vec![PathSegment::Schema]),
        );
    }

    validator.check_input_object_cycles();
    validator.check_directive_cycles();

    log::debug!(
        "Validated {} types and {} directives ({} errors).",
        graph.types.len(),
        graph.directives.len(),
        diagnostics.len() - errors_before,
    );
}

struct Validator<'a> {
    diagnostics: &'a mut Diagnostics,
    graph: &'a SchemaGraph,
}
impl Validator<'_> {
    fn validate_directive_def(
        &mut self,
        directive_id: DirectiveId,
        directive_def: &DirectiveDefinition,
    ) {
        let directive_path = self.graph.path(ElementId::Directive(directive_id));
        self.check_name(&directive_def.name, &directive_def.location, &directive_path);

        for (arg_name, arg) in directive_def.arguments.iter() {
            self.validate_input_value(
                arg,
                &directive_path.with(PathSegment::Argument(arg_name.to_string())),
                DirectiveLocation::ArgumentDefinition,
            );
        }
    }

    fn validate_type(&mut self, type_id: TypeId, type_def: &TypeDefinition) {
        let type_kind = type_def.type_kind();
        let type_path = self.graph.path(ElementId::Type(type_id));
        self.check_name(&type_def.name, &type_def.location, &type_path);
        self.check_directive_usages(
            &type_def.directives,
            type_directive_location(type_kind),
            &type_path,
        );

        match &type_def.kind {
            TypeDefinitionKind::Enum(enum_type) => {
                if enum_type.values.is_empty() {
                    self.report_empty(type_def);
                }

                for (value_name, value_def) in enum_type.values.iter() {
                    let value_path = type_path.with(PathSegment::EnumValue(value_name.to_string()));
                    self.check_name(value_name, &value_def.location, &value_path);
                    if matches!(value_name.as_str(), "true" | "false" | "null") {
                        self.diagnostics.report(
                            ValidationErrorKind::EnumValueReservedName {
                                enum_name: type_def.name.to_string(),
                                value_name: value_name.to_string(),
                            },
                            &value_def.location,
                            value_path.clone(),
                        );
                    }
                    self.check_directive_usages(
                        &value_def.directives,
                        DirectiveLocation::EnumValue,
                        &value_path,
                    );
                }
            },

            TypeDefinitionKind::InputObject(input_obj) => {
                if input_obj.fields.is_empty() {
                    self.report_empty(type_def);
                }

                for (field_name, field_def) in input_obj.fields.iter() {
                    self.validate_input_value(
                        field_def,
                        &type_path.with(PathSegment::InputField(field_name.to_string())),
                        DirectiveLocation::InputFieldDefinition,
                    );
                }
            },

            TypeDefinitionKind::Interface(data) | TypeDefinitionKind::Object(data) => {
                if data.fields.is_empty() {
                    self.report_empty(type_def);
                }

                for (field_name, field_def) in data.fields.iter() {
                    let field_path = type_path.with(PathSegment::Field(field_name.to_string()));
                    self.check_name(field_name, &field_def.location, &field_path);
                    self.check_directive_usages(
                        &field_def.directives,
                        DirectiveLocation::FieldDefinition,
                        &field_path,
                    );

                    if let Some((_, target)) = self.graph.resolve(field_def.type_node.innermost_named())
                        && !target.is_output_type() {
                        self.diagnostics.report(
                            ValidationErrorKind::NotAnOutputType {
                                element: field_path.to_string(),
                                type_kind: target.type_kind(),
                                type_name: target.name.to_string(),
                            },
                            field_def.type_node.ref_location(),
                            field_path.clone(),
                        );
                    }

                    for (arg_name, arg) in field_def.arguments.iter() {
                        self.validate_input_value(
                            arg,
                            &field_path.with(PathSegment::Argument(arg_name.to_string())),
                            DirectiveLocation::ArgumentDefinition,
                        );
                    }
                }

                // Conformance checks are meaningless without fields.
                if !data.fields.is_empty() {
                    self.check_implements(type_id, type_def, data);
                }
            },

            TypeDefinitionKind::Scalar => (),

            TypeDefinitionKind::Union(union_type) => {
                if union_type.members.is_empty() {
                    self.report_empty(type_def);
                }

                for member_ref in union_type.members.values() {
                    if let Some((_, member_def)) = self.graph.resolve(member_ref)
                        && member_def.as_object().is_none() {
                        self.diagnostics.report(
                            ValidationErrorKind::UnionMemberNotObject {
                                type_kind: member_def.type_kind(),
                                type_name: member_def.name.to_string(),
                                union_name: type_def.name.to_string(),
                            },
                            member_ref.ref_location(),
                            type_path.clone(),
                        );
                    }
                }
            },
        }
    }

    /// Shared checks for arguments and input fields.
    fn validate_input_value(
        &mut self,
        value_def: &InputValueDefinition,
        value_path: &ElementPath,
        location: DirectiveLocation,
    ) {
        self.check_name(&value_def.name, &value_def.location, value_path);
        self.check_directive_usages(&value_def.directives, location, value_path);

        let is_input_type = match self.graph.resolve(value_def.type_node.innermost_named()) {
            Some((_, target)) if !target.is_input_type() => {
                self.diagnostics.report(
                    ValidationErrorKind::NotAnInputType {
                        element: value_path.to_string(),
                        type_kind: target.type_kind(),
                        type_name: target.name.to_string(),
                    },
                    value_def.type_node.ref_location(),
                    value_path.clone(),
                );
                false
            },
            Some(_) => true,
            None => false,
        };

        if is_input_type
            && let Some(default_value) = &value_def.default_value
            && !types::is_input_type_compatible_with_value(
                &self.graph.types,
                &value_def.type_node,
                default_value,
            ) {
            self.diagnostics.report(
                ValidationErrorKind::IncompatibleDefaultValue {
                    element: value_path.to_string(),
                    expected_type: value_def.type_node.to_string(),
                    value: default_value.to_string(),
                },
                &value_def.location,
                value_path.clone(),
            );
        }

        if value_def.is_required() {
            let graph = self.graph;
            let deprecations = value_def.directives.iter().filter(|usage| {
                usage.definition
                    .and_then(|directive_id| graph.directive(directive_id))
                    .is_some_and(|directive_def| {
                        directive_def.built_in && directive_def.name == "deprecated"
                    })
            });
            for usage in deprecations {
                self.diagnostics.report(
                    ValidationErrorKind::InvalidDeprecation {
                        directive_name: usage.name.to_string(),
                        element: value_path.to_string(),
                    },
                    &usage.location,
                    value_path.with(PathSegment::DirectiveUsage(usage.name.to_string())),
                );
            }
        }
    }

    fn check_name(
        &mut self,
        name: &str,
        location: &loc::SourceLocation,
        path: &ElementPath,
    ) {
        if name.starts_with("__") {
            self.diagnostics.report(
                ValidationErrorKind::DoubleUnderscoreName {
                    element: path.to_string(),
                },
                location,
                path.clone(),
            );
        }
    }

    fn report_empty(&mut self, type_def: &TypeDefinition) {
        self.diagnostics.report(
            ValidationErrorKind::EmptyDefinition {
                type_kind: type_def.type_kind(),
                type_name: type_def.name.to_string(),
            },
            &type_def.location,
            ElementPath::new(vec![PathSegment::Type {
                kind: type_def.type_kind(),
                name: type_def.name.to_string(),
            }]),
        );
    }
}

fn type_directive_location(type_kind: GraphQLTypeKind) -> DirectiveLocation {
    match type_kind {
        GraphQLTypeKind::Enum => DirectiveLocation::Enum,
        GraphQLTypeKind::InputObject => DirectiveLocation::InputObject,
        GraphQLTypeKind::Interface => DirectiveLocation::Interface,
        GraphQLTypeKind::Object => DirectiveLocation::Object,
        GraphQLTypeKind::Scalar => DirectiveLocation::Scalar,
        GraphQLTypeKind::Union => DirectiveLocation::Union,
    }
}
