use crate::directives::DirectiveUsage;
use crate::passes::SchemaGraph;
use crate::schema::Diagnostics;
use crate::schema::ElementPath;
use crate::schema::PathSegment;
use crate::schema::ValidationErrorKind;
use crate::types::DirectiveId;
use crate::types::DirectiveUsageId;
use crate::types::ElementId;
use crate::types::InputValueDefinition;
use crate::types::NamedTypeRef;
use crate::types::TypeDefinitionKind;
use crate::types::TypeId;
use crate::types::TypeNode;
use crate::types::TypeReference;
use crate::types::TypeReferenceKind;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Resolves every by-name reference in the graph, sets `parent` back-links
/// and records reverse references on the referenced definitions.
///
/// Names that do not resolve are reported once here and left unlinked.
pub(crate) fn link(graph: &mut SchemaGraph, diagnostics: &mut Diagnostics) {
    let errors_before = diagnostics.len();
    let mut linker = Linker {
        diagnostics: &mut *diagnostics,
        directive_ids: graph.directives.keys()
            .enumerate()
            .map(|(idx, name)| (name.to_string(), DirectiveId(idx)))
            .collect(),
        directive_refs: vec![],
        type_ids: graph.types.keys()
            .enumerate()
            .map(|(idx, name)| (name.to_string(), TypeId(idx)))
            .collect(),
        type_refs: vec![],
    };

    for (idx, (type_name, type_def)) in graph.types.iter_mut().enumerate() {
        let type_id = TypeId(idx);
        let type_path = ElementPath::new(vec![PathSegment::Type {
            kind: type_def.type_kind(),
            name: type_name.to_string(),
        }]);

        linker.link_directive_usages(&mut type_def.directives, ElementId::Type(type_id), &type_path);

        match &mut type_def.kind {
            TypeDefinitionKind::Enum(enum_type) => {
                for (value_idx, value_def) in enum_type.values.values_mut().enumerate() {
                    let value_id = ElementId::EnumValue { type_id, value: value_idx };
                    let value_path = type_path.with(PathSegment::EnumValue(value_def.name.to_string()));
                    value_def.parent = Some(ElementId::Type(type_id));
                    linker.link_directive_usages(&mut value_def.directives, value_id, &value_path);
                }
            },

            TypeDefinitionKind::InputObject(input_obj) =>
                linker.link_input_values(
                    &mut input_obj.fields,
                    ElementId::Type(type_id),
                    |field| ElementId::InputField { type_id, field },
                    &type_path,
                    PathSegment::InputField,
                ),

            TypeDefinitionKind::Interface(data) | TypeDefinitionKind::Object(data) => {
                for iface_ref in data.implements.values_mut() {
                    linker.link_named_ref(
                        iface_ref,
                        TypeReferenceKind::Implements,
                        ElementId::Type(type_id),
                        |iface_name| ValidationErrorKind::UndefinedInterface {
                            element: type_path.to_string(),
                            interface_name: iface_name.to_string(),
                        },
                        &type_path,
                    );
                }

                for (field_idx, field_def) in data.fields.values_mut().enumerate() {
                    let field_id = ElementId::Field { type_id, field: field_idx };
                    let field_path = type_path.with(PathSegment::Field(field_def.name.to_string()));
                    field_def.parent = Some(ElementId::Type(type_id));
                    linker.link_directive_usages(&mut field_def.directives, field_id, &field_path);
                    linker.link_type_node(&mut field_def.type_node, field_id, &field_path);
                    linker.link_input_values(
                        &mut field_def.arguments,
                        field_id,
                        |argument| ElementId::FieldArgument {
                            type_id,
                            field: field_idx,
                            argument,
                        },
                        &field_path,
                        PathSegment::Argument,
                    );
                }
            },

            TypeDefinitionKind::Scalar => (),

            TypeDefinitionKind::Union(union_type) => {
                for member_ref in union_type.members.values_mut() {
                    linker.link_named_ref(
                        member_ref,
                        TypeReferenceKind::UnionMember,
                        ElementId::Type(type_id),
                        |member_name| ValidationErrorKind::UndefinedUnionMember {
                            type_name: member_name.to_string(),
                            union_name: type_name.to_string(),
                        },
                        &type_path,
                    );
                }
            },
        }
    }

    for (idx, directive_def) in graph.directives.values_mut().enumerate() {
        let directive_id = DirectiveId(idx);
        let directive_path = ElementPath::new(vec![
            PathSegment::Directive(directive_def.name.to_string()),
        ]);
        linker.link_input_values(
            &mut directive_def.arguments,
            ElementId::Directive(directive_id),
            |argument| ElementId::DirectiveArgument { directive_id, argument },
            &directive_path,
            PathSegment::Argument,
        );
    }

    if let Some(schema_def) = graph.schema_def.as_mut() {
        let schema_path = ElementPath::new(vec![PathSegment::Schema]);
        linker.link_directive_usages(&mut schema_def.directives, ElementId::Schema, &schema_path);
        for binding in schema_def.operations.iter_mut() {
            let operation = binding.kind;
            linker.link_named_ref(
                &mut binding.type_ref,
                TypeReferenceKind::OperationType(operation),
                ElementId::Schema,
                |type_name| ValidationErrorKind::UndefinedOperationType {
                    operation,
                    type_name: type_name.to_string(),
                },
                &schema_path.with(PathSegment::Operation(operation)),
            );
        }
    }

    let type_ref_count = linker.type_refs.len();
    let directive_ref_count = linker.directive_refs.len();
    for (type_id, type_ref) in linker.type_refs {
        if let Some((_, type_def)) = graph.types.get_index_mut(type_id.index()) {
            type_def.references.push(type_ref);
        }
    }
    for (directive_id, usage_id) in linker.directive_refs {
        if let Some((_, directive_def)) = graph.directives.get_index_mut(directive_id.index()) {
            directive_def.references.push(usage_id);
        }
    }

    log::debug!(
        "Linked {type_ref_count} type references and {directive_ref_count} directive \
        references ({} errors).",
        diagnostics.len() - errors_before,
    );
}

struct Linker<'a> {
    diagnostics: &'a mut Diagnostics,
    directive_ids: HashMap<String, DirectiveId>,
    directive_refs: Vec<(DirectiveId, DirectiveUsageId)>,
    type_ids: HashMap<String, TypeId>,
    type_refs: Vec<(TypeId, TypeReference)>,
}
impl Linker<'_> {
    fn link_directive_usages(
        &mut self,
        usages: &mut [DirectiveUsage],
        owner: ElementId,
        owner_path: &ElementPath,
    ) {
        for (index, usage) in usages.iter_mut().enumerate() {
            usage.parent = Some(owner);
            match self.directive_ids.get(usage.name.as_str()) {
                Some(directive_id) => {
                    usage.definition = Some(*directive_id);
                    self.directive_refs.push((*directive_id, DirectiveUsageId { index, owner }));
                },
                None => self.diagnostics.report(
                    ValidationErrorKind::UndefinedDirective {
                        directive_name: usage.name.to_string(),
                        element: owner_path.to_string(),
                    },
                    &usage.location,
                    owner_path.with(PathSegment::DirectiveUsage(usage.name.to_string())),
                ),
            }
        }
    }

    fn link_input_values(
        &mut self,
        values: &mut IndexMap<String, InputValueDefinition>,
        parent: ElementId,
        value_id: impl Fn(usize) -> ElementId,
        container_path: &ElementPath,
        segment: fn(String) -> PathSegment,
    ) {
        for (idx, value_def) in values.values_mut().enumerate() {
            let element_id = value_id(idx);
            let value_path = container_path.with(segment(value_def.name.to_string()));
            value_def.parent = Some(parent);
            self.link_directive_usages(&mut value_def.directives, element_id, &value_path);
            self.link_type_node(&mut value_def.type_node, element_id, &value_path);
        }
    }

    fn link_named_ref(
        &mut self,
        named_ref: &mut NamedTypeRef,
        kind: TypeReferenceKind,
        site: ElementId,
        undefined_error: impl FnOnce(&str) -> ValidationErrorKind,
        site_path: &ElementPath,
    ) {
        match self.type_ids.get(named_ref.name.as_str()) {
            Some(type_id) => {
                named_ref.target = Some(*type_id);
                self.type_refs.push((*type_id, TypeReference { kind, site }));
            },
            None => self.diagnostics.report(
                undefined_error(named_ref.name.as_str()),
                &named_ref.ref_location,
                site_path.clone(),
            ),
        }
    }

    fn link_type_node(
        &mut self,
        type_node: &mut TypeNode,
        site: ElementId,
        site_path: &ElementPath,
    ) {
        self.link_named_ref(
            type_node.innermost_named_mut(),
            TypeReferenceKind::Annotation,
            site,
            |type_name| ValidationErrorKind::UndefinedType {
                element: site_path.to_string(),
                type_name: type_name.to_string(),
            },
            site_path,
        );
    }
}
