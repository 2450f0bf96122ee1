use crate::passes::SchemaGraph;
use crate::schema::Diagnostics;
use crate::schema::ElementPath;
use crate::schema::OperationKind;
use crate::schema::PathSegment;
use crate::schema::SchemaRoot;
use crate::schema::ValidationErrorKind;
use crate::types::ElementId;
use crate::types::TypeDefinitionKind;
use crate::types::TypeId;
use crate::types::TypeReference;
use crate::types::TypeReferenceKind;
use std::collections::HashSet;
use std::collections::VecDeque;

/// Determines the root operation types, either from the explicit schema
/// block or by auto-detecting `Query`, `Mutation` and `Subscription` object
/// types, then marks every type reachable from the root as rooted.
///
/// A schema without any root is only an error when `require_root` is set or
/// when a `Mutation`/`Subscription` root would be left without a `Query`.
pub(crate) fn resolve_root(
    graph: &mut SchemaGraph,
    require_root: bool,
    diagnostics: &mut Diagnostics,
) {
    let errors_before = diagnostics.len();
    let root = match graph.schema_def.is_some() {
        true => resolve_explicit_root(graph, diagnostics),
        false => detect_root(graph, require_root, diagnostics),
    };

    let Some(root) = root else {
        log::debug!(
            "Resolved no schema root ({} errors).",
            diagnostics.len() - errors_before,
        );
        return;
    };

    let rooted_count = mark_rooted(graph, &root);
    log::debug!(
        "Resolved {} schema root with {rooted_count} rooted types ({} errors).",
        if root.is_synthesized() { "synthesized" } else { "explicit" },
        diagnostics.len() - errors_before,
    );
    graph.root = Some(root);
}

fn resolve_explicit_root(
    graph: &SchemaGraph,
    diagnostics: &mut Diagnostics,
) -> Option<SchemaRoot> {
    let schema_def = graph.schema_def.as_ref()?;
    let schema_path = ElementPath::new(vec![PathSegment::Schema]);

    if schema_def.operations.is_empty() {
        diagnostics.report(
            ValidationErrorKind::SchemaWithoutOperations,
            &schema_def.location,
            schema_path,
        );
        return None;
    }

    let mut seen_kinds = HashSet::new();
    let mut bound: Vec<(OperationKind, TypeId)> = vec![];
    let mut valid = true;
    for binding in schema_def.operations.iter() {
        let operation_path = schema_path.with(PathSegment::Operation(binding.kind));
        if !seen_kinds.insert(binding.kind) {
            diagnostics.report(
                ValidationErrorKind::DuplicateOperationType {
                    operation: binding.kind,
                },
                binding.type_ref.ref_location(),
                operation_path,
            );
            valid = false;
            continue;
        }

        // Unresolved names were reported by the link pass.
        let Some((type_id, type_def)) = graph.resolve(&binding.type_ref) else {
            valid = false;
            continue;
        };

        if type_def.as_object().is_none() {
            diagnostics.report(
                ValidationErrorKind::OperationTypeNotObject {
                    operation: binding.kind,
                    type_kind: type_def.type_kind(),
                    type_name: type_def.name.to_string(),
                },
                binding.type_ref.ref_location(),
                operation_path,
            );
            valid = false;
            continue;
        }

        if let Some((first, _)) = bound.iter().find(|(_, bound_id)| *bound_id == type_id) {
            diagnostics.report(
                ValidationErrorKind::OperationTypesNotDistinct {
                    first: *first,
                    second: binding.kind,
                    type_name: type_def.name.to_string(),
                },
                binding.type_ref.ref_location(),
                operation_path,
            );
            valid = false;
            continue;
        }

        bound.push((binding.kind, type_id));
    }

    if !seen_kinds.contains(&OperationKind::Query) {
        diagnostics.report(
            ValidationErrorKind::SchemaWithoutQuery,
            &schema_def.location,
            schema_path,
        );
        return None;
    }

    if !valid {
        return None;
    }

    let operation_type_id = |kind: OperationKind| {
        bound.iter()
            .find(|(bound_kind, _)| *bound_kind == kind)
            .map(|(_, type_id)| *type_id)
    };
    Some(SchemaRoot {
        definition: Some(schema_def.clone()),
        mutation: operation_type_id(OperationKind::Mutation),
        query: operation_type_id(OperationKind::Query)?,
        subscription: operation_type_id(OperationKind::Subscription),
    })
}

fn detect_root(
    graph: &mut SchemaGraph,
    require_root: bool,
    diagnostics: &mut Diagnostics,
) -> Option<SchemaRoot> {
    let mut detected: Vec<(OperationKind, Option<TypeId>)> = vec![];
    for kind in OperationKind::ALL {
        let Some(type_id) = graph.type_id(kind.default_type_name()) else {
            continue;
        };
        let candidate = check_root_candidate(graph, kind, type_id, diagnostics);
        detected.push((kind, candidate));
    }

    let query_id = match detected.iter().find(|(kind, _)| *kind == OperationKind::Query) {
        Some((_, query_id)) => (*query_id)?,
        None => {
            if require_root || !detected.is_empty() {
                diagnostics.report_unlocated(
                    ValidationErrorKind::QueryTypeNotDefined,
                    ElementPath::new(vec![PathSegment::Schema]),
                );
            }
            return None;
        },
    };

    let mut root = SchemaRoot {
        definition: None,
        mutation: None,
        query: query_id,
        subscription: None,
    };
    for (kind, type_id) in detected {
        let Some(type_id) = type_id else {
            continue;
        };
        match kind {
            OperationKind::Mutation => root.mutation = Some(type_id),
            OperationKind::Query => (),
            OperationKind::Subscription => root.subscription = Some(type_id),
        }
        if let Some((_, type_def)) = graph.types.get_index_mut(type_id.index()) {
            log::trace!("Detected '{}' as the {kind} root type.", type_def.name);
            type_def.references.push(TypeReference {
                kind: TypeReferenceKind::OperationType(kind),
                site: ElementId::Schema,
            });
        }
    }

    Some(root)
}

/// A type named after an operation only becomes that root if it is an
/// object type that nothing else in the schema refers to. References from
/// within the type itself are allowed.
fn check_root_candidate(
    graph: &SchemaGraph,
    kind: OperationKind,
    type_id: TypeId,
    diagnostics: &mut Diagnostics,
) -> Option<TypeId> {
    let type_def = graph.type_def(type_id)?;
    let type_path = graph.path(ElementId::Type(type_id));

    if type_def.as_object().is_none() {
        diagnostics.report(
            ValidationErrorKind::OperationTypeNotObject {
                operation: kind,
                type_kind: type_def.type_kind(),
                type_name: type_def.name.to_string(),
            },
            &type_def.location,
            type_path,
        );
        return None;
    }

    let foreign_ref = type_def.references.iter()
        .find(|type_ref| type_ref.site.owning_type() != Some(type_id));
    if let Some(type_ref) = foreign_ref {
        diagnostics.report(
            ValidationErrorKind::RootTypeReferenced {
                operation: kind,
                referenced_by: graph.path(type_ref.site).to_string(),
                type_name: type_def.name.to_string(),
            },
            &type_def.location,
            type_path,
        );
        return None;
    }

    Some(type_id)
}

/// Flags every type reachable from a root operation type through field,
/// argument and input field types or union members. Returns how many types
/// were flagged.
fn mark_rooted(graph: &mut SchemaGraph, root: &SchemaRoot) -> usize {
    let mut visited = HashSet::new();
    let mut queue: VecDeque<TypeId> = OperationKind::ALL.iter()
        .filter_map(|kind| root.operation_type_id(*kind))
        .collect();

    while let Some(type_id) = queue.pop_front() {
        if !visited.insert(type_id) {
            continue;
        }
        let Some(type_def) = graph.type_def(type_id) else {
            continue;
        };

        match &type_def.kind {
            TypeDefinitionKind::Enum(_) | TypeDefinitionKind::Scalar => (),

            TypeDefinitionKind::InputObject(input_obj) => queue.extend(
                input_obj.fields.values()
                    .filter_map(|field_def| field_def.type_node.innermost_named().target),
            ),

            TypeDefinitionKind::Interface(data) | TypeDefinitionKind::Object(data) => {
                for field_def in data.fields.values() {
                    queue.extend(field_def.type_node.innermost_named().target);
                    queue.extend(
                        field_def.arguments.values()
                            .filter_map(|arg| arg.type_node.innermost_named().target),
                    );
                }
            },

            TypeDefinitionKind::Union(union_type) => queue.extend(
                union_type.members.values().filter_map(|member_ref| member_ref.target),
            ),
        }
    }

    for type_id in visited.iter() {
        if let Some((_, type_def)) = graph.types.get_index_mut(type_id.index()) {
            type_def.rooted = true;
        }
    }
    visited.len()
}
