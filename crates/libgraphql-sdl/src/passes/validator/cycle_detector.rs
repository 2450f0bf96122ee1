use crate::directives::DirectiveDefinition;
use crate::directives::DirectiveUsage;
use crate::passes::validator::Validator;
use crate::passes::SchemaGraph;
use crate::schema::ValidationErrorKind;
use crate::types::DirectiveId;
use crate::types::ElementId;
use crate::types::InputValueDefinition;
use crate::types::TypeDefinitionKind;
use crate::types::TypeId;
use crate::types::TypeNode;
use std::collections::HashSet;
use std::collections::VecDeque;

impl Validator<'_> {
    /// Reports each input object that can reach itself through fields typed
    /// directly as a non-null input object.
    ///
    /// The walk restarts from every input object so that each member of a
    /// cycle gets its own diagnostic.
    pub(super) fn check_input_object_cycles(&mut self) {
        let graph = self.graph;
        for (idx, type_def) in graph.types.values().enumerate() {
            if type_def.built_in || type_def.as_input_object().is_none() {
                continue;
            }

            let type_id = TypeId(idx);
            if requires_itself(graph, type_id) {
                self.diagnostics.report(
                    ValidationErrorKind::CircularInputObjectReference {
                        type_name: type_def.name.to_string(),
                    },
                    &type_def.location,
                    graph.path(ElementId::Type(type_id)),
                );
            }
        }
    }

    /// Reports each directive whose argument closure leads back to the
    /// directive itself.
    ///
    /// The closure follows argument types and directive usages: from a
    /// directive into its arguments' types and the directives applied to its
    /// arguments, from a type into the directives applied to it (and, for
    /// enums and input objects, to their values and fields).
    pub(super) fn check_directive_cycles(&mut self) {
        let graph = self.graph;
        for (idx, directive_def) in graph.directives.values().enumerate() {
            if directive_def.built_in {
                continue;
            }

            let directive_id = DirectiveId(idx);
            if DirectiveClosure::new(graph).reaches(directive_id, directive_def) {
                self.diagnostics.report(
                    ValidationErrorKind::CircularDirectiveReference {
                        directive_name: directive_def.name.to_string(),
                    },
                    &directive_def.location,
                    graph.path(ElementId::Directive(directive_id)),
                );
            }
        }
    }
}

fn requires_itself(graph: &SchemaGraph, start_id: TypeId) -> bool {
    let mut visited = HashSet::new();
    let mut queue: VecDeque<TypeId> = required_input_objects(graph, start_id).collect();
    while let Some(type_id) = queue.pop_front() {
        if type_id == start_id {
            return true;
        }
        if visited.insert(type_id) {
            queue.extend(required_input_objects(graph, type_id));
        }
    }
    false
}

/// Input objects that a value of `type_id` must contain: targets of fields
/// typed `T!` where `T` is an input object. List-typed and nullable fields
/// can always be terminated with `[]` or `null` and don't count.
fn required_input_objects(
    graph: &SchemaGraph,
    type_id: TypeId,
) -> impl Iterator<Item = TypeId> + '_ {
    graph.type_def(type_id)
        .and_then(|type_def| type_def.as_input_object())
        .into_iter()
        .flat_map(|input_obj| input_obj.fields.values())
        .filter_map(move |field_def| match &field_def.type_node {
            TypeNode::NonNull(inner) => match inner.as_ref() {
                TypeNode::Named(named_ref) => graph.resolve(named_ref)
                    .filter(|(_, target)| target.as_input_object().is_some())
                    .map(|(target_id, _)| target_id),
                TypeNode::List(_) | TypeNode::NonNull(_) => None,
            },
            TypeNode::List(_) | TypeNode::Named(_) => None,
        })
}

/// Breadth-first walk over the interleaved type and directive frontiers of
/// one directive's argument closure.
struct DirectiveClosure<'a> {
    directive_queue: VecDeque<DirectiveId>,
    graph: &'a SchemaGraph,
    type_queue: VecDeque<TypeId>,
    visited_directives: HashSet<DirectiveId>,
    visited_types: HashSet<TypeId>,
}
impl<'a> DirectiveClosure<'a> {
    fn new(graph: &'a SchemaGraph) -> Self {
        Self {
            directive_queue: VecDeque::new(),
            graph,
            type_queue: VecDeque::new(),
            visited_directives: HashSet::new(),
            visited_types: HashSet::new(),
        }
    }

    fn reaches(mut self, start_id: DirectiveId, start_def: &'a DirectiveDefinition) -> bool {
        self.enqueue_input_values(start_def.arguments.values());

        loop {
            if let Some(directive_id) = self.directive_queue.pop_front() {
                if directive_id == start_id {
                    return true;
                }
                if self.visited_directives.insert(directive_id)
                    && let Some(directive_def) = self.graph.directive(directive_id) {
                    self.enqueue_input_values(directive_def.arguments.values());
                }
            } else if let Some(type_id) = self.type_queue.pop_front() {
                if self.visited_types.insert(type_id) {
                    self.enqueue_type(type_id);
                }
            } else {
                return false;
            }
        }
    }

    fn enqueue_input_values(&mut self, values: impl Iterator<Item = &'a InputValueDefinition>) {
        for value_def in values {
            self.enqueue_usages(&value_def.directives);
            if let Some(type_id) = value_def.type_node.innermost_named().target {
                self.type_queue.push_back(type_id);
            }
        }
    }

    fn enqueue_type(&mut self, type_id: TypeId) {
        let graph = self.graph;
        let Some(type_def) = graph.type_def(type_id) else {
            return;
        };

        self.enqueue_usages(&type_def.directives);
        match &type_def.kind {
            TypeDefinitionKind::Enum(enum_type) => {
                for value_def in enum_type.values.values() {
                    self.enqueue_usages(&value_def.directives);
                }
            },

            TypeDefinitionKind::InputObject(input_obj) =>
                self.enqueue_input_values(input_obj.fields.values()),

            TypeDefinitionKind::Scalar => (),

            // Output types can't appear in argument positions.
            TypeDefinitionKind::Interface(_)
                | TypeDefinitionKind::Object(_)
                | TypeDefinitionKind::Union(_) => (),
        }
    }

    fn enqueue_usages(&mut self, usages: &[DirectiveUsage]) {
        self.directive_queue.extend(usages.iter().filter_map(|usage| usage.definition));
    }
}
