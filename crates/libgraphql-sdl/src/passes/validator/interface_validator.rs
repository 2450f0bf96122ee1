use crate::passes::validator::Validator;
use crate::schema::PathSegment;
use crate::schema::ValidationErrorKind;
use crate::types::ElementId;
use crate::types::FieldDefinition;
use crate::types::GraphQLTypeKind;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::TypeDefinition;
use crate::types::TypeDefinitionKind;
use crate::types::TypeId;
use crate::types::TypeNode;
use std::collections::HashSet;
use std::collections::VecDeque;

impl Validator<'_> {
    /// Checks that `type_def` (an object or interface) correctly implements
    /// each interface it declares.
    ///
    /// https://spec.graphql.org/October2021/#IsValidImplementation()
    pub(super) fn check_implements(
        &mut self,
        type_id: TypeId,
        type_def: &TypeDefinition,
        data: &ObjectOrInterfaceTypeData,
    ) {
        let graph = self.graph;
        let type_kind = type_def.type_kind();
        let type_path = graph.path(ElementId::Type(type_id));

        if type_kind == GraphQLTypeKind::Interface && self.implements_transitively(type_id, type_id) {
            self.diagnostics.report(
                ValidationErrorKind::SelfImplementingInterface {
                    interface_name: type_def.name.to_string(),
                },
                &type_def.location,
                type_path.clone(),
            );
        }

        let mut reported_missing: HashSet<&str> = HashSet::new();
        for (iface_name, iface_ref) in data.implements.iter() {
            let Some((iface_id, iface_def)) = graph.resolve(iface_ref) else {
                continue;
            };

            let Some(iface_data) = iface_def.as_interface() else {
                self.diagnostics.report(
                    ValidationErrorKind::ImplementsNonInterface {
                        target_kind: iface_def.type_kind(),
                        target_name: iface_name.to_string(),
                        type_kind,
                        type_name: type_def.name.to_string(),
                    },
                    iface_ref.ref_location(),
                    type_path.clone(),
                );
                continue;
            };

            if iface_id == type_id {
                continue;
            }

            // The implements list must be transitively closed. Each missing
            // interface is reported once, against the first declarer.
            let missing_interfaces = iface_data.implements.keys().filter(|transitive_name| {
                transitive_name.as_str() != type_def.name
                    && !data.implements.contains_key(transitive_name.as_str())
                    && reported_missing.insert(transitive_name.as_str())
            });
            for missing_interface in missing_interfaces {
                self.diagnostics.report(
                    ValidationErrorKind::MissingTransitiveInterface {
                        interface_name: iface_name.to_string(),
                        missing_interface: missing_interface.to_string(),
                        type_kind,
                        type_name: type_def.name.to_string(),
                    },
                    iface_ref.ref_location(),
                    type_path.clone(),
                );
            }

            for (field_name, iface_field) in iface_data.fields.iter() {
                match data.fields.get_full(field_name.as_str()) {
                    Some((field_idx, _, field_def)) => self.check_field_implementation(
                        ElementId::Field { type_id, field: field_idx },
                        field_def,
                        iface_name,
                        iface_field,
                    ),

                    None => self.diagnostics.report(
                        ValidationErrorKind::MissingInterfaceField {
                            field_name: field_name.to_string(),
                            interface_name: iface_name.to_string(),
                            type_kind,
                            type_name: type_def.name.to_string(),
                        },
                        &type_def.location,
                        type_path.clone(),
                    ),
                }
            }
        }
    }

    fn check_field_implementation(
        &mut self,
        field_id: ElementId,
        field_def: &FieldDefinition,
        iface_name: &str,
        iface_field: &FieldDefinition,
    ) {
        let field_path = self.graph.path(field_id);

        for (arg_name, iface_arg) in iface_field.arguments.iter() {
            match field_def.arguments.get(arg_name.as_str()) {
                Some(arg) if !arg.type_node.is_equivalent_to(&iface_arg.type_node) => {
                    let arg_path = field_path.with(PathSegment::Argument(arg_name.to_string()));
                    self.diagnostics.report(
                        ValidationErrorKind::InterfaceArgumentTypeMismatch {
                            element: arg_path.to_string(),
                            expected_type: iface_arg.type_node.to_string(),
                            found_type: arg.type_node.to_string(),
                            interface_name: iface_name.to_string(),
                        },
                        &arg.location,
                        arg_path,
                    );
                },

                Some(_) => (),

                None => self.diagnostics.report(
                    ValidationErrorKind::MissingInterfaceArgument {
                        argument_name: arg_name.to_string(),
                        element: field_path.to_string(),
                        interface_name: iface_name.to_string(),
                    },
                    &field_def.location,
                    field_path.clone(),
                ),
            }
        }

        let extra_required_args = field_def.arguments.iter().filter(|(arg_name, arg)| {
            !iface_field.arguments.contains_key(arg_name.as_str()) && arg.type_node.is_non_null()
        });
        for (arg_name, arg) in extra_required_args {
            let arg_path = field_path.with(PathSegment::Argument(arg_name.to_string()));
            self.diagnostics.report(
                ValidationErrorKind::RequiredExtraArgument {
                    element: arg_path.to_string(),
                    interface_name: iface_name.to_string(),
                },
                &arg.location,
                arg_path,
            );
        }

        if !self.is_valid_implementation_type(&field_def.type_node, &iface_field.type_node) {
            self.diagnostics.report(
                ValidationErrorKind::InvalidInterfaceFieldType {
                    element: field_path.to_string(),
                    expected_type: iface_field.type_node.to_string(),
                    found_type: field_def.type_node.to_string(),
                    interface_name: iface_name.to_string(),
                },
                &field_def.location,
                field_path,
            );
        }
    }

    /// Whether a field typed `found` may implement an interface field typed
    /// `expected` (return-type covariance).
    ///
    /// Unresolved names count as valid; they were reported when linking.
    fn is_valid_implementation_type(&self, found: &TypeNode, expected: &TypeNode) -> bool {
        match (found, expected) {
            (TypeNode::NonNull(found_inner), TypeNode::NonNull(expected_inner)) =>
                self.is_valid_implementation_type(found_inner, expected_inner),

            (TypeNode::NonNull(found_inner), _) =>
                self.is_valid_implementation_type(found_inner, expected),

            (_, TypeNode::NonNull(_)) => false,

            (TypeNode::List(found_inner), TypeNode::List(expected_inner)) =>
                self.is_valid_implementation_type(found_inner, expected_inner),

            (TypeNode::List(_), _) | (_, TypeNode::List(_)) => false,

            (TypeNode::Named(found_ref), TypeNode::Named(expected_ref)) => {
                if found_ref.name == expected_ref.name {
                    return true;
                }

                let (Some((found_id, found_def)), Some((expected_id, expected_def))) =
                    (self.graph.resolve(found_ref), self.graph.resolve(expected_ref)) else {
                    return true;
                };

                match &expected_def.kind {
                    TypeDefinitionKind::Interface(_) =>
                        found_def.as_object_or_interface().is_some()
                            && self.implements_transitively(found_id, expected_id),

                    TypeDefinitionKind::Union(union_type) =>
                        found_def.as_object().is_some()
                            && union_type.members.contains_key(found_def.name.as_str()),

                    TypeDefinitionKind::Enum(_)
                        | TypeDefinitionKind::InputObject(_)
                        | TypeDefinitionKind::Object(_)
                        | TypeDefinitionKind::Scalar => false,
                }
            },
        }
    }

    /// Whether `type_id` reaches `iface_id` by following `implements`
    /// declarations any number of times.
    pub(super) fn implements_transitively(&self, type_id: TypeId, iface_id: TypeId) -> bool {
        let mut visited = HashSet::new();
        let mut queue: VecDeque<TypeId> = self.implemented_interface_ids(type_id).collect();
        while let Some(next_id) = queue.pop_front() {
            if next_id == iface_id {
                return true;
            }
            if visited.insert(next_id) {
                queue.extend(self.implemented_interface_ids(next_id));
            }
        }
        false
    }

    fn implemented_interface_ids(&self, type_id: TypeId) -> impl Iterator<Item = TypeId> + '_ {
        self.graph.type_def(type_id)
            .and_then(|type_def| type_def.as_object_or_interface())
            .into_iter()
            .flat_map(|data| data.implements.values())
            .filter_map(|iface_ref| iface_ref.target)
    }
}
