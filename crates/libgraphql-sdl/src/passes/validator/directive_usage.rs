use crate::directives::DirectiveLocation;
use crate::directives::DirectiveUsage;
use crate::passes::validator::Validator;
use crate::schema::ElementPath;
use crate::schema::PathSegment;
use crate::schema::ValidationErrorKind;
use crate::types;
use std::collections::HashSet;

impl Validator<'_> {
    /// Checks every directive applied to one element: legal location,
    /// repeatability, known arguments, required arguments and argument
    /// value compatibility.
    pub(super) fn check_directive_usages(
        &mut self,
        usages: &[DirectiveUsage],
        location: DirectiveLocation,
        owner_path: &ElementPath,
    ) {
        let graph = self.graph;
        let mut seen_directives = HashSet::new();

        for usage in usages.iter() {
            let Some(directive_id) = usage.definition else {
                continue;
            };
            let Some(directive_def) = graph.directive(directive_id) else {
                continue;
            };
            let usage_path = owner_path.with(PathSegment::DirectiveUsage(usage.name.to_string()));

            if !directive_def.locations.contains(location) {
                self.diagnostics.report(
                    ValidationErrorKind::InvalidDirectiveLocation {
                        directive_name: usage.name.to_string(),
                        element: owner_path.to_string(),
                        location,
                    },
                    &usage.location,
                    usage_path.clone(),
                );
            }

            if !seen_directives.insert(directive_id) && !directive_def.repeatable {
                self.diagnostics.report(
                    ValidationErrorKind::UnrepeatableDirectiveRepeated {
                        directive_name: usage.name.to_string(),
                        element: owner_path.to_string(),
                    },
                    &usage.location,
                    usage_path.clone(),
                );
            }

            for (arg_name, value) in usage.arguments.iter() {
                let arg_path = usage_path.with(PathSegment::Argument(arg_name.to_string()));
                let Some(arg_def) = directive_def.arguments.get(arg_name.as_str()) else {
                    self.diagnostics.report(
                        ValidationErrorKind::UndefinedDirectiveArgument {
                            argument_name: arg_name.to_string(),
                            directive_name: usage.name.to_string(),
                            element: owner_path.to_string(),
                        },
                        &usage.location,
                        arg_path,
                    );
                    continue;
                };

                if value.is_null() && arg_def.type_node.is_non_null() {
                    self.diagnostics.report(
                        ValidationErrorKind::NullRequiredDirectiveArgument {
                            argument_name: arg_name.to_string(),
                            directive_name: usage.name.to_string(),
                            element: owner_path.to_string(),
                        },
                        &usage.location,
                        arg_path,
                    );
                } else if !types::is_input_type_compatible_with_value(
                    &graph.types,
                    &arg_def.type_node,
                    value,
                ) {
                    self.diagnostics.report(
                        ValidationErrorKind::IncompatibleDirectiveArgumentValue {
                            argument_name: arg_name.to_string(),
                            directive_name: usage.name.to_string(),
                            element: owner_path.to_string(),
                            expected_type: arg_def.type_node.to_string(),
                            value: value.to_string(),
                        },
                        &usage.location,
                        arg_path,
                    );
                }
            }

            let missing_args = directive_def.arguments.iter().filter(|(arg_name, arg_def)| {
                arg_def.is_required() && !usage.arguments.contains_key(arg_name.as_str())
            });
            for (arg_name, _) in missing_args {
                self.diagnostics.report(
                    ValidationErrorKind::MissingRequiredDirectiveArgument {
                        argument_name: arg_name.to_string(),
                        directive_name: usage.name.to_string(),
                        element: owner_path.to_string(),
                    },
                    &usage.location,
                    usage_path.clone(),
                );
            }
        }
    }
}
