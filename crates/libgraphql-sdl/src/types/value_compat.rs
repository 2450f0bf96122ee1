use crate::types::NamedTypeRef;
use crate::types::TypeDefinition;
use crate::types::TypeDefinitionKind;
use crate::types::TypeNode;
use crate::types::TypesMap;
use crate::Value;

/// Checks whether `value` is a valid constant for an input position typed
/// `type_node`, applying GraphQL's input coercion rules:
///
/// - `null` is accepted for any nullable type and rejected for `T!`.
/// - A list type accepts a list literal whose items are each compatible with
///   the item type, or a single item (list coercion).
/// - `Int` literals coerce to `Float` (never the reverse); `ID` accepts
///   strings and ints; `String` and `Boolean` need an exact literal match.
///   Custom scalars accept any constant.
/// - Enums accept a bare enum value or a string naming one of their values.
/// - Input objects accept an object literal with no unknown fields, with
///   every required field present, and every present field compatible.
///
/// Variables are never compatible: schema positions only take constants.
///
/// A named type that cannot be found in `types` is treated as compatible;
/// an unresolved type name is reported on its own and must not cascade.
pub fn is_input_type_compatible_with_value(
    types: &TypesMap,
    type_node: &TypeNode,
    value: &Value,
) -> bool {
    match type_node {
        TypeNode::NonNull(inner) =>
            !value.is_null() && is_input_type_compatible_with_value(types, inner, value),

        _ if value.is_null() => true,

        TypeNode::List(inner) => match value {
            Value::List(items) => items.iter().all(
                |item| is_input_type_compatible_with_value(types, inner, item),
            ),
            single_item => is_input_type_compatible_with_value(types, inner, single_item),
        },

        TypeNode::Named(named_ref) => {
            let type_def = if let Some(type_def) = lookup(types, named_ref) {
                type_def
            } else {
                return true;
            };
            is_named_type_compatible_with_value(types, type_def, value)
        },
    }
}

fn is_named_type_compatible_with_value(
    types: &TypesMap,
    type_def: &TypeDefinition,
    value: &Value,
) -> bool {
    if let Value::Variable(_) = value {
        return false;
    }

    match &type_def.kind {
        TypeDefinitionKind::Scalar =>
            is_scalar_compatible_with_value(type_def, value),

        TypeDefinitionKind::Enum(enum_type) => match value {
            Value::Enum(value_name) | Value::String(value_name) =>
                enum_type.values.contains_key(value_name),
            _ => false,
        },

        TypeDefinitionKind::InputObject(input_obj) => {
            let entries = if let Value::Object(entries) = value {
                entries
            } else {
                return false;
            };

            let has_unknown_field = entries.keys().any(
                |field_name| !input_obj.fields.contains_key(field_name),
            );
            if has_unknown_field {
                return false;
            }

            input_obj.fields.values().all(|field| {
                match entries.get(field.name.as_str()) {
                    Some(field_value) => is_input_type_compatible_with_value(
                        types,
                        &field.type_node,
                        field_value,
                    ),
                    None => !field.is_required(),
                }
            })
        },

        TypeDefinitionKind::Interface(_)
            | TypeDefinitionKind::Object(_)
            | TypeDefinitionKind::Union(_) => false,
    }
}

fn is_scalar_compatible_with_value(type_def: &TypeDefinition, value: &Value) -> bool {
    if !type_def.built_in {
        return true;
    }

    match (type_def.name.as_str(), value) {
        ("Boolean", Value::Boolean(_)) => true,
        ("Float", Value::Float(_) | Value::Int(_)) => true,
        ("ID", Value::Int(_) | Value::String(_)) => true,
        ("Int", Value::Int(int_value)) => i32::try_from(*int_value).is_ok(),
        ("String", Value::String(_)) => true,
        _ => false,
    }
}

fn lookup<'a>(types: &'a TypesMap, named_ref: &NamedTypeRef) -> Option<&'a TypeDefinition> {
    let linked = named_ref.target
        .and_then(|type_id| types.get_index(type_id.index()))
        .filter(|(name, _)| *name == &named_ref.name)
        .map(|(_, type_def)| type_def);
    linked.or_else(|| types.get(named_ref.name.as_str()))
}
