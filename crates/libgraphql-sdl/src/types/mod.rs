mod element_id;
mod enum_type;
mod field_definition;
mod graphql_type_kind;
mod input_object_type;
mod input_value_definition;
mod named_type_ref;
mod object_or_interface_type_data;
mod schema_element;
mod type_definition;
mod type_node;
mod type_reference;
mod union_type;
mod value_compat;

pub use element_id::DirectiveId;
pub use element_id::DirectiveUsageId;
pub use element_id::ElementId;
pub use element_id::TypeId;
pub use enum_type::EnumType;
pub use enum_type::EnumValueDefinition;
pub use field_definition::FieldDefinition;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_object_type::InputObjectType;
pub use input_value_definition::InputValueDefinition;
pub use named_type_ref::NamedTypeRef;
pub use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use schema_element::SchemaElement;
pub use type_definition::TypeDefinition;
pub use type_definition::TypeDefinitionKind;
pub use type_node::TypeNode;
pub use type_reference::TypeReference;
pub use type_reference::TypeReferenceKind;
pub use union_type::UnionType;
pub use value_compat::is_input_type_compatible_with_value;

use indexmap::IndexMap;

/// All types of a schema keyed by name. A type's position in this map is its
/// [`TypeId`].
pub type TypesMap = IndexMap<String, TypeDefinition>;

#[cfg(test)]
mod tests;
