use crate::directives::DirectiveDefinition;
use crate::directives::DirectiveUsage;
use crate::directives::DirectivesMap;
use crate::schema::element_directives;
use crate::schema::element_path;
use crate::schema::ElementPath;
use crate::schema::OperationKind;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaRoot;
use crate::types;
use crate::types::DirectiveId;
use crate::types::DirectiveUsageId;
use crate::types::ElementId;
use crate::types::TypeDefinition;
use crate::types::TypeId;
use crate::types::TypeNode;
use crate::types::TypesMap;
use crate::Value;

/// A fully linked and validated GraphQL schema.
///
/// Types and directives are held in insertion order: built-ins first, then
/// user declarations in the order they were added to the
/// [`SchemaBuilder`]. [`TypeId`]s and [`DirectiveId`]s index into these maps.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Schema {
    pub(crate) directives: DirectivesMap,
    pub(crate) root: Option<SchemaRoot>,
    pub(crate) types: TypesMap,
}
impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Every directive definition, including the built-in `@include`,
    /// `@skip`, `@deprecated` and `@specifiedBy`.
    pub fn all_directives(&self) -> &DirectivesMap {
        &self.directives
    }

    /// Every type definition, including the built-in scalars.
    pub fn all_types(&self) -> &TypesMap {
        &self.types
    }

    pub fn directive(&self, directive_id: DirectiveId) -> Option<&DirectiveDefinition> {
        self.directives.get_index(directive_id.index())
            .map(|(_, directive_def)| directive_def)
    }

    /// Follows a recorded directive reference back to the usage it names.
    pub fn directive_usage(&self, usage_id: DirectiveUsageId) -> Option<&DirectiveUsage> {
        self.element_directives(usage_id.owner).get(usage_id.index)
    }

    pub fn element_directives(&self, element_id: ElementId) -> &[DirectiveUsage] {
        element_directives(
            &self.types,
            &self.directives,
            self.root.as_ref().and_then(|root| root.definition()),
            element_id,
        )
    }

    /// The human-readable location of any element within this schema.
    pub fn element_path(&self, element_id: ElementId) -> ElementPath {
        element_path(&self.types, &self.directives, element_id)
    }

    /// See [`types::is_input_type_compatible_with_value`].
    pub fn is_input_type_compatible_with_value(
        &self,
        type_node: &TypeNode,
        value: &Value,
    ) -> bool {
        types::is_input_type_compatible_with_value(&self.types, type_node, value)
    }

    pub fn lookup_directive(&self, directive_name: &str) -> Option<&DirectiveDefinition> {
        self.directives.get(directive_name)
    }

    pub fn lookup_type(&self, type_name: &str) -> Option<&TypeDefinition> {
        self.types.get(type_name)
    }

    pub fn mutation_type(&self) -> Option<&TypeDefinition> {
        self.operation_type(OperationKind::Mutation)
    }

    pub fn operation_type(&self, kind: OperationKind) -> Option<&TypeDefinition> {
        self.root.as_ref()
            .and_then(|root| root.operation_type_id(kind))
            .and_then(|type_id| self.type_def(type_id))
    }

    pub fn query_type(&self) -> Option<&TypeDefinition> {
        self.operation_type(OperationKind::Query)
    }

    /// The root operation types. `None` only for schemas produced by
    /// [`SchemaBuilder::validate`] that declare no operation types at all.
    pub fn root(&self) -> Option<&SchemaRoot> {
        self.root.as_ref()
    }

    pub fn subscription_type(&self) -> Option<&TypeDefinition> {
        self.operation_type(OperationKind::Subscription)
    }

    pub fn type_def(&self, type_id: TypeId) -> Option<&TypeDefinition> {
        self.types.get_index(type_id.index())
            .map(|(_, type_def)| type_def)
    }

    /// Looks up the [`TypeId`] of a type by name.
    pub fn type_id(&self, type_name: &str) -> Option<TypeId> {
        self.types.get_index_of(type_name).map(TypeId)
    }
}
