use crate::directives::DirectiveDefinition;
use crate::directives::DirectivesMap;
use crate::schema::element_path;
use crate::schema::ElementPath;
use crate::schema::Schema;
use crate::schema::SchemaDefinition;
use crate::schema::SchemaRoot;
use crate::types::DirectiveId;
use crate::types::ElementId;
use crate::types::NamedTypeRef;
use crate::types::TypeDefinition;
use crate::types::TypeId;
use crate::types::TypesMap;

/// The semantic graph under construction during one build. Every pass reads
/// and (until validation) writes this; it becomes a [`Schema`] only when the
/// build succeeds.
#[derive(Debug, Default)]
pub(crate) struct SchemaGraph {
    pub(crate) directives: DirectivesMap,
    pub(crate) root: Option<SchemaRoot>,
    pub(crate) schema_def: Option<SchemaDefinition>,
    pub(crate) types: TypesMap,
}
impl SchemaGraph {
    pub fn directive(&self, directive_id: DirectiveId) -> Option<&DirectiveDefinition> {
        self.directives.get_index(directive_id.index())
            .map(|(_, directive_def)| directive_def)
    }

    pub fn into_schema(self) -> Schema {
        Schema {
            directives: self.directives,
            root: self.root,
            types: self.types,
        }
    }

    pub fn path(&self, element_id: ElementId) -> ElementPath {
        element_path(&self.types, &self.directives, element_id)
    }

    /// The definition a linked reference points at. `None` for references
    /// the link pass could not resolve.
    pub fn resolve(&self, named_ref: &NamedTypeRef) -> Option<(TypeId, &TypeDefinition)> {
        let type_id = named_ref.target?;
        self.type_def(type_id).map(|type_def| (type_id, type_def))
    }

    pub fn type_def(&self, type_id: TypeId) -> Option<&TypeDefinition> {
        self.types.get_index(type_id.index())
            .map(|(_, type_def)| type_def)
    }

    pub fn type_id(&self, type_name: &str) -> Option<TypeId> {
        self.types.get_index_of(type_name).map(TypeId)
    }
}
