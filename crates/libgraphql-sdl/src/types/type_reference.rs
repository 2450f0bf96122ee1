use crate::schema::OperationKind;
use crate::types::ElementId;

/// How a [`TypeReference`] names its target.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeReferenceKind {
    /// The type of a field, argument or input field.
    Annotation,
    Implements,
    /// A root operation type binding, either declared in a schema block or
    /// auto-detected.
    OperationType(OperationKind),
    UnionMember,
}

/// One site that names a type, recorded on the referenced
/// [`TypeDefinition`](crate::types::TypeDefinition).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeReference {
    pub kind: TypeReferenceKind,
    /// The element containing the reference: the field/argument/input field
    /// for annotations, the implementing or union type otherwise, and
    /// [`ElementId::Schema`] for operation types.
    pub site: ElementId,
}
