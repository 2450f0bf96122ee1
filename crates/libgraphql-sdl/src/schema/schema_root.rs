use crate::directives::DirectiveUsage;
use crate::loc;
use crate::types::NamedTypeRef;
use crate::types::TypeId;

/// The three kinds of root operation a schema can expose.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}
impl OperationKind {
    pub const ALL: [OperationKind; 3] = [
        Self::Query,
        Self::Mutation,
        Self::Subscription,
    ];

    /// The type name auto-detected for this operation when no schema block
    /// is declared.
    pub fn default_type_name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One `query: SomeType` entry of a schema block.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OperationTypeBinding {
    pub(crate) kind: OperationKind,
    pub(crate) type_ref: NamedTypeRef,
}
impl OperationTypeBinding {
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn type_ref(&self) -> &NamedTypeRef {
        &self.type_ref
    }
}

/// An explicit `schema { ... }` block, with any `extend schema` merged in.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaDefinition {
    pub(crate) directives: Vec<DirectiveUsage>,
    pub(crate) location: loc::SourceLocation,
    pub(crate) operations: Vec<OperationTypeBinding>,
}
impl SchemaDefinition {
    pub fn directives(&self) -> &[DirectiveUsage] {
        &self.directives
    }

    pub fn location(&self) -> &loc::SourceLocation {
        &self.location
    }

    /// The first binding declared for `kind`.
    pub fn operation(&self, kind: OperationKind) -> Option<&OperationTypeBinding> {
        self.operations.iter().find(|binding| binding.kind == kind)
    }

    /// Every binding in declaration order. A valid schema has at most one per
    /// [`OperationKind`].
    pub fn operations(&self) -> &[OperationTypeBinding] {
        &self.operations
    }
}

/// The resolved root operation types of a schema.
///
/// Either taken from an explicit [`SchemaDefinition`] or synthesized from
/// object types named `Query`, `Mutation` and `Subscription`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaRoot {
    pub(crate) definition: Option<SchemaDefinition>,
    pub(crate) mutation: Option<TypeId>,
    pub(crate) query: TypeId,
    pub(crate) subscription: Option<TypeId>,
}
impl SchemaRoot {
    /// The schema block this root came from, or `None` when synthesized.
    pub fn definition(&self) -> Option<&SchemaDefinition> {
        self.definition.as_ref()
    }

    pub fn is_synthesized(&self) -> bool {
        self.definition.is_none()
    }

    pub fn mutation_type_id(&self) -> Option<TypeId> {
        self.mutation
    }

    pub fn operation_type_id(&self, kind: OperationKind) -> Option<TypeId> {
        match kind {
            OperationKind::Mutation => self.mutation,
            OperationKind::Query => Some(self.query),
            OperationKind::Subscription => self.subscription,
        }
    }

    pub fn query_type_id(&self) -> TypeId {
        self.query
    }

    pub fn subscription_type_id(&self) -> Option<TypeId> {
        self.subscription
    }
}
