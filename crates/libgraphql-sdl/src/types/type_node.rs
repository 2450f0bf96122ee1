use crate::ast;
use crate::loc;
use crate::types::NamedTypeRef;

/// The annotated type of a field, argument or input field.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeNode {
    List(Box<TypeNode>),
    Named(NamedTypeRef),
    NonNull(Box<TypeNode>),
}
impl TypeNode {
    pub(crate) fn from_ast(ref_location: &loc::SourceLocation, ast_type: &ast::Type) -> Self {
        match ast_type {
            ast::Type::ListType(inner) =>
                Self::List(Box::new(Self::from_ast(ref_location, inner))),
            ast::Type::NamedType(name) =>
                Self::Named(NamedTypeRef::new(name, ref_location.clone())),
            ast::Type::NonNullType(inner) =>
                Self::NonNull(Box::new(Self::from_ast(ref_location, inner))),
        }
    }

    pub(crate) fn to_ast(&self) -> ast::Type {
        match self {
            Self::List(inner) => ast::Type::ListType(Box::new(inner.to_ast())),
            Self::Named(named) => ast::Type::NamedType(named.name.clone()),
            Self::NonNull(inner) => ast::Type::NonNullType(Box::new(inner.to_ast())),
        }
    }

    /// Recursively unwrap list and non-null wrappers down to the named type.
    pub fn innermost_named(&self) -> &NamedTypeRef {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_named(),
            Self::Named(named) => named,
        }
    }

    pub(crate) fn innermost_named_mut(&mut self) -> &mut NamedTypeRef {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_named_mut(),
            Self::Named(named) => named,
        }
    }

    /// Structural equality of two annotations, ignoring source locations and
    /// link state.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(a), Self::List(b)) | (Self::NonNull(a), Self::NonNull(b)) =>
                a.is_equivalent_to(b),
            (Self::Named(a), Self::Named(b)) =>
                a.name == b.name,
            _ => false,
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        self.innermost_named().ref_location()
    }
}
impl std::fmt::Display for TypeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(named) => write!(f, "{}", named.name()),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
