/// Scalars and directives every schema starts with. These are loaded ahead
/// of user declarations and tagged as
/// [`SourceLocation::GraphQLBuiltIn`](crate::loc::SourceLocation::GraphQLBuiltIn).
pub(crate) const BUILTIN_SDL: &str = concat!(
    "scalar Boolean\n",
    "scalar Float\n",
    "scalar ID\n",
    "scalar Int\n",
    "scalar String\n",
    "directive @deprecated(reason: String = \"No longer supported\") ",
    "on FIELD_DEFINITION | ARGUMENT_DEFINITION | INPUT_FIELD_DEFINITION | ENUM_VALUE\n",
    "directive @include(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT\n",
    "directive @skip(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT\n",
    "directive @specifiedBy(url: String!) on SCALAR\n",
);

pub const BUILTIN_DIRECTIVE_NAMES: [&str; 4] = [
    "deprecated",
    "include",
    "skip",
    "specifiedBy",
];

pub const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];
