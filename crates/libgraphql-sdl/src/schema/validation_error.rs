use crate::directives::DirectiveLocation;
use crate::loc;
use crate::schema::ElementPath;
use crate::schema::OperationKind;
use crate::types::GraphQLTypeKind;
use thiserror::Error;

/// A single non-fatal problem found while analyzing a schema.
///
/// `Display` renders just the message. [`path()`](Self::path) identifies the
/// element the problem was found on.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{kind}")]
pub struct SchemaValidationError {
    pub(crate) kind: ValidationErrorKind,
    pub(crate) location: Option<loc::SourceLocation>,
    pub(crate) path: ElementPath,
}
impl SchemaValidationError {
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }

    /// Where the problem was found. `None` for problems about something the
    /// schema does not contain at all.
    pub fn location(&self) -> Option<&loc::SourceLocation> {
        self.location.as_ref()
    }

    pub fn path(&self) -> &ElementPath {
        &self.path
    }
}

/// Every kind of schema-level defect this crate detects.
///
/// Fields named `element` hold the rendered description of the offending
/// element (e.g. `field 'fizz' of object 'foo'`).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationErrorKind {
    #[error("Directive '@{directive_name}' has circular reference to itself.")]
    CircularDirectiveReference {
        directive_name: String,
    },

    #[error("Input object '{type_name}' has circular reference requiring a non-null value.")]
    CircularInputObjectReference {
        type_name: String,
    },

    #[error("{} must not have a name starting with '__'.", upper_first(element))]
    DoubleUnderscoreName {
        element: String,
    },

    #[error("Directive '{directive_name}' is already defined.")]
    DuplicateDirectiveDefinition {
        directive_name: String,
    },

    #[error(
        "Directive '@{directive_name}' applied to {element} supplies argument \
        '{argument_name}' more than once."
    )]
    DuplicateDirectiveUsageArgument {
        argument_name: String,
        directive_name: String,
        element: String,
    },

    #[error("{what} '{name}' is already declared on {element}.")]
    DuplicateName {
        element: String,
        name: String,
        what: &'static str,
    },

    #[error("Schema declares the {operation} operation type more than once.")]
    DuplicateOperationType {
        operation: OperationKind,
    },

    #[error("Schema is already defined.")]
    DuplicateSchemaDefinition,

    #[error("Type '{type_name}' is already defined.")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error(
        "{} must define at least one {}.",
        upper_first(&format!("{} '{type_name}'", type_kind.name())),
        empty_definition_noun(*type_kind),
    )]
    EmptyDefinition {
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error("Extension of {element} makes no changes.")]
    EmptyExtension {
        element: String,
    },

    #[error(
        "Enum value '{value_name}' of enum '{enum_name}' must not be named \
        'true', 'false' or 'null'."
    )]
    EnumValueReservedName {
        enum_name: String,
        value_name: String,
    },

    #[error(
        "Extension of {element} changes its type from '{existing_type}' to \
        '{new_type}'."
    )]
    ExtensionChangesType {
        element: String,
        existing_type: String,
        new_type: String,
    },

    #[error(
        "Cannot extend {} '{type_name}' because it is defined as {} {}.",
        extension_kind.name(),
        article(actual_kind.name()),
        actual_kind.name(),
    )]
    ExtensionKindMismatch {
        actual_kind: GraphQLTypeKind,
        extension_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error("Cannot extend {} '{type_name}' because it is not defined.", extension_kind.name())]
    ExtensionOfUndefinedType {
        extension_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "{} '{type_name}' cannot implement '{target_name}' because it is {} {}, \
        not an interface.",
        type_kind,
        article(target_kind.name()),
        target_kind.name(),
    )]
    ImplementsNonInterface {
        target_kind: GraphQLTypeKind,
        target_name: String,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "Default value {value} of {element} is not compatible with type \
        '{expected_type}'."
    )]
    IncompatibleDefaultValue {
        element: String,
        expected_type: String,
        value: String,
    },

    #[error(
        "Value {value} for argument '{argument_name}' of directive \
        '@{directive_name}' applied to {element} is not compatible with type \
        '{expected_type}'."
    )]
    IncompatibleDirectiveArgumentValue {
        argument_name: String,
        directive_name: String,
        element: String,
        expected_type: String,
        value: String,
    },

    #[error(
        "{} has type '{found_type}', which is not a valid implementation of \
        type '{expected_type}' declared on interface '{interface_name}'.",
        upper_first(element),
    )]
    InvalidInterfaceFieldType {
        element: String,
        expected_type: String,
        found_type: String,
        interface_name: String,
    },

    #[error(
        "{} has type '{found_type}', but interface '{interface_name}' declares \
        it with type '{expected_type}'.",
        upper_first(element),
    )]
    InterfaceArgumentTypeMismatch {
        element: String,
        expected_type: String,
        found_type: String,
        interface_name: String,
    },

    #[error(
        "Directive '@{directive_name}' is not allowed at location {location} \
        ({element})."
    )]
    InvalidDirectiveLocation {
        directive_name: String,
        element: String,
        location: DirectiveLocation,
    },

    #[error(
        "Directive '@{directive_name}' cannot be applied to {element} because \
        it is required."
    )]
    InvalidDeprecation {
        directive_name: String,
        element: String,
    },

    #[error(
        "{} is missing argument '{argument_name}' declared on interface \
        '{interface_name}'.",
        upper_first(element),
    )]
    MissingInterfaceArgument {
        argument_name: String,
        element: String,
        interface_name: String,
    },

    #[error(
        "{type_kind} '{type_name}' is missing field '{field_name}' declared on \
        interface '{interface_name}'."
    )]
    MissingInterfaceField {
        field_name: String,
        interface_name: String,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "{type_kind} '{type_name}' is missing implements '{missing_interface}' \
        declared on interface '{interface_name}'."
    )]
    MissingTransitiveInterface {
        interface_name: String,
        missing_interface: String,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "Directive '@{directive_name}' applied to {element} requires argument \
        '{argument_name}'."
    )]
    MissingRequiredDirectiveArgument {
        argument_name: String,
        directive_name: String,
        element: String,
    },

    #[error(
        "{} must have an input type, but '{type_name}' is {} {}.",
        upper_first(element),
        article(type_kind.name()),
        type_kind.name(),
    )]
    NotAnInputType {
        element: String,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "{} must have an output type, but '{type_name}' is {} {}.",
        upper_first(element),
        article(type_kind.name()),
        type_kind.name(),
    )]
    NotAnOutputType {
        element: String,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "Directive '@{directive_name}' applied to {element} requires a non-null \
        value for argument '{argument_name}'."
    )]
    NullRequiredDirectiveArgument {
        argument_name: String,
        directive_name: String,
        element: String,
    },

    #[error(
        "The {first} and {second} operation types must be different types, but \
        both are '{type_name}'."
    )]
    OperationTypesNotDistinct {
        first: OperationKind,
        second: OperationKind,
        type_name: String,
    },

    #[error(
        "Type '{type_name}' of the {operation} operation must be an object \
        type, but is {} {}.",
        article(type_kind.name()),
        type_kind.name(),
    )]
    OperationTypeNotObject {
        operation: OperationKind,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error("Type 'Query' is not defined.")]
    QueryTypeNotDefined,

    #[error(
        "{} is not declared on interface '{interface_name}' and must be \
        nullable.",
        upper_first(element),
    )]
    RequiredExtraArgument {
        element: String,
        interface_name: String,
    },

    #[error(
        "Type '{type_name}' cannot be used as the {operation} operation type \
        because it is referenced by {referenced_by}."
    )]
    RootTypeReferenced {
        operation: OperationKind,
        referenced_by: String,
        type_name: String,
    },

    #[error("Schema must declare at least one operation type.")]
    SchemaWithoutOperations,

    #[error("Schema must declare the query operation type.")]
    SchemaWithoutQuery,

    #[error("Interface '{interface_name}' cannot implement itself.")]
    SelfImplementingInterface {
        interface_name: String,
    },

    #[error("Cannot extend schema because no schema is defined.")]
    SchemaExtensionWithoutSchema,

    #[error(
        "Directive '@{directive_name}' applied to {element} has no argument \
        named '{argument_name}'."
    )]
    UndefinedDirectiveArgument {
        argument_name: String,
        directive_name: String,
        element: String,
    },

    #[error("Undefined directive '@{directive_name}' applied to {element}.")]
    UndefinedDirective {
        directive_name: String,
        element: String,
    },

    #[error("Undefined interface '{interface_name}' implemented by {element}.")]
    UndefinedInterface {
        element: String,
        interface_name: String,
    },

    #[error("Undefined type '{type_name}' for {element}.")]
    UndefinedType {
        element: String,
        type_name: String,
    },

    #[error("Undefined type '{type_name}' for member of union '{union_name}'.")]
    UndefinedUnionMember {
        type_name: String,
        union_name: String,
    },

    #[error("Undefined type '{type_name}' for the {operation} operation.")]
    UndefinedOperationType {
        operation: OperationKind,
        type_name: String,
    },

    #[error(
        "Member '{type_name}' of union '{union_name}' must be an object type, \
        but is {} {}.",
        article(type_kind.name()),
        type_kind.name(),
    )]
    UnionMemberNotObject {
        type_kind: GraphQLTypeKind,
        type_name: String,
        union_name: String,
    },

    #[error(
        "Directive '@{directive_name}' is not repeatable but is applied more \
        than once to {element}."
    )]
    UnrepeatableDirectiveRepeated {
        directive_name: String,
        element: String,
    },
}

fn article(noun: &str) -> &'static str {
    match noun.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

fn empty_definition_noun(type_kind: GraphQLTypeKind) -> &'static str {
    match type_kind {
        GraphQLTypeKind::Enum => "value",
        GraphQLTypeKind::InputObject => "input field",
        GraphQLTypeKind::Interface | GraphQLTypeKind::Object => "field",
        GraphQLTypeKind::Scalar => "value",
        GraphQLTypeKind::Union => "member type",
    }
}

pub(crate) fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
