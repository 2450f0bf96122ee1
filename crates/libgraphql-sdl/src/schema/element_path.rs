use crate::directives::DirectiveUsage;
use crate::directives::DirectivesMap;
use crate::schema::OperationKind;
use crate::schema::SchemaDefinition;
use crate::types::ElementId;
use crate::types::GraphQLTypeKind;
use crate::types::TypesMap;

/// One step of an [`ElementPath`].
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum PathSegment {
    Argument(String),
    /// A directive definition (`directive @name ...`).
    Directive(String),
    /// A directive applied to the preceding element.
    DirectiveUsage(String),
    EnumValue(String),
    Field(String),
    InputField(String),
    Operation(OperationKind),
    Schema,
    Type {
        kind: GraphQLTypeKind,
        name: String,
    },
}
impl PathSegment {
    fn label(&self) -> &'static str {
        match self {
            Self::Argument(_) => "argument",
            Self::Directive(_) | Self::DirectiveUsage(_) => "directive",
            Self::EnumValue(_) => "enum value",
            Self::Field(_) => "field",
            Self::InputField(_) => "input field",
            Self::Operation(_) => "operation",
            Self::Schema => "schema",
            Self::Type { kind, .. } => kind.name(),
        }
    }

    fn name(&self) -> Option<String> {
        match self {
            Self::Argument(name)
                | Self::EnumValue(name)
                | Self::Field(name)
                | Self::InputField(name)
                | Self::Type { name, .. } => Some(name.clone()),
            Self::Directive(name) | Self::DirectiveUsage(name) => Some(format!("@{name}")),
            Self::Operation(kind) => Some(kind.to_string()),
            Self::Schema => None,
        }
    }
}

/// The chain of containers leading to an element, outermost first.
///
/// Renders two ways:
///
/// - [`breadcrumb()`](Self::breadcrumb) walks outside-in:
///   `input object foo, input field fizz, directive @example, argument arg1`
/// - `Display` describes the element inside-out, the form used within
///   diagnostic messages: `field 'fizz' of object 'foo'`
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ElementPath(Vec<PathSegment>);
impl ElementPath {
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }

    pub fn breadcrumb(&self) -> String {
        self.0.iter()
            .map(|segment| match segment.name() {
                Some(name) => format!("{} {name}", segment.label()),
                None => segment.label().to_string(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub(crate) fn with(&self, segment: PathSegment) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment);
        Self(segments)
    }
}
impl std::fmt::Display for ElementPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let described = self.0.iter()
            .rev()
            .map(|segment| match segment.name() {
                Some(name) => format!("{} '{name}'", segment.label()),
                None => segment.label().to_string(),
            })
            .collect::<Vec<_>>()
            .join(" of ");
        write!(f, "{described}")
    }
}

/// Reconstructs the path of `element_id` from the maps that own it. Indices
/// that no longer resolve end the path early rather than failing.
pub(crate) fn element_path(
    types: &TypesMap,
    directives: &DirectivesMap,
    element_id: ElementId,
) -> ElementPath {
    let mut segments = vec![];
    match element_id {
        ElementId::Schema =>
            segments.push(PathSegment::Schema),

        ElementId::Directive(directive_id) => {
            if let Some((name, _)) = directives.get_index(directive_id.index()) {
                segments.push(PathSegment::Directive(name.clone()));
            }
        },

        ElementId::DirectiveArgument { directive_id, argument } => {
            if let Some((name, directive_def)) = directives.get_index(directive_id.index()) {
                segments.push(PathSegment::Directive(name.clone()));
                if let Some((arg_name, _)) = directive_def.arguments.get_index(argument) {
                    segments.push(PathSegment::Argument(arg_name.clone()));
                }
            }
        },

        ElementId::Type(type_id) => {
            if let Some((name, type_def)) = types.get_index(type_id.index()) {
                segments.push(PathSegment::Type {
                    kind: type_def.type_kind(),
                    name: name.clone(),
                });
            }
        },

        ElementId::EnumValue { type_id, value } => {
            if let Some((name, type_def)) = types.get_index(type_id.index()) {
                segments.push(PathSegment::Type {
                    kind: type_def.type_kind(),
                    name: name.clone(),
                });
                let value_name = type_def.as_enum()
                    .and_then(|enum_type| enum_type.values.get_index(value));
                if let Some((value_name, _)) = value_name {
                    segments.push(PathSegment::EnumValue(value_name.clone()));
                }
            }
        },

        ElementId::Field { type_id, field }
            | ElementId::FieldArgument { type_id, field, .. } => {
            if let Some((name, type_def)) = types.get_index(type_id.index()) {
                segments.push(PathSegment::Type {
                    kind: type_def.type_kind(),
                    name: name.clone(),
                });
                let field_def = type_def.as_object_or_interface()
                    .and_then(|data| data.fields.get_index(field));
                if let Some((field_name, field_def)) = field_def {
                    segments.push(PathSegment::Field(field_name.clone()));
                    if let ElementId::FieldArgument { argument, .. } = element_id
                        && let Some((arg_name, _)) = field_def.arguments.get_index(argument) {
                        segments.push(PathSegment::Argument(arg_name.clone()));
                    }
                }
            }
        },

        ElementId::InputField { type_id, field } => {
            if let Some((name, type_def)) = types.get_index(type_id.index()) {
                segments.push(PathSegment::Type {
                    kind: type_def.type_kind(),
                    name: name.clone(),
                });
                let field_name = type_def.as_input_object()
                    .and_then(|input_obj| input_obj.fields.get_index(field));
                if let Some((field_name, _)) = field_name {
                    segments.push(PathSegment::InputField(field_name.clone()));
                }
            }
        },
    }
    ElementPath(segments)
}

/// The directives applied to `element_id`. Directive definitions themselves
/// carry none, and unresolvable ids yield an empty slice.
pub(crate) fn element_directives<'a>(
    types: &'a TypesMap,
    directives: &'a DirectivesMap,
    schema_def: Option<&'a SchemaDefinition>,
    element_id: ElementId,
) -> &'a [DirectiveUsage] {
    let usages = match element_id {
        ElementId::Directive(_) => None,

        ElementId::DirectiveArgument { directive_id, argument } =>
            directives.get_index(directive_id.index())
                .and_then(|(_, directive_def)| directive_def.arguments.get_index(argument))
                .map(|(_, arg)| arg.directives.as_slice()),

        ElementId::EnumValue { type_id, value } =>
            types.get_index(type_id.index())
                .and_then(|(_, type_def)| type_def.as_enum())
                .and_then(|enum_type| enum_type.values.get_index(value))
                .map(|(_, value_def)| value_def.directives.as_slice()),

        ElementId::Field { type_id, field } =>
            types.get_index(type_id.index())
                .and_then(|(_, type_def)| type_def.as_object_or_interface())
                .and_then(|data| data.fields.get_index(field))
                .map(|(_, field_def)| field_def.directives.as_slice()),

        ElementId::FieldArgument { type_id, field, argument } =>
            types.get_index(type_id.index())
                .and_then(|(_, type_def)| type_def.as_object_or_interface())
                .and_then(|data| data.fields.get_index(field))
                .and_then(|(_, field_def)| field_def.arguments.get_index(argument))
                .map(|(_, arg)| arg.directives.as_slice()),

        ElementId::InputField { type_id, field } =>
            types.get_index(type_id.index())
                .and_then(|(_, type_def)| type_def.as_input_object())
                .and_then(|input_obj| input_obj.fields.get_index(field))
                .map(|(_, input_field)| input_field.directives.as_slice()),

        ElementId::Schema =>
            schema_def.map(|schema_def| schema_def.directives.as_slice()),

        ElementId::Type(type_id) =>
            types.get_index(type_id.index())
                .map(|(_, type_def)| type_def.directives.as_slice()),
    };
    usages.unwrap_or(&[])
}
