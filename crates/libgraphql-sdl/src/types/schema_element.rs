use crate::directives::DirectiveUsage;
use crate::loc;

/// Accessors shared by every named, directive-annotatable definition in a
/// schema (types, fields, arguments, input fields, enum values and directive
/// definitions).
pub trait SchemaElement {
    /// The description (doc-string) declared for this element, if any.
    fn description(&self) -> Option<&str>;

    /// Directives applied to this element, in declaration order. Directives
    /// added by an extension follow the ones on the base declaration.
    fn directives(&self) -> &[DirectiveUsage];

    fn location(&self) -> &loc::SourceLocation;

    fn name(&self) -> &str;
}
