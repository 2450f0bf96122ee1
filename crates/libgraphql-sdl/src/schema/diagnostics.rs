use crate::loc;
use crate::schema::ElementPath;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaValidationError;
use crate::schema::ValidationErrorKind;

/// Collects the non-fatal errors reported by every pass of one build.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    errors: Vec<SchemaValidationError>,
}
impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn report(
        &mut self,
        kind: ValidationErrorKind,
        location: &loc::SourceLocation,
        path: ElementPath,
    ) {
        log::trace!("{location}: {kind}");
        self.errors.push(SchemaValidationError {
            kind,
            location: Some(location.clone()),
            path,
        });
    }

    /// Reports a problem with no single source location (e.g. something that
    /// is missing from the schema altogether).
    pub fn report_unlocated(&mut self, kind: ValidationErrorKind, path: ElementPath) {
        log::trace!("{kind}");
        self.errors.push(SchemaValidationError {
            kind,
            location: None,
            path,
        });
    }

    /// Zero errors is success; exactly one is surfaced on its own; more are
    /// surfaced together in report order.
    pub fn into_result(mut self) -> Result<(), SchemaBuildError> {
        match self.errors.len() {
            0 => Ok(()),
            1 => match self.errors.pop() {
                Some(error) => Err(SchemaBuildError::Validation(error)),
                None => Ok(()),
            },
            _ => Err(SchemaBuildError::ValidationErrors {
                errors: self.errors,
            }),
        }
    }
}
