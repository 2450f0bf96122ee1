use crate::ast;
use crate::directives::BUILTIN_SDL;
use crate::file_reader;
use crate::loc;
use crate::passes;
use crate::passes::SchemaGraph;
use crate::schema::Diagnostics;
use crate::schema::Schema;
use crate::schema::SchemaValidationError;
use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// One buffered declaration plus the source it came from.
#[derive(Clone, Debug)]
pub(crate) struct SourcedDeclaration {
    pub(crate) built_in: bool,
    pub(crate) declaration: ast::Declaration,
    pub(crate) file_path: Option<PathBuf>,
}
impl SourcedDeclaration {
    pub(crate) fn location(&self, pos: ast::Pos) -> loc::SourceLocation {
        if self.built_in {
            loc::SourceLocation::GraphQLBuiltIn
        } else {
            loc::FilePosition::from_pos(self.file_path.as_deref(), pos).into()
        }
    }
}

fn builtin_declarations() -> Result<&'static [SourcedDeclaration]> {
    static BUILTINS: OnceLock<std::result::Result<Vec<SourcedDeclaration>, String>> =
        OnceLock::new();
    BUILTINS.get_or_init(|| {
        let doc = ast::schema::parse(BUILTIN_SDL).map_err(|err| err.to_string())?;
        Ok(doc.definitions.into_iter().map(|def| SourcedDeclaration {
            built_in: true,
            declaration: def.into(),
            file_path: None,
        }).collect())
    }).as_deref().map_err(|err| SchemaBuildError::ParseError {
        file: PathBuf::from("<graphql built-in>"),
        err: err.clone(),
    })
}

/// Accumulates SDL declarations from any number of documents and analyzes
/// them into a [`Schema`].
///
/// Adding declarations never triggers analysis. Every call to
/// [`validate()`](Self::validate) or [`build()`](Self::build) starts over
/// from the buffered declarations, so nothing from an earlier (possibly
/// failed) run carries into the next one.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    declarations: Vec<SourcedDeclaration>,
    str_load_counter: u16,
    validated: Option<Schema>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends declarations that have no backing file.
    pub fn add<D: Into<ast::Declaration>>(
        self,
        declarations: impl IntoIterator<Item = D>,
    ) -> Self {
        self.add_from(None, declarations)
    }

    /// Appends every definition of an already-parsed schema document.
    pub fn add_document(
        self,
        file_path: Option<PathBuf>,
        document: ast::schema::Document,
    ) -> Self {
        self.add_from(file_path, document.definitions)
    }

    /// Appends declarations whose locations should be attributed to
    /// `file_path`.
    pub fn add_from<D: Into<ast::Declaration>>(
        mut self,
        file_path: Option<PathBuf>,
        declarations: impl IntoIterator<Item = D>,
    ) -> Self {
        self.validated = None;
        self.declarations.extend(declarations.into_iter().map(|decl| SourcedDeclaration {
            built_in: false,
            declaration: decl.into(),
            file_path: file_path.clone(),
        }));
        self
    }

    /// Analyzes the buffered declarations and requires a root operation
    /// type. A schema without a `Query` type (or a schema block declaring
    /// the query operation) fails here, together with every other problem
    /// found in the same run.
    pub fn build(self) -> Result<Schema> {
        self.run_passes(true)
    }

    pub fn declaration_count(&self) -> usize {
        self.declarations.len()
    }

    /// Whether the most recent [`validate()`](Self::validate) succeeded and
    /// nothing was added since.
    pub fn is_validated(&self) -> bool {
        self.validated.is_some()
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    /// Parses `content` as SDL and appends its declarations. Strings without
    /// a `file_path` are labelled `str://0`, `str://1`, and so on.
    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;

        Ok(self.add_document(Some(file_path), ast_doc))
    }

    /// The schema produced by the last successful
    /// [`validate()`](Self::validate).
    pub fn schema(&self) -> Option<&Schema> {
        self.validated.as_ref()
    }

    /// Analyzes the buffered declarations without requiring a root
    /// operation type; a root is still resolved whenever the schema declares
    /// or implies one.
    ///
    /// On failure the builder holds no schema at all.
    pub fn validate(&mut self) -> Result<&Schema> {
        self.validated = None;
        let schema = self.run_passes(false)?;
        Ok(self.validated.insert(schema))
    }

    fn run_passes(&self, require_root: bool) -> Result<Schema> {
        let builtins = builtin_declarations()?;
        let mut diagnostics = Diagnostics::new();
        let mut graph = SchemaGraph::default();

        passes::convert(
            &mut graph,
            builtins.iter().chain(self.declarations.iter()),
            &mut diagnostics,
        )?;
        passes::link(&mut graph, &mut diagnostics);
        passes::validate(&graph, &mut diagnostics);
        passes::resolve_root(&mut graph, require_root, &mut diagnostics);

        log::debug!(
            "Analyzed {} declarations into {} types and {} directives ({} errors).",
            self.declarations.len(),
            graph.types.len(),
            graph.directives.len(),
            diagnostics.len(),
        );
        diagnostics.into_result()?;
        Ok(graph.into_schema())
    }
}

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error(
        "Found a {definition_kind} definition at {location}, but only \
        type-system definitions may appear in a schema"
    )]
    ExecutableDefinitionInSchema {
        definition_kind: &'static str,
        location: loc::SourceLocation,
    },

    #[error("Error parsing schema string `{}`: {err}", file.display())]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Failure while trying to read a schema file from disk")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error("{0}")]
    Validation(SchemaValidationError),

    #[error(
        "Encountered the following schema validation errors:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    ValidationErrors {
        errors: Vec<SchemaValidationError>,
    },
}
impl SchemaBuildError {
    /// Every non-fatal diagnostic carried by this error, in report order.
    /// Empty for fatal errors.
    pub fn validation_errors(&self) -> &[SchemaValidationError] {
        match self {
            Self::Validation(error) => std::slice::from_ref(error),
            Self::ValidationErrors { errors } => errors.as_slice(),
            Self::ExecutableDefinitionInSchema { .. }
                | Self::ParseError { .. }
                | Self::SchemaFileReadError(_) => &[],
        }
    }
}
