use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;

/// Messages of every diagnostic reported by `build()`, in report order.
/// Empty when the build succeeds.
pub(super) fn build_messages(sdl: &str) -> Vec<String> {
    let result = SchemaBuilder::new()
        .load_str(None, sdl)
        .and_then(SchemaBuilder::build);
    messages(result.err())
}

/// Like [`build_messages`], but via `validate()` (no root required).
pub(super) fn validate_messages(sdl: &str) -> Vec<String> {
    let mut builder = SchemaBuilder::new()
        .load_str(None, sdl)
        .expect("schema parses");
    let result = builder.validate().map(|_| ());
    messages(result.err())
}

fn messages(err: Option<SchemaBuildError>) -> Vec<String> {
    let Some(err) = err else {
        return vec![];
    };
    let errors = err.validation_errors();
    assert!(!errors.is_empty(), "unexpected fatal error: {err}");
    errors.iter().map(|error| error.to_string()).collect()
}
