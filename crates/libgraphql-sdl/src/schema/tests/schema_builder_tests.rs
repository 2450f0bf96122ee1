use crate::ast;
use crate::loc;
use crate::schema::PathSegment;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::schema::tests::test_utils::build_messages;
use crate::schema::tests::test_utils::validate_messages;
use crate::schema::ValidationErrorKind;
use crate::types::GraphQLTypeKind;
use crate::ReadContentError;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod basics {
    use super::*;

    #[test]
    fn build_without_declarations() -> Result<()> {
        let schema = SchemaBuilder::new().build();

        let err = schema.unwrap_err();
        assert!(matches!(
            err,
            SchemaBuildError::Validation(ref error)
                if error.kind() == &ValidationErrorKind::QueryTypeNotDefined,
        ));
        assert_eq!(err.validation_errors()[0].location(), None);

        Ok(())
    }

    #[test]
    fn validate_without_declarations() -> Result<()> {
        let mut builder = SchemaBuilder::new();
        let schema = builder.validate()?;

        assert!(schema.root().is_none());
        assert_eq!(schema.all_types().len(), 5);
        assert_eq!(schema.all_directives().len(), 4);

        Ok(())
    }

    #[test]
    fn duplicate_directive_across_documents() -> Result<()> {
        let mut builder = SchemaBuilder::new()
            .load_str(None, "directive @foo on ENUM")?
            .load_str(None, "directive @foo on ENUM")?;

        let err = builder.validate().unwrap_err();
        assert_eq!(err.to_string(), "Directive 'foo' is already defined.");
        assert_eq!(err.validation_errors().len(), 1);
        assert_eq!(
            err.validation_errors()[0].location(),
            Some(&loc::SourceLocation::Schema(loc::FilePosition {
                col: 1,
                file: Some(Box::new(PathBuf::from("str://1"))),
                line: 1,
            })),
        );

        Ok(())
    }

    #[test]
    fn non_null_self_referencing_input_object() {
        assert_eq!(validate_messages("input foo { fizz: foo! }"), vec![
            "Input object 'foo' has circular reference requiring a non-null value.",
        ]);
    }

    #[test]
    fn nullable_self_referencing_input_object() {
        assert!(validate_messages("input foo { fizz: foo }").is_empty());
    }

    #[test]
    fn undefined_field_type() {
        assert_eq!(build_messages("type Query { fizz: Int } type foo { fizz: Buzz }"), vec![
            "Undefined type 'Buzz' for field 'fizz' of object 'foo'.",
        ]);
    }

    #[test]
    fn many_errors_are_aggregated_in_report_order() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(None, "type Query { a: Foo b: Bar }")?
            .build()
            .unwrap_err();

        assert!(matches!(err, SchemaBuildError::ValidationErrors { .. }));
        let messages: Vec<String> = err.validation_errors().iter()
            .map(|error| error.to_string())
            .collect();
        assert_eq!(messages, vec![
            "Undefined type 'Foo' for field 'a' of object 'Query'.",
            "Undefined type 'Bar' for field 'b' of object 'Query'.",
        ]);
        assert!(err.to_string().starts_with("Encountered the following schema validation errors:"));

        Ok(())
    }

    #[test]
    fn diagnostic_paths_render_as_breadcrumbs() -> Result<()> {
        let mut builder = SchemaBuilder::new()
            .load_str(None, concat!(
                "directive @example(arg1: Int) on INPUT_FIELD_DEFINITION\n",
                "input foo { fizz: Int @example(arg1: \"x\") }\n",
            ))?;

        let err = builder.validate().unwrap_err();
        let error = &err.validation_errors()[0];
        assert_eq!(
            error.path().breadcrumb(),
            "input object foo, input field fizz, directive @example, argument arg1",
        );
        assert_eq!(error.path().segments()[0], PathSegment::Type {
            kind: GraphQLTypeKind::InputObject,
            name: "foo".to_string(),
        });
        assert_eq!(
            error.to_string(),
            "Value \"x\" for argument 'arg1' of directive '@example' applied to input \
            field 'fizz' of input object 'foo' is not compatible with type 'Int'.",
        );

        Ok(())
    }
}

mod builder_state {
    use super::*;

    #[test]
    fn validate_is_deterministic() -> Result<()> {
        let mut builder = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { a: Foo }\n",
                "input A { b: B! }\n",
                "input B { a: A! }\n",
                "interface I { f: Int }\n",
                "type T implements I { g: Int }\n",
            ))?;

        let first = builder.validate().unwrap_err();
        let second = builder.validate().unwrap_err();
        assert_eq!(first.validation_errors(), second.validation_errors());
        assert_eq!(first.validation_errors().len(), 4);

        Ok(())
    }

    #[test]
    fn failed_validation_leaves_no_schema() -> Result<()> {
        let mut builder = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }")?;
        builder.validate()?;
        assert!(builder.is_validated());
        assert!(builder.schema().is_some());

        let mut builder = builder.load_str(None, "type Foo { b: Nope }")?;
        assert!(!builder.is_validated());
        assert!(builder.validate().is_err());
        assert!(!builder.is_validated());
        assert!(builder.schema().is_none());

        Ok(())
    }

    #[test]
    fn adding_declarations_resets_validation() -> Result<()> {
        let mut builder = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }")?;
        builder.validate()?;

        let mut builder = builder.load_str(None, "type Foo { b: Int }")?;
        assert!(builder.schema().is_none());
        assert_eq!(builder.declaration_count(), 2);
        let schema = builder.validate()?;
        assert!(schema.lookup_type("Foo").is_some());

        Ok(())
    }

    #[test]
    fn executable_definitions_are_fatal() -> Result<()> {
        let query_doc = ast::query::parse("query Q { a }").expect("query parses");
        let err = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }")?
            .add(query_doc.definitions)
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            SchemaBuildError::ExecutableDefinitionInSchema {
                definition_kind: "query operation",
                location: loc::SourceLocation::Schema(_),
            },
        ));
        assert!(err.validation_errors().is_empty());

        Ok(())
    }

    #[test]
    fn invalid_syntax_is_a_parse_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "this is not valid syntax");

        assert!(matches!(
            result,
            Err(SchemaBuildError::ParseError { ref file, .. }) if file == Path::new("str://0"),
        ));
    }

    #[test]
    fn load_file_reads_from_disk() -> Result<()> {
        let file_path = std::env::temp_dir().join(format!(
            "libgraphql_sdl_load_file_{}.graphql",
            std::process::id(),
        ));
        std::fs::write(&file_path, "type Query { a: Int }").expect("write temp schema");

        let schema = SchemaBuilder::new()
            .load_file(&file_path)?
            .build();
        let _ = std::fs::remove_file(&file_path);

        let schema = schema?;
        let query_type = schema.query_type().unwrap();
        assert_eq!(
            query_type.location().file_position()
                .and_then(|file_pos| file_pos.file.as_deref()),
            Some(&file_path),
        );

        Ok(())
    }

    #[test]
    fn load_missing_file() {
        let result = SchemaBuilder::new()
            .load_file("/this/path/does/not/exist.graphql");

        assert!(matches!(
            result,
            Err(SchemaBuildError::SchemaFileReadError(ref err))
                if matches!(**err, ReadContentError::PathIsNotAFile(_)),
        ));
    }
}

mod type_rules {
    use super::*;

    #[test]
    fn duplicate_type_definition() {
        assert_eq!(build_messages("type Query { a: Int } type Query { b: Int }"), vec![
            "Type 'Query' is already defined.",
        ]);
    }

    #[test]
    fn duplicate_field() {
        assert_eq!(build_messages("type Query { a: Int a: String }"), vec![
            "Field 'a' is already declared on object 'Query'.",
        ]);
    }

    #[test]
    fn reserved_name_prefix() {
        assert_eq!(validate_messages("type __Foo { a: Int }"), vec![
            "Object '__Foo' must not have a name starting with '__'.",
        ]);
    }

    #[test]
    fn object_without_fields() {
        assert_eq!(validate_messages("type Foo"), vec![
            "Object 'Foo' must define at least one field.",
        ]);
    }

    #[test]
    fn input_type_in_output_position() {
        assert_eq!(build_messages("input In { a: Int } type Query { f: In }"), vec![
            "Field 'f' of object 'Query' must have an output type, but 'In' is an input object.",
        ]);
    }

    #[test]
    fn output_type_in_input_position() {
        assert_eq!(build_messages("type Out { a: Int } type Query { f(arg: Out): Int }"), vec![
            "Argument 'arg' of field 'f' of object 'Query' must have an input type, but 'Out' \
            is an object.",
        ]);
    }

    #[test]
    fn incompatible_default_value() {
        assert_eq!(build_messages("type Query { f(arg: Int = \"x\"): Int }"), vec![
            "Default value \"x\" of argument 'arg' of field 'f' of object 'Query' is not \
            compatible with type 'Int'.",
        ]);
    }

    #[test]
    fn deprecated_required_argument() {
        assert_eq!(build_messages("type Query { f(arg: Int! @deprecated): Int }"), vec![
            "Directive '@deprecated' cannot be applied to argument 'arg' of field 'f' of \
            object 'Query' because it is required.",
        ]);
    }

    #[test]
    fn deprecated_argument_with_default() {
        assert!(build_messages("type Query { f(arg: Int! = 1 @deprecated): Int }").is_empty());
    }

    #[test]
    fn union_member_must_be_object() {
        assert_eq!(build_messages(concat!(
            "scalar S\n",
            "type A { a: Int }\n",
            "union U = A | S\n",
            "type Query { u: U }\n",
        )), vec![
            "Member 'S' of union 'U' must be an object type, but is a scalar.",
        ]);
    }

    #[test]
    fn undefined_union_member() {
        assert_eq!(build_messages("type Query { u: U } union U = A"), vec![
            "Undefined type 'A' for member of union 'U'.",
        ]);
    }
}
