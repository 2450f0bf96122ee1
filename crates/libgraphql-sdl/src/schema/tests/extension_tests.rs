use crate::ast;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::schema::tests::test_utils::build_messages;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn schema_extension(mutation: Option<&str>) -> ast::SchemaExtension {
    ast::SchemaExtension {
        directives: vec![],
        mutation: mutation.map(|type_name| type_name.to_string()),
        position: ast::Pos { line: 1, column: 1 },
        query: None,
        subscription: None,
    }
}

mod type_extensions {
    use super::*;

    #[test]
    fn object_extension_appends_fields() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int } extend type Query { b: String }")?
            .build()?;

        let query = schema.query_type().unwrap().as_object().unwrap();
        assert_eq!(query.fields().keys().collect::<Vec<_>>(), vec!["a", "b"]);

        Ok(())
    }

    #[test]
    fn extension_may_precede_definition() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "extend type Query { b: String }")?
            .load_str(None, "type Query { a: Int }")?
            .build()?;

        let query = schema.query_type().unwrap().as_object().unwrap();
        assert_eq!(query.fields().keys().collect::<Vec<_>>(), vec!["a", "b"]);

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() {
        assert_eq!(build_messages("type Query { a: Int } extend type Foo { b: Int }"), vec![
            "Cannot extend object 'Foo' because it is not defined.",
        ]);
    }

    #[test]
    fn extension_of_wrong_kind() {
        assert_eq!(build_messages(concat!(
            "type Query { a: Int }\n",
            "input Foo { a: Int }\n",
            "extend type Foo { b: Int }\n",
        )), vec![
            "Cannot extend object 'Foo' because it is defined as an input object.",
        ]);
    }

    #[test]
    fn redeclared_field_without_changes() {
        assert_eq!(build_messages("type Query { a: Int } extend type Query { a: Int }"), vec![
            "Extension of field 'a' of object 'Query' makes no changes.",
        ]);
    }

    #[test]
    fn redeclared_field_with_new_type() {
        assert_eq!(build_messages("type Query { a: Int } extend type Query { a: String }"), vec![
            "Extension of field 'a' of object 'Query' changes its type from 'Int' to 'String'.",
        ]);
    }

    #[test]
    fn redeclared_field_gains_arguments_and_directives() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { a: Int }\n",
                "extend type Query { a(x: Int): Int @deprecated }\n",
            ))?
            .build()?;

        let query = schema.query_type().unwrap().as_object().unwrap();
        let field = query.fields().get("a").unwrap();
        assert!(field.arguments().contains_key("x"));
        assert_eq!(field.directives().len(), 1);

        Ok(())
    }

    #[test]
    fn redeclared_argument_gains_directive() -> Result<()> {
        let sdl = concat!(
            "directive @d on ARGUMENT_DEFINITION\n",
            "type Query { f(a: Int): Int }\n",
            "extend type Query { f(a: Int @d): Int }\n",
        );
        assert!(build_messages(sdl).is_empty());

        let schema = SchemaBuilder::new().load_str(None, sdl)?.build()?;
        let query = schema.query_type().unwrap().as_object().unwrap();
        let arg = query.fields().get("f").unwrap().arguments().get("a").unwrap();
        assert_eq!(arg.directives().len(), 1);
        assert_eq!(arg.directives()[0].name(), "d");
        assert_eq!(schema.lookup_directive("d").unwrap().references().len(), 1);

        Ok(())
    }

    #[test]
    fn argument_directive_kept_alongside_new_argument() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "directive @d on ARGUMENT_DEFINITION\n",
                "type Query { f(a: Int): Int }\n",
                "extend type Query { f(a: Int @d, b: Int): Int }\n",
            ))?
            .build()?;

        let query = schema.query_type().unwrap().as_object().unwrap();
        let field = query.fields().get("f").unwrap();
        assert_eq!(field.arguments().keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(field.arguments().get("a").unwrap().directives().len(), 1);
        assert_eq!(schema.lookup_directive("d").unwrap().references().len(), 1);

        let reparsed = SchemaBuilder::new()
            .load_str(None, &schema.to_sdl())?
            .build()?;
        let query = reparsed.query_type().unwrap().as_object().unwrap();
        let arg = query.fields().get("f").unwrap().arguments().get("a").unwrap();
        assert_eq!(arg.directives().len(), 1);

        Ok(())
    }

    #[test]
    fn interface_extension_appends_fields() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "interface Node { id: ID }\n",
                "extend interface Node { name: String }\n",
                "type Query implements Node { id: ID name: String }\n",
            ))?
            .build()?;

        let node = schema.lookup_type("Node").unwrap().as_interface().unwrap();
        assert_eq!(node.fields().keys().collect::<Vec<_>>(), vec!["id", "name"]);

        Ok(())
    }

    #[test]
    fn interface_extension_field_must_be_implemented() {
        assert_eq!(build_messages(concat!(
            "interface Node { id: ID }\n",
            "extend interface Node { name: String }\n",
            "type Query implements Node { id: ID }\n",
        )), vec![
            "Object 'Query' is missing field 'name' declared on interface 'Node'.",
        ]);
    }

    #[test]
    fn implements_added_by_extension() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "interface Node { id: ID }\n",
                "type Query { id: ID }\n",
                "extend type Query implements Node { other: Int }\n",
            ))?
            .build()?;

        let query = schema.query_type().unwrap().as_object().unwrap();
        assert_eq!(query.interface_names(), vec!["Node"]);

        Ok(())
    }

    #[test]
    fn enum_extension_skips_duplicate_values() -> Result<()> {
        let sdl = "enum E { A } extend enum E { A B } type Query { e: E }";
        assert_eq!(build_messages(sdl), vec![
            "Enum value 'A' is already declared on enum 'E'.",
        ]);

        let schema = SchemaBuilder::new()
            .load_str(None, "enum E { A } extend enum E { B } type Query { e: E }")?
            .build()?;
        let enum_type = schema.lookup_type("E").unwrap().as_enum().unwrap();
        assert_eq!(enum_type.values().keys().collect::<Vec<_>>(), vec!["A", "B"]);

        Ok(())
    }

    #[test]
    fn union_and_input_extensions() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type A { a: Int }\n",
                "type B { b: Int }\n",
                "union U = A\n",
                "extend union U = B\n",
                "input In { a: Int }\n",
                "extend input In { b: Int }\n",
                "type Query { u: U f(arg: In): Int }\n",
            ))?
            .build()?;

        let union_type = schema.lookup_type("U").unwrap().as_union().unwrap();
        assert_eq!(union_type.member_type_names(), vec!["A", "B"]);
        let input_obj = schema.lookup_type("In").unwrap().as_input_object().unwrap();
        assert_eq!(input_obj.fields().keys().collect::<Vec<_>>(), vec!["a", "b"]);

        Ok(())
    }

    #[test]
    fn scalar_extension_adds_directives() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "directive @tag on SCALAR\n",
                "scalar S\n",
                "extend scalar S @tag\n",
                "type Query { s: S }\n",
            ))?
            .build()?;

        assert_eq!(schema.lookup_type("S").unwrap().directives().len(), 1);

        Ok(())
    }
}

mod input_field_extensions {
    use super::*;

    const BASE: &str = concat!(
        "directive @d on INPUT_FIELD_DEFINITION\n",
        "input In { a: Int }\n",
        "type Query { f(arg: In): Int }\n",
    );

    #[test]
    fn redeclared_input_field_without_changes() {
        let sdl = format!("{BASE}extend input In {{ a: Int }}\n");
        assert_eq!(build_messages(&sdl), vec![
            "Extension of input field 'a' of input object 'In' makes no changes.",
        ]);
    }

    #[test]
    fn redeclared_input_field_with_new_type() {
        let sdl = format!("{BASE}extend input In {{ a: String }}\n");
        assert_eq!(build_messages(&sdl), vec![
            "Extension of input field 'a' of input object 'In' changes its type from 'Int' to 'String'.",
        ]);
    }

    #[test]
    fn redeclared_input_field_gains_directive() -> Result<()> {
        let sdl = format!("{BASE}extend input In {{ a: Int @d }}\n");
        let schema = SchemaBuilder::new()
            .load_str(None, &sdl)?
            .build()?;

        let input_obj = schema.lookup_type("In").unwrap().as_input_object().unwrap();
        assert_eq!(input_obj.fields().keys().collect::<Vec<_>>(), vec!["a"]);
        let field = input_obj.fields().get("a").unwrap();
        assert_eq!(field.directives().len(), 1);
        assert_eq!(field.directives()[0].name(), "d");

        Ok(())
    }
}

mod schema_extensions {
    use super::*;

    #[test]
    fn extension_adds_operation() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: Root }\n",
                "type Root { a: Int }\n",
                "type Mutation { b: Int }\n",
            ))?
            .add(vec![schema_extension(Some("Mutation"))])
            .build()?;

        assert_eq!(schema.mutation_type().unwrap().name(), "Mutation");
        assert_eq!(schema.root().unwrap().definition().unwrap().operations().len(), 2);

        Ok(())
    }

    #[test]
    fn extension_without_schema() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }")?
            .add(vec![schema_extension(Some("Query"))])
            .build()
            .unwrap_err();

        assert_eq!(err.to_string(), "Cannot extend schema because no schema is defined.");

        Ok(())
    }

    #[test]
    fn empty_extension() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(None, "schema { query: Root } type Root { a: Int }")?
            .add(vec![schema_extension(None)])
            .build()
            .unwrap_err();

        assert_eq!(err.to_string(), "Extension of schema makes no changes.");

        Ok(())
    }
}
