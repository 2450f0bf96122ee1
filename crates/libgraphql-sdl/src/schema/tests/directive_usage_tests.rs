use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::schema::tests::test_utils::build_messages;
use crate::types::ElementId;
use crate::Value;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn undefined_directive() {
    assert_eq!(build_messages("type Query { a: Int @nope }"), vec![
        "Undefined directive '@nope' applied to field 'a' of object 'Query'.",
    ]);
}

#[test]
fn directive_at_illegal_location() {
    assert_eq!(build_messages("directive @onEnum on ENUM type Query @onEnum { a: Int }"), vec![
        "Directive '@onEnum' is not allowed at location OBJECT (object 'Query').",
    ]);
}

#[test]
fn executable_builtin_on_type_system_element() {
    assert_eq!(build_messages("type Query { a: Int @include(if: true) }"), vec![
        "Directive '@include' is not allowed at location FIELD_DEFINITION (field 'a' of \
        object 'Query').",
    ]);
}

#[test]
fn unrepeatable_directive_applied_twice() {
    assert_eq!(build_messages("directive @tag on OBJECT type Query @tag @tag { a: Int }"), vec![
        "Directive '@tag' is not repeatable but is applied more than once to object 'Query'.",
    ]);
}

#[test]
fn repeatable_directive_applied_twice() {
    assert!(build_messages("directive @tag repeatable on OBJECT type Query @tag @tag { a: Int }").is_empty());
}

#[test]
fn unknown_argument() {
    assert_eq!(build_messages(concat!(
        "directive @tag(name: String) on OBJECT\n",
        "type Query @tag(nme: \"x\") { a: Int }\n",
    )), vec![
        "Directive '@tag' applied to object 'Query' has no argument named 'nme'.",
    ]);
}

#[test]
fn missing_required_argument() {
    assert_eq!(build_messages(concat!(
        "directive @tag(name: String!) on OBJECT\n",
        "type Query @tag { a: Int }\n",
    )), vec![
        "Directive '@tag' applied to object 'Query' requires argument 'name'.",
    ]);
}

#[test]
fn required_argument_with_default_may_be_omitted() {
    assert!(build_messages(concat!(
        "directive @tag(name: String! = \"none\") on OBJECT\n",
        "type Query @tag { a: Int }\n",
    )).is_empty());
}

#[test]
fn null_for_required_argument() {
    assert_eq!(build_messages(concat!(
        "directive @tag(name: String!) on OBJECT\n",
        "type Query @tag(name: null) { a: Int }\n",
    )), vec![
        "Directive '@tag' applied to object 'Query' requires a non-null value for argument \
        'name'.",
    ]);
}

#[test]
fn incompatible_argument_value() {
    assert_eq!(build_messages(concat!(
        "directive @tag(name: String!) on OBJECT\n",
        "type Query @tag(name: 5) { a: Int }\n",
    )), vec![
        "Value 5 for argument 'name' of directive '@tag' applied to object 'Query' is not \
        compatible with type 'String!'.",
    ]);
}

#[test]
fn argument_supplied_twice() {
    assert_eq!(build_messages(concat!(
        "directive @tag(name: String) on OBJECT\n",
        "type Query @tag(name: \"a\", name: \"b\") { a: Int }\n",
    )), vec![
        "Directive '@tag' applied to object 'Query' supplies argument 'name' more than once.",
    ]);
}

#[test]
fn specified_by_on_custom_scalar() {
    assert!(build_messages(concat!(
        "scalar Url @specifiedBy(url: \"https://tools.ietf.org/html/rfc3986\")\n",
        "type Query { home: Url }\n",
    )).is_empty());
}

#[test]
fn usages_link_back_to_definitions() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, concat!(
            "directive @tag(name: String) repeatable on OBJECT | FIELD_DEFINITION\n",
            "type Query @tag(name: \"q\") {\n",
            "  a: Int @tag(name: \"a\") @tag\n",
            "}\n",
        ))?
        .build()?;

    let tag = schema.lookup_directive("tag").unwrap();
    let tag_id = schema.all_directives().get_index_of("tag").unwrap();
    let query_id = schema.type_id("Query").unwrap();
    assert_eq!(tag.references().len(), 3);

    let type_usage = schema.directive_usage(tag.references()[0]).unwrap();
    assert_eq!(type_usage.parent(), Some(ElementId::Type(query_id)));
    assert_eq!(type_usage.definition().map(|id| id.index()), Some(tag_id));
    assert_eq!(type_usage.arguments().get("name"), Some(&Value::String("q".to_string())));

    let field_id = ElementId::Field { type_id: query_id, field: 0 };
    assert_eq!(schema.element_directives(field_id).len(), 2);
    assert_eq!(schema.element_path(field_id).to_string(), "field 'a' of object 'Query'");
    let last_usage = schema.directive_usage(tag.references()[2]).unwrap();
    assert_eq!(last_usage.parent(), Some(field_id));
    assert!(last_usage.arguments().is_empty());

    Ok(())
}

#[test]
fn schema_block_directives() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, concat!(
            "directive @meta on SCHEMA\n",
            "schema @meta { query: Root }\n",
            "type Root { a: Int }\n",
        ))?
        .build()?;

    let meta = schema.lookup_directive("meta").unwrap();
    assert_eq!(meta.references().len(), 1);
    assert_eq!(meta.references()[0].owner, ElementId::Schema);
    assert_eq!(schema.element_directives(ElementId::Schema)[0].name(), "meta");

    Ok(())
}
