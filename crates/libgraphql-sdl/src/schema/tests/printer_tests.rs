use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const KITCHEN_SINK: &str = concat!(
    "schema @meta { query: Root mutation: Mut }\n",
    "directive @meta on SCHEMA\n",
    "directive @tag(name: String! = \"none\") repeatable on OBJECT | FIELD_DEFINITION\n",
    "\"\"\"A thing with an id.\"\"\"\n",
    "interface Node { id: ID! }\n",
    "type Root implements Node @tag(name: \"root\") {\n",
    "  id: ID!\n",
    "  \"Looks things up.\"\n",
    "  search(filter: Filter = {limit: 10}, kinds: [Kind!] = [ONE]): [Result!]! @tag\n",
    "  old: String @deprecated(reason: \"use search\")\n",
    "}\n",
    "type Mut { touch(id: ID!): Root }\n",
    "type Thing implements Node { id: ID! }\n",
    "union Result = Root | Thing\n",
    "input Filter { limit: Int = 5 scale: Float text: String }\n",
    "enum Kind { ONE TWO @deprecated }\n",
    "scalar Url @specifiedBy(url: \"https://example.com\")\n",
    "extend type Thing { url: Url }\n",
);

#[test]
fn printed_schema_round_trips() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, KITCHEN_SINK)?
        .build()?;
    let printed = schema.to_sdl();

    let reparsed = SchemaBuilder::new()
        .load_str(None, &printed)?
        .build()?;

    assert_eq!(reparsed.to_sdl(), printed);
    assert_eq!(
        reparsed.all_types().keys().collect::<Vec<_>>(),
        schema.all_types().keys().collect::<Vec<_>>(),
    );
    assert_eq!(
        reparsed.all_directives().keys().collect::<Vec<_>>(),
        schema.all_directives().keys().collect::<Vec<_>>(),
    );
    assert_eq!(reparsed.query_type().unwrap().name(), "Root");
    assert_eq!(reparsed.mutation_type().unwrap().name(), "Mut");

    let thing = reparsed.lookup_type("Thing").unwrap().as_object().unwrap();
    assert!(thing.fields().contains_key("url"));

    Ok(())
}

#[test]
fn builtins_are_not_printed() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, "type Query { a: Int }")?
        .build()?;
    let printed = schema.to_sdl();

    assert!(printed.contains("type Query"));
    assert!(!printed.contains("scalar Int"));
    assert!(!printed.contains("directive @deprecated"));

    Ok(())
}

#[test]
fn synthesized_root_prints_no_schema_block() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, "type Query { a: Int }")?
        .build()?;

    assert!(!schema.to_sdl().contains("schema"));

    Ok(())
}
