use crate::schema::OperationKind;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::schema::tests::test_utils::build_messages;
use crate::schema::tests::test_utils::validate_messages;
use crate::types::ElementId;
use crate::types::TypeReference;
use crate::types::TypeReferenceKind;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod auto_detection {
    use super::*;

    #[test]
    fn unreferenced_query_type_becomes_root() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { fizz: Int }")?
            .build()?;

        let root = schema.root().unwrap();
        assert!(root.is_synthesized());
        assert!(root.definition().is_none());
        assert_eq!(schema.query_type().unwrap().name(), "Query");
        assert!(schema.mutation_type().is_none());
        assert!(schema.subscription_type().is_none());
        assert_eq!(schema.query_type().unwrap().references(), &[TypeReference {
            kind: TypeReferenceKind::OperationType(OperationKind::Query),
            site: ElementId::Schema,
        }]);

        Ok(())
    }

    #[test]
    fn all_three_operation_types() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Mutation { m: Int }\n",
                "type Query { q: Int }\n",
                "type Subscription { s: Int }\n",
            ))?
            .build()?;

        assert_eq!(schema.query_type().unwrap().name(), "Query");
        assert_eq!(schema.mutation_type().unwrap().name(), "Mutation");
        assert_eq!(schema.subscription_type().unwrap().name(), "Subscription");
        assert_eq!(
            schema.operation_type(OperationKind::Mutation).unwrap().name(),
            "Mutation",
        );

        Ok(())
    }

    #[test]
    fn self_reference_is_allowed() {
        assert!(build_messages("type Query { me: Query }").is_empty());
    }

    #[test]
    fn query_referenced_elsewhere() {
        assert_eq!(build_messages("type Query { a: Int } type Foo { q: Query }"), vec![
            "Type 'Query' cannot be used as the query operation type because it is \
            referenced by field 'q' of object 'Foo'.",
        ]);
    }

    #[test]
    fn query_must_be_an_object() {
        assert_eq!(build_messages("scalar Query"), vec![
            "Type 'Query' of the query operation must be an object type, but is a scalar.",
        ]);
    }

    #[test]
    fn mutation_without_query() {
        assert_eq!(validate_messages("type Mutation { a: Int }"), vec![
            "Type 'Query' is not defined.",
        ]);
    }

    #[test]
    fn build_requires_query() {
        assert_eq!(build_messages("type Foo { a: Int }"), vec![
            "Type 'Query' is not defined.",
        ]);
    }

    #[test]
    fn validate_allows_rootless_schema() -> Result<()> {
        let mut builder = SchemaBuilder::new()
            .load_str(None, "type Foo { a: Int }")?;
        let schema = builder.validate()?;

        assert!(schema.root().is_none());
        assert!(schema.query_type().is_none());

        Ok(())
    }
}

mod explicit_schema {
    use super::*;

    #[test]
    fn operations_bind_named_types() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: Root mutation: Mut }\n",
                "type Root { a: Int }\n",
                "type Mut { b: Int }\n",
                "type Query { ignored: Int }\n",
            ))?
            .build()?;

        let root = schema.root().unwrap();
        assert!(!root.is_synthesized());
        assert_eq!(schema.query_type().unwrap().name(), "Root");
        assert_eq!(schema.mutation_type().unwrap().name(), "Mut");
        assert_eq!(
            root.definition().unwrap().operation(OperationKind::Query).unwrap().type_ref().name(),
            "Root",
        );
        assert!(!schema.lookup_type("Query").unwrap().is_rooted());

        Ok(())
    }

    #[test]
    fn explicit_query_may_be_referenced() {
        assert!(build_messages(concat!(
            "schema { query: Query }\n",
            "type Query { a: Int }\n",
            "type Foo { q: Query }\n",
        )).is_empty());
    }

    #[test]
    fn schema_without_query() {
        assert_eq!(build_messages("schema { mutation: Mut } type Mut { b: Int }"), vec![
            "Schema must declare the query operation type.",
        ]);
    }

    #[test]
    fn operation_types_not_distinct() {
        assert_eq!(build_messages("schema { query: Root mutation: Root } type Root { a: Int }"), vec![
            "The query and mutation operation types must be different types, but both are 'Root'.",
        ]);
    }

    #[test]
    fn operation_type_not_object() {
        assert_eq!(build_messages("schema { query: Root } interface Root { a: Int }"), vec![
            "Type 'Root' of the query operation must be an object type, but is an interface.",
        ]);
    }

    #[test]
    fn undefined_operation_type() {
        assert_eq!(build_messages("schema { query: Nope }"), vec![
            "Undefined type 'Nope' for the query operation.",
        ]);
    }

    #[test]
    fn duplicate_schema_definition() {
        assert_eq!(build_messages("schema { query: A } schema { query: A } type A { a: Int }"), vec![
            "Schema is already defined.",
        ]);
    }
}

#[test]
fn reachable_types_are_rooted() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, concat!(
            "type Query { a: A search(filter: Filter): [Result] }\n",
            "type A { b: B }\n",
            "type B { c: Int }\n",
            "type C { d: Int }\n",
            "union Result = C\n",
            "input Filter { kind: Kind }\n",
            "enum Kind { ONE TWO }\n",
            "type Orphan { e: String }\n",
        ))?
        .build()?;

    for type_name in ["Query", "A", "B", "C", "Result", "Filter", "Kind", "Int"] {
        assert!(schema.lookup_type(type_name).unwrap().is_rooted(), "{type_name} is rooted");
    }
    assert!(!schema.lookup_type("Orphan").unwrap().is_rooted());
    assert!(!schema.lookup_type("String").unwrap().is_rooted());

    Ok(())
}
