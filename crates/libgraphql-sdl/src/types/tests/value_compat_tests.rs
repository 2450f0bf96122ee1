use crate::loc;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::types::NamedTypeRef;
use crate::types::TypeNode;
use crate::Value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn test_schema() -> Result<Schema> {
    SchemaBuilder::new()
        .load_str(None, concat!(
            "scalar Json\n",
            "enum Color { RED GREEN }\n",
            "input Point {\n",
            "  x: Int!\n",
            "  y: Int!\n",
            "  label: String\n",
            "  scale: Float! = 1.0\n",
            "}\n",
            "input Shape { points: [Point!]! }\n",
            "type Query { color: Color }\n",
        ))?
        .build()
}

fn named(type_name: &str) -> TypeNode {
    TypeNode::Named(NamedTypeRef::new(type_name, loc::SourceLocation::GraphQLBuiltIn))
}

fn list(inner: TypeNode) -> TypeNode {
    TypeNode::List(Box::new(inner))
}

fn non_null(inner: TypeNode) -> TypeNode {
    TypeNode::NonNull(Box::new(inner))
}

fn object(entries: Vec<(&str, Value)>) -> Value {
    Value::Object(
        entries.into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect::<IndexMap<_, _>>(),
    )
}

mod scalars {
    use super::*;

    #[test]
    fn null_only_fits_nullable_types() -> Result<()> {
        let schema = test_schema()?;
        assert!(schema.is_input_type_compatible_with_value(&named("Int"), &Value::Null));
        assert!(!schema.is_input_type_compatible_with_value(&non_null(named("Int")), &Value::Null));
        assert!(schema.is_input_type_compatible_with_value(&list(non_null(named("Int"))), &Value::Null));
        Ok(())
    }

    #[test]
    fn int_coerces_to_float_but_not_back() -> Result<()> {
        let schema = test_schema()?;
        assert!(schema.is_input_type_compatible_with_value(&named("Float"), &Value::Int(3)));
        assert!(schema.is_input_type_compatible_with_value(&named("Float"), &Value::Float(3.5)));
        assert!(!schema.is_input_type_compatible_with_value(&named("Int"), &Value::Float(3.0)));
        Ok(())
    }

    #[test]
    fn int_must_fit_32_bits() -> Result<()> {
        let schema = test_schema()?;
        assert!(schema.is_input_type_compatible_with_value(&named("Int"), &Value::Int(i32::MAX as i64)));
        assert!(!schema.is_input_type_compatible_with_value(&named("Int"), &Value::Int(i32::MAX as i64 + 1)));
        Ok(())
    }

    #[test]
    fn id_accepts_strings_and_ints() -> Result<()> {
        let schema = test_schema()?;
        assert!(schema.is_input_type_compatible_with_value(&named("ID"), &Value::Int(1)));
        assert!(schema.is_input_type_compatible_with_value(&named("ID"), &Value::String("abc".to_string())));
        assert!(!schema.is_input_type_compatible_with_value(&named("ID"), &Value::Boolean(true)));
        Ok(())
    }

    #[test]
    fn string_and_boolean_need_exact_literals() -> Result<()> {
        let schema = test_schema()?;
        assert!(!schema.is_input_type_compatible_with_value(&named("String"), &Value::Int(1)));
        assert!(!schema.is_input_type_compatible_with_value(&named("Boolean"), &Value::String("true".to_string())));
        assert!(schema.is_input_type_compatible_with_value(&named("Boolean"), &Value::Boolean(false)));
        Ok(())
    }

    #[test]
    fn custom_scalar_accepts_any_constant() -> Result<()> {
        let schema = test_schema()?;
        assert!(schema.is_input_type_compatible_with_value(&named("Json"), &object(vec![
            ("anything", Value::List(vec![Value::Int(1), Value::String("x".to_string())])),
        ])));
        assert!(schema.is_input_type_compatible_with_value(&named("Json"), &Value::Float(1.5)));
        Ok(())
    }

    #[test]
    fn variables_are_never_compatible() -> Result<()> {
        let schema = test_schema()?;
        assert!(!schema.is_input_type_compatible_with_value(&named("Json"), &Value::Variable("v".to_string())));
        assert!(!schema.is_input_type_compatible_with_value(&named("Int"), &Value::Variable("v".to_string())));
        Ok(())
    }

    #[test]
    fn unknown_type_names_do_not_cascade() -> Result<()> {
        let schema = test_schema()?;
        assert!(schema.is_input_type_compatible_with_value(&named("Missing"), &Value::Int(1)));
        Ok(())
    }
}

mod lists {
    use super::*;

    #[test]
    fn list_literal_items_are_checked_individually() -> Result<()> {
        let schema = test_schema()?;
        let int_list = list(named("Int"));
        assert!(schema.is_input_type_compatible_with_value(
            &int_list,
            &Value::List(vec![Value::Int(1), Value::Null, Value::Int(3)]),
        ));
        assert!(!schema.is_input_type_compatible_with_value(
            &int_list,
            &Value::List(vec![Value::Int(1), Value::String("2".to_string())]),
        ));
        assert!(!schema.is_input_type_compatible_with_value(
            &list(non_null(named("Int"))),
            &Value::List(vec![Value::Null]),
        ));
        Ok(())
    }

    #[test]
    fn single_item_coerces_to_list() -> Result<()> {
        let schema = test_schema()?;
        assert!(schema.is_input_type_compatible_with_value(&list(named("Int")), &Value::Int(1)));
        assert!(!schema.is_input_type_compatible_with_value(&list(named("Int")), &Value::Boolean(true)));
        Ok(())
    }

    #[test]
    fn empty_list_fits_any_list_type() -> Result<()> {
        let schema = test_schema()?;
        assert!(schema.is_input_type_compatible_with_value(
            &non_null(list(non_null(named("Point")))),
            &Value::List(vec![]),
        ));
        Ok(())
    }
}

mod enums {
    use super::*;

    #[test]
    fn enum_accepts_declared_value_names() -> Result<()> {
        let schema = test_schema()?;
        assert!(schema.is_input_type_compatible_with_value(&named("Color"), &Value::Enum("RED".to_string())));
        assert!(schema.is_input_type_compatible_with_value(&named("Color"), &Value::String("GREEN".to_string())));
        Ok(())
    }

    #[test]
    fn enum_rejects_undeclared_values() -> Result<()> {
        let schema = test_schema()?;
        assert!(!schema.is_input_type_compatible_with_value(&named("Color"), &Value::Enum("BLUE".to_string())));
        assert!(!schema.is_input_type_compatible_with_value(&named("Color"), &Value::Int(0)));
        Ok(())
    }
}

mod input_objects {
    use super::*;

    #[test]
    fn object_with_required_fields_is_compatible() -> Result<()> {
        let schema = test_schema()?;
        assert!(schema.is_input_type_compatible_with_value(&named("Point"), &object(vec![
            ("x", Value::Int(1)),
            ("y", Value::Int(2)),
        ])));
        Ok(())
    }

    #[test]
    fn missing_required_field_is_incompatible() -> Result<()> {
        let schema = test_schema()?;
        assert!(!schema.is_input_type_compatible_with_value(&named("Point"), &object(vec![
            ("x", Value::Int(1)),
        ])));
        Ok(())
    }

    #[test]
    fn non_null_field_with_default_may_be_omitted_but_not_null() -> Result<()> {
        let schema = test_schema()?;
        assert!(schema.is_input_type_compatible_with_value(&named("Point"), &object(vec![
            ("x", Value::Int(1)),
            ("y", Value::Int(2)),
            ("label", Value::Null),
        ])));
        assert!(!schema.is_input_type_compatible_with_value(&named("Point"), &object(vec![
            ("x", Value::Int(1)),
            ("y", Value::Int(2)),
            ("scale", Value::Null),
        ])));
        Ok(())
    }

    #[test]
    fn unknown_field_is_incompatible() -> Result<()> {
        let schema = test_schema()?;
        assert!(!schema.is_input_type_compatible_with_value(&named("Point"), &object(vec![
            ("x", Value::Int(1)),
            ("y", Value::Int(2)),
            ("z", Value::Int(3)),
        ])));
        Ok(())
    }

    #[test]
    fn nested_values_are_checked() -> Result<()> {
        let schema = test_schema()?;
        let point = object(vec![("x", Value::Int(1)), ("y", Value::Int(2))]);
        assert!(schema.is_input_type_compatible_with_value(&named("Shape"), &object(vec![
            ("points", Value::List(vec![point.clone(), point])),
        ])));
        assert!(!schema.is_input_type_compatible_with_value(&named("Shape"), &object(vec![
            ("points", Value::List(vec![object(vec![("x", Value::Int(1))])])),
        ])));
        Ok(())
    }

    #[test]
    fn non_object_values_are_incompatible() -> Result<()> {
        let schema = test_schema()?;
        assert!(!schema.is_input_type_compatible_with_value(&named("Point"), &Value::String("1,2".to_string())));
        Ok(())
    }

    #[test]
    fn output_types_never_accept_values() -> Result<()> {
        let schema = test_schema()?;
        assert!(!schema.is_input_type_compatible_with_value(&named("Query"), &object(vec![])));
        Ok(())
    }
}
