use crate::ast;
use indexmap::IndexMap;

/// A literal value supplied as a default value or as a directive argument.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
    Variable(String),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub(crate) fn from_ast(ast_value: &ast::Value) -> Self {
        match ast_value {
            ast::Value::Boolean(value) =>
                Value::Boolean(*value),

            ast::Value::Enum(value) =>
                Value::Enum(value.clone()),

            ast::Value::Float(value) =>
                Value::Float(*value),

            ast::Value::Int(value) => match value.as_i64() {
                Some(value) => Value::Int(value),
                None => Value::Null,
            },

            ast::Value::List(values) =>
                Value::List(values.iter().map(Value::from_ast).collect()),

            ast::Value::Null =>
                Value::Null,

            ast::Value::Object(entries) =>
                Value::Object(entries.iter().map(|(key, ast_value)|
                    (key.clone(), Value::from_ast(ast_value))
                ).collect()),

            ast::Value::String(value) =>
                Value::String(value.clone()),

            ast::Value::Variable(var_name) =>
                Value::Variable(var_name.clone()),
        }
    }

    pub(crate) fn to_ast(&self) -> ast::Value {
        match self {
            Self::Boolean(value) => ast::Value::Boolean(*value),
            Self::Enum(value) => ast::Value::Enum(value.clone()),
            Self::Float(value) => ast::Value::Float(*value),
            // graphql_parser only constructs numbers from 32-bit ints; wider
            // literals can only have come from a custom scalar.
            Self::Int(value) => match i32::try_from(*value) {
                Ok(value) => ast::Value::Int(ast::Number::from(value)),
                Err(_) => ast::Value::Float(*value as f64),
            },
            Self::List(values) =>
                ast::Value::List(values.iter().map(Value::to_ast).collect()),
            Self::Null => ast::Value::Null,
            Self::Object(entries) => ast::Value::Object(
                entries.iter()
                    .map(|(key, value)| (key.clone(), value.to_ast()))
                    .collect(),
            ),
            Self::String(value) => ast::Value::String(value.clone()),
            Self::Variable(var_name) => ast::Value::Variable(var_name.clone()),
        }
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Enum(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::List(values) => write!(
                f,
                "[{}]",
                values.iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::Null => write!(f, "null"),
            Self::Object(entries) => write!(
                f,
                "{{{}}}",
                entries.iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::String(value) => write!(f, "{value:?}"),
            Self::Variable(var_name) => write!(f, "${var_name}"),
        }
    }
}
