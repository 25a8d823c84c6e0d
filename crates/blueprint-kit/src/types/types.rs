use indexmap::IndexMap;
use std::fmt;

use super::expressions::Expression;

/// A blueprint value. Either a literal, or an [`Expression`] whose resolution
/// is deferred to execution time.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    Bool(bool),
    Null,
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
    Expression(Expression),
}

impl PartialEq<Value> for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Bool(lhs), Value::Bool(rhs)) => lhs == rhs,
            (Value::Null, Value::Null) => true,
            (Value::Integer(lhs), Value::Integer(rhs)) => lhs == rhs,
            (Value::Float(lhs), Value::Float(rhs)) => lhs == rhs,
            (Value::String(lhs), Value::String(rhs)) => lhs == rhs,
            (Value::Array(lhs), Value::Array(rhs)) => {
                lhs.len() == rhs.len() && lhs.iter().zip(rhs.iter()).all(|(l, r)| l == r)
            }
            (Value::Object(lhs), Value::Object(rhs)) => {
                if lhs.len() != rhs.len() {
                    return false;
                }
                lhs.iter().all(|(k, v)| rhs.get(k).map_or(false, |r| v == r))
            }
            (Value::Expression(lhs), Value::Expression(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl Value {
    pub fn string(value: String) -> Value {
        Value::String(value)
    }

    pub fn integer(value: i64) -> Value {
        Value::Integer(value)
    }

    pub fn float(value: f64) -> Value {
        Value::Float(value)
    }

    pub fn bool(value: bool) -> Value {
        Value::Bool(value)
    }

    pub fn null() -> Value {
        Value::Null
    }

    pub fn array(values: Vec<Value>) -> Value {
        Value::Array(values)
    }

    pub fn object(entries: IndexMap<String, Value>) -> Value {
        Value::Object(entries)
    }

    pub fn expression(expression: Expression) -> Value {
        Value::Expression(expression)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Value::Expression(expression) => Some(expression),
            _ => None,
        }
    }

    /// Names of the global variables this value defers to, in the order they appear.
    pub fn global_references(&self) -> Vec<&str> {
        let mut names = vec![];
        self.collect_global_references(&mut names);
        names
    }

    fn collect_global_references<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Value::Expression(expression) => names.extend(expression.global_references()),
            Value::Array(values) => {
                values.iter().for_each(|v| v.collect_global_references(names))
            }
            Value::Object(entries) => {
                entries.values().for_each(|v| v.collect_global_references(names))
            }
            _ => {}
        }
    }

    pub fn get_type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Null => "null",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Expression(_) => "expression",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(value) => write!(f, "{}", value),
            Value::Null => write!(f, "null"),
            Value::Integer(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::String(value) => write!(f, "{:?}", value),
            Value::Array(values) => {
                let items = values.iter().map(|v| v.to_string()).collect::<Vec<_>>();
                write!(f, "[{}]", items.join(", "))
            }
            Value::Object(entries) => {
                let items =
                    entries.iter().map(|(k, v)| format!("{} = {}", k, v)).collect::<Vec<_>>();
                write!(f, "{{{}}}", items.join(", "))
            }
            Value::Expression(expression) => write!(f, "{}", expression),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Expression> for Value {
    fn from(expression: Expression) -> Self {
        Value::Expression(expression)
    }
}
