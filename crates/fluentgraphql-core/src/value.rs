/// Represents a GraphQL input value, usable as an [`Argument`] value or as
/// the default value of a [`VariableDefinition`].
///
/// Values are immutable once constructed and exclusively own any nested
/// values (the elements of a [`Value::List`] or the fields of a
/// [`Value::Object`]).
///
/// [`Argument`]: crate::operation::Argument
/// [`VariableDefinition`]: crate::operation::VariableDefinition
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Object(Vec<ObjectField>),
    String(String),
    Variable(String),
}
impl Value {
    pub fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    /// An enum value, rendered as a bare identifier (e.g. `EMPIRE`).
    pub fn enum_value(value: impl Into<String>) -> Self {
        Self::Enum(value.into())
    }

    pub fn float(value: f64) -> Self {
        Self::Float(value)
    }

    pub fn int(value: i64) -> Self {
        Self::Int(value)
    }

    pub fn list(values: impl IntoIterator<Item = Value>) -> Self {
        Self::List(values.into_iter().collect())
    }

    /// An object value built from an ordered list of [`ObjectField`]s.
    ///
    /// Field order is kept as given and repeated field names are kept as
    /// separate entries.
    pub fn object(fields: impl IntoIterator<Item = ObjectField>) -> Self {
        Self::Object(fields.into_iter().collect())
    }

    /// A string value. The text is stored verbatim; escaping happens when the
    /// document is rendered.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// A reference to a variable by name. The name must not include the `$`
    /// sigil, which is added on render.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Locale-independent decimal text for a float value. Always contains a
    /// `.` so that it cannot be mistaken for an integer literal.
    pub(crate) fn float_to_graphql_string(value: f64) -> String {
        let text = value.to_string();
        if text.contains(['.', 'e', 'E']) {
            text
        } else {
            format!("{text}.0")
        }
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// A single `name: value` entry of a [`Value::Object`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectField {
    pub(crate) name: String,
    pub(crate) value: Value,
}
impl ObjectField {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
