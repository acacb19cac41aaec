use crate::Value;

/// A variable declared on an operation, e.g. `$episode: Episode = JEDI`.
///
/// The type is kept as free-form text and is not checked against any schema.
/// List wrappers and inner non-null markers may be spelled out in it (e.g.
/// `[ID!]`); `required` marks the outermost type as non-null.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VariableDefinition {
    pub(crate) default_value: Option<Value>,
    pub(crate) name: String,
    pub(crate) required: bool,
    pub(crate) var_type: String,
}
impl VariableDefinition {
    pub fn new(
        name: impl Into<String>,
        var_type: impl Into<String>,
        required: bool,
        default_value: Option<Value>,
    ) -> Self {
        Self {
            default_value,
            name: name.into(),
            required,
            var_type: var_type.into(),
        }
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// The variable name, without the `$` sigil.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn var_type(&self) -> &str {
        self.var_type.as_str()
    }
}
