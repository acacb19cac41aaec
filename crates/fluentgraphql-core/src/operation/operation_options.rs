use crate::operation::VariableDefinition;

/// Attributes applied to the root of a new
/// [`Document`](crate::operation::Document).
///
/// The name and the variable definitions are independent: setting one never
/// touches the other.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OperationOptions {
    pub(crate) name: Option<String>,
    pub(crate) variable_definitions: Vec<VariableDefinition>,
}
impl OperationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a [`VariableDefinition`] after any previously added
    /// `VariableDefinition`s.
    pub fn add_variable_definition(
        mut self,
        variable_definition: VariableDefinition,
    ) -> Self {
        self.variable_definitions.push(variable_definition);
        self
    }

    /// Set the name of the operation.
    ///
    /// NOTE: Replaces any previously set name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the list of [`VariableDefinition`]s.
    ///
    /// NOTE: If any variable definitions were previously set or added, they
    /// will be fully replaced by the ones passed here.
    pub fn variable_definitions(
        mut self,
        variable_definitions: impl IntoIterator<Item = VariableDefinition>,
    ) -> Self {
        self.variable_definitions = variable_definitions.into_iter().collect();
        self
    }
}
