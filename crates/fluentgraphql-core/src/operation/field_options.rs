use crate::operation::Argument;

/// Attributes applied to a newly appended field selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldOptions {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: Vec<Argument>,
}
impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alias the field is selected under (`alias: field`).
    ///
    /// NOTE: Replaces any previously set alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Add a single [`Argument`] after any previously added `Argument`s.
    pub fn argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Add [`Argument`]s after any previously added `Argument`s.
    ///
    /// Unlike [`FieldOptions::alias()`], repeated calls accumulate.
    pub fn arguments(
        mut self,
        arguments: impl IntoIterator<Item = Argument>,
    ) -> Self {
        self.arguments.extend(arguments);
        self
    }
}
