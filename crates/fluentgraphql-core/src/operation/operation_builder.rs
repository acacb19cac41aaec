use crate::operation::Document;
use crate::operation::FragmentBuilder;
use crate::operation::FragmentDefinitionNode;
use crate::operation::FragmentSpreadNode;
use crate::operation::SelectionNode;
use crate::operation::selection_set_builder::Cursor;
use crate::operation::selection_set_builder::impl_selection_set_builder;
use crate::operation::selection_set_builder::sealed::BuilderCursor;

/// Fluent builder positioned on the root operation of a [`Document`].
///
/// [`root()`](crate::operation::SelectionSetBuilder::root) on this builder
/// yields an equivalent builder on the same root.
///
/// ```
/// use fluentgraphql_core::operation::Document;
/// use fluentgraphql_core::operation::OperationOptions;
///
/// let mut doc = Document::query(OperationOptions::new());
/// doc.operation()
///     .add_selection("hero")
///         .add_scalar("name")
///         .parent()
///     .add_scalar("__typename");
///
/// assert!(doc.render().is_ok());
/// ```
#[derive(Debug)]
pub struct OperationBuilder<'doc> {
    cursor: Cursor<'doc>,
}
impl<'doc> OperationBuilder<'doc> {
    pub(crate) fn new(document: &'doc mut Document) -> Self {
        let root_id = document.root_id();
        Self {
            cursor: Cursor::new(document, root_id),
        }
    }

    /// Append a fragment definition. Returns a builder positioned on the new
    /// fragment definition; its `parent()` returns to this operation.
    ///
    /// The fragment is rendered as a top-level definition following the
    /// operation.
    pub fn add_fragment_definition(
        self,
        name: impl Into<String>,
        type_condition: impl Into<String>,
    ) -> FragmentBuilder<'doc, Self> {
        FragmentBuilder::new(self.cursor.descend(
            SelectionNode::FragmentDefinition(FragmentDefinitionNode {
                name: name.into(),
                type_condition: type_condition.into(),
            }),
        ))
    }

    /// Append a fragment spread (`...name`). Returns this builder.
    pub fn add_fragment_spread(self, name: impl Into<String>) -> Self {
        Self {
            cursor: self.cursor.add_sibling(SelectionNode::FragmentSpread(
                FragmentSpreadNode {
                    fragment_name: name.into(),
                },
            )),
        }
    }
}

impl_selection_set_builder!(OperationBuilder);

impl<'doc> BuilderCursor<'doc> for OperationBuilder<'doc> {
    fn cursor(&self) -> &Cursor<'doc> {
        &self.cursor
    }

    fn from_cursor(cursor: Cursor<'doc>) -> Self {
        Self { cursor }
    }

    fn into_cursor(self) -> Cursor<'doc> {
        self.cursor
    }
}
