use crate::operation::FragmentBuilder;
use crate::operation::FragmentDefinitionNode;
use crate::operation::FragmentSpreadNode;
use crate::operation::InlineFragmentBuilder;
use crate::operation::InlineFragmentNode;
use crate::operation::SelectionNode;
use crate::operation::SelectionSetBuilder;
use crate::operation::selection_set_builder::Cursor;
use crate::operation::selection_set_builder::impl_selection_set_builder;
use crate::operation::selection_set_builder::sealed::BuilderCursor;
use std::marker::PhantomData;

/// Fluent builder positioned on a field that has a selection set.
///
/// `P` is the type of the builder this field was created from;
/// [`FieldBuilder::parent()`] hands control back to it.
#[derive(Debug)]
pub struct FieldBuilder<'doc, P: SelectionSetBuilder<'doc>> {
    cursor: Cursor<'doc>,
    phantom: PhantomData<P>,
}
impl<'doc, P: SelectionSetBuilder<'doc>> FieldBuilder<'doc, P> {
    pub(crate) fn new(cursor: Cursor<'doc>) -> Self {
        Self {
            cursor,
            phantom: PhantomData,
        }
    }

    /// Append a fragment definition. Returns a builder positioned on the new
    /// fragment definition.
    ///
    /// Fragment definitions are always rendered as top-level definitions;
    /// attaching one to a field only affects where [`FragmentBuilder::parent()`]
    /// returns to.
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
        Self::new(self.cursor.add_sibling(SelectionNode::FragmentSpread(
            FragmentSpreadNode {
                fragment_name: name.into(),
            },
        )))
    }

    /// Append an inline fragment (`... on TypeCondition { }`). Returns a
    /// builder positioned on the new inline fragment.
    pub fn add_inline_fragment(
        self,
        type_condition: impl Into<String>,
    ) -> InlineFragmentBuilder<'doc, Self> {
        InlineFragmentBuilder::new(self.cursor.descend(
            SelectionNode::InlineFragment(InlineFragmentNode {
                type_condition: type_condition.into(),
            }),
        ))
    }

    /// Move up to the node this field was selected from.
    pub fn parent(self) -> P {
        P::from_cursor(self.cursor.to_parent())
    }
}

impl_selection_set_builder!(FieldBuilder<P>);

impl<'doc, P: SelectionSetBuilder<'doc>> BuilderCursor<'doc> for FieldBuilder<'doc, P> {
    fn cursor(&self) -> &Cursor<'doc> {
        &self.cursor
    }

    fn from_cursor(cursor: Cursor<'doc>) -> Self {
        Self::new(cursor)
    }

    fn into_cursor(self) -> Cursor<'doc> {
        self.cursor
    }
}
