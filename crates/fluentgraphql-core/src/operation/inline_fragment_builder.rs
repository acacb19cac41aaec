use crate::operation::SelectionSetBuilder;
use crate::operation::selection_set_builder::Cursor;
use crate::operation::selection_set_builder::impl_selection_set_builder;
use crate::operation::selection_set_builder::sealed::BuilderCursor;
use std::marker::PhantomData;

/// Fluent builder positioned on an inline fragment
/// (`... on TypeCondition { }`).
#[derive(Debug)]
pub struct InlineFragmentBuilder<'doc, P: SelectionSetBuilder<'doc>> {
    cursor: Cursor<'doc>,
    phantom: PhantomData<P>,
}
impl<'doc, P: SelectionSetBuilder<'doc>> InlineFragmentBuilder<'doc, P> {
    pub(crate) fn new(cursor: Cursor<'doc>) -> Self {
        Self {
            cursor,
            phantom: PhantomData,
        }
    }

    /// Move up to the field this inline fragment was added to.
    pub fn parent(self) -> P {
        P::from_cursor(self.cursor.to_parent())
    }
}

impl_selection_set_builder!(InlineFragmentBuilder<P>);

impl<'doc, P: SelectionSetBuilder<'doc>> BuilderCursor<'doc> for InlineFragmentBuilder<'doc, P> {
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
