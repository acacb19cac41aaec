use crate::operation::SelectionSetBuilder;
use crate::operation::selection_set_builder::Cursor;
use crate::operation::selection_set_builder::impl_selection_set_builder;
use crate::operation::selection_set_builder::sealed::BuilderCursor;
use std::marker::PhantomData;

/// Fluent builder positioned on a fragment definition
/// (`fragment Name on TypeCondition { }`).
#[derive(Debug)]
pub struct FragmentBuilder<'doc, P: SelectionSetBuilder<'doc>> {
    cursor: Cursor<'doc>,
    phantom: PhantomData<P>,
}
impl<'doc, P: SelectionSetBuilder<'doc>> FragmentBuilder<'doc, P> {
    pub(crate) fn new(cursor: Cursor<'doc>) -> Self {
        Self {
            cursor,
            phantom: PhantomData,
        }
    }

    /// Move up to the node this fragment definition was attached to.
    pub fn parent(self) -> P {
        P::from_cursor(self.cursor.to_parent())
    }
}

impl_selection_set_builder!(FragmentBuilder<P>);

impl<'doc, P: SelectionSetBuilder<'doc>> BuilderCursor<'doc> for FragmentBuilder<'doc, P> {
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
