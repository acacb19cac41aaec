use crate::operation::Document;
use crate::operation::FieldBuilder;
use crate::operation::FieldOptions;
use crate::operation::NodeId;
use crate::operation::OperationBuilder;
use crate::operation::SelectionNode;
use crate::operation::document::field_node;
use crate::render::RenderError;
use crate::render::RenderOptions;

/// Operations shared by every fluent builder positioned on a node that owns
/// a selection set: the root operation, fields with a selection set, inline
/// fragments and fragment definitions.
///
/// Each builder type exposes these as inherent methods, so this trait only
/// needs to be imported to write code that is generic over builders.
///
/// Methods fall into two groups:
///
/// * *sibling-producing* methods ([`add_scalar()`](Self::add_scalar)) append
///   a child and return the same builder, so further siblings can be chained;
/// * *descending* methods ([`add_selection()`](Self::add_selection)) append a
///   child and return a builder positioned on that new child. Its
///   `parent()` method returns a builder of this type again.
pub trait SelectionSetBuilder<'doc>: sealed::BuilderCursor<'doc> {
    /// Append a scalar (leaf) field. Returns this builder.
    fn add_scalar(self, field_name: impl Into<String>) -> Self;

    /// Append a scalar (leaf) field with an alias and/or arguments. Returns
    /// this builder.
    fn add_scalar_with(
        self,
        field_name: impl Into<String>,
        options: FieldOptions,
    ) -> Self;

    /// Append a field with a selection set. Returns a builder positioned on
    /// the new field.
    ///
    /// The field must end up with at least one selection of its own, or
    /// rendering fails with
    /// [`RenderError::EmptySelectionSet`](crate::RenderError::EmptySelectionSet).
    fn add_selection(
        self,
        field_name: impl Into<String>,
    ) -> FieldBuilder<'doc, Self>;

    /// Append a field with a selection set and an alias and/or arguments.
    /// Returns a builder positioned on the new field.
    fn add_selection_with(
        self,
        field_name: impl Into<String>,
        options: FieldOptions,
    ) -> FieldBuilder<'doc, Self>;

    /// The [`Document`] being built.
    fn document(&self) -> &Document;

    /// The id of the node this builder is positioned on.
    fn node_id(&self) -> NodeId;

    /// Render the whole document, starting from its root operation.
    fn render(&self) -> Result<String, RenderError>;

    /// Like [`render()`](Self::render), with explicit [`RenderOptions`].
    fn render_with(
        &self,
        options: &RenderOptions,
    ) -> Result<String, RenderError>;

    /// Return to the root operation.
    fn root(self) -> OperationBuilder<'doc>;
}

pub(crate) mod sealed {
    use super::Cursor;

    /// Converts between a typed builder and its untyped [`Cursor`]. Lets a
    /// child builder hand control back to its parent's builder type.
    pub trait BuilderCursor<'doc>: Sized {
        fn cursor(&self) -> &Cursor<'doc>;
        fn from_cursor(cursor: Cursor<'doc>) -> Self;
        fn into_cursor(self) -> Cursor<'doc>;
    }
}

/// Implements [`SelectionSetBuilder`] for a builder type by forwarding every
/// method to its [`Cursor`].
macro_rules! impl_selection_set_builder {
    ($builder:ident $(<$parent:ident>)?) => {
        #[inherent::inherent]
        impl<'doc $(, $parent: $crate::operation::SelectionSetBuilder<'doc>)?>
            $crate::operation::SelectionSetBuilder<'doc>
            for $builder<'doc $(, $parent)?>
        {
            pub fn add_scalar(self, field_name: impl Into<String>) -> Self {
                self.add_scalar_with(
                    field_name,
                    $crate::operation::FieldOptions::default(),
                )
            }

            pub fn add_scalar_with(
                self,
                field_name: impl Into<String>,
                options: $crate::operation::FieldOptions,
            ) -> Self {
                <Self as $crate::operation::selection_set_builder::sealed::BuilderCursor<'doc>>::from_cursor(
                    <Self as $crate::operation::selection_set_builder::sealed::BuilderCursor<'doc>>::into_cursor(self)
                        .add_scalar(field_name, options),
                )
            }

            pub fn add_selection(
                self,
                field_name: impl Into<String>,
            ) -> $crate::operation::FieldBuilder<'doc, Self> {
                self.add_selection_with(
                    field_name,
                    $crate::operation::FieldOptions::default(),
                )
            }

            pub fn add_selection_with(
                self,
                field_name: impl Into<String>,
                options: $crate::operation::FieldOptions,
            ) -> $crate::operation::FieldBuilder<'doc, Self> {
                <Self as $crate::operation::selection_set_builder::sealed::BuilderCursor<'doc>>::into_cursor(self)
                    .descend_to_selection(field_name, options)
            }

            pub fn document(&self) -> &$crate::operation::Document {
                <Self as $crate::operation::selection_set_builder::sealed::BuilderCursor<'doc>>::cursor(self)
                    .document()
            }

            pub fn node_id(&self) -> $crate::operation::NodeId {
                <Self as $crate::operation::selection_set_builder::sealed::BuilderCursor<'doc>>::cursor(self)
                    .node_id
            }

            pub fn render(&self) -> Result<String, $crate::RenderError> {
                self.render_with(&$crate::RenderOptions::default())
            }

            pub fn render_with(
                &self,
                options: &$crate::RenderOptions,
            ) -> Result<String, $crate::RenderError> {
                <Self as $crate::operation::selection_set_builder::sealed::BuilderCursor<'doc>>::cursor(self)
                    .document()
                    .render_with(options)
            }

            pub fn root(self) -> $crate::operation::OperationBuilder<'doc> {
                <Self as $crate::operation::selection_set_builder::sealed::BuilderCursor<'doc>>::into_cursor(self)
                    .root()
            }
        }
    };
}
pub(crate) use impl_selection_set_builder;

/// Untyped position within a [`Document`]. The typed builders are thin
/// wrappers around this.
#[derive(Debug)]
pub struct Cursor<'doc> {
    pub(crate) document: &'doc mut Document,
    pub(crate) node_id: NodeId,
}
impl<'doc> Cursor<'doc> {
    pub(crate) fn new(document: &'doc mut Document, node_id: NodeId) -> Self {
        Self {
            document,
            node_id,
        }
    }

    pub(crate) fn add_scalar(
        self,
        field_name: impl Into<String>,
        options: FieldOptions,
    ) -> Self {
        self.add_sibling(field_node(field_name, options, true))
    }

    /// Append `selection` and stay on the current node.
    pub(crate) fn add_sibling(self, selection: SelectionNode) -> Self {
        self.document.append(self.node_id, selection);
        self
    }

    /// Append `selection` and move onto it.
    pub(crate) fn descend(self, selection: SelectionNode) -> Self {
        let node_id = self.document.append(self.node_id, selection);
        Self {
            document: self.document,
            node_id,
        }
    }

    pub(crate) fn descend_to_selection<P: SelectionSetBuilder<'doc>>(
        self,
        field_name: impl Into<String>,
        options: FieldOptions,
    ) -> FieldBuilder<'doc, P> {
        FieldBuilder::new(self.descend(field_node(field_name, options, false)))
    }

    pub(crate) fn document(&self) -> &Document {
        &*self.document
    }

    pub(crate) fn root(self) -> OperationBuilder<'doc> {
        OperationBuilder::new(self.document)
    }

    /// Move to the parent of the current node. Stays put on the root.
    pub(crate) fn to_parent(self) -> Self {
        let node_id = self.document
            .parent(self.node_id)
            .unwrap_or(self.node_id);
        Self {
            document: self.document,
            node_id,
        }
    }
}
