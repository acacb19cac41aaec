use crate::operation::FieldNode;
use crate::operation::FieldOptions;
use crate::operation::FragmentDefinitionNode;
use crate::operation::FragmentSpreadNode;
use crate::operation::InlineFragmentNode;
use crate::operation::OperationBuilder;
use crate::operation::OperationKind;
use crate::operation::OperationNode;
use crate::operation::OperationOptions;
use crate::operation::SelectionKind;
use crate::operation::SelectionNode;
use thiserror::Error;

type Result<T> = std::result::Result<T, BuildError>;

/// Identifies a node within the [`Document`] that created it.
///
/// Ids are only meaningful for the `Document` that issued them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);
impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
struct NodeEntry {
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    selection: SelectionNode,
}

/// An operation (query or mutation) together with every selection nested
/// beneath it.
///
/// Nodes live in a flat arena and refer to their parent by [`NodeId`], so
/// the tree has a single owner and no reference cycles. The root operation
/// always has id [`Document::root_id()`].
///
/// Most callers build a `Document` through the fluent builders returned by
/// [`Document::operation()`]. The `add_*` methods on `Document` itself
/// perform the same operations addressed by [`NodeId`] and check at runtime
/// that the target node can hold the new selection, which is useful when the
/// shape of the tree is only known at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    nodes: Vec<NodeEntry>,
}
impl Document {
    pub fn new(kind: OperationKind, options: OperationOptions) -> Self {
        let OperationOptions {
            name,
            variable_definitions,
        } = options;

        Self {
            nodes: vec![NodeEntry {
                children: vec![],
                parent: None,
                selection: SelectionNode::Operation(OperationNode {
                    kind,
                    name,
                    variable_definitions,
                }),
            }],
        }
    }

    /// Convenience wrapper around [`Document::new()`] for a `mutation`.
    pub fn mutation(options: OperationOptions) -> Self {
        Self::new(OperationKind::Mutation, options)
    }

    /// Convenience wrapper around [`Document::new()`] for a `query`.
    pub fn query(options: OperationOptions) -> Self {
        Self::new(OperationKind::Query, options)
    }

    /// Start a fluent builder chain at the root operation.
    pub fn operation(&mut self) -> OperationBuilder<'_> {
        OperationBuilder::new(self)
    }

    /// Append a scalar (leaf) field beneath `target`.
    ///
    /// Returns `target` so further siblings can be added at the same level.
    pub fn add_scalar(
        &mut self,
        target: NodeId,
        field_name: impl Into<String>,
        options: FieldOptions,
    ) -> Result<NodeId> {
        self.check_target(target, SelectionKind::Scalar)?;
        self.append(target, field_node(field_name, options, true));
        Ok(target)
    }

    /// Append a field with its own selection set beneath `target`.
    ///
    /// Returns the id of the new field.
    pub fn add_selection(
        &mut self,
        target: NodeId,
        field_name: impl Into<String>,
        options: FieldOptions,
    ) -> Result<NodeId> {
        self.check_target(target, SelectionKind::Field)?;
        Ok(self.append(target, field_node(field_name, options, false)))
    }

    /// Append an inline fragment (`... on TypeCondition { }`) beneath
    /// `target`, which must be a field with a selection set.
    ///
    /// Returns the id of the new inline fragment.
    pub fn add_inline_fragment(
        &mut self,
        target: NodeId,
        type_condition: impl Into<String>,
    ) -> Result<NodeId> {
        self.check_target(target, SelectionKind::InlineFragment)?;
        Ok(self.append(target, SelectionNode::InlineFragment(
            InlineFragmentNode {
                type_condition: type_condition.into(),
            },
        )))
    }

    /// Append a fragment definition beneath `target`, which must be the root
    /// operation or a field with a selection set. Fragment definitions are
    /// rendered as top-level definitions wherever they were attached.
    ///
    /// Returns the id of the new fragment definition.
    pub fn add_fragment_definition(
        &mut self,
        target: NodeId,
        name: impl Into<String>,
        type_condition: impl Into<String>,
    ) -> Result<NodeId> {
        self.check_target(target, SelectionKind::FragmentDefinition)?;
        Ok(self.append(target, SelectionNode::FragmentDefinition(
            FragmentDefinitionNode {
                name: name.into(),
                type_condition: type_condition.into(),
            },
        )))
    }

    /// Append a fragment spread (`...name`) beneath `target`, which must be
    /// the root operation or a field with a selection set.
    ///
    /// Returns `target`; a spread never has children of its own.
    pub fn add_fragment_spread(
        &mut self,
        target: NodeId,
        name: impl Into<String>,
    ) -> Result<NodeId> {
        self.check_target(target, SelectionKind::FragmentSpread)?;
        self.append(target, SelectionNode::FragmentSpread(
            FragmentSpreadNode {
                fragment_name: name.into(),
            },
        ));
        Ok(target)
    }

    /// The ids of the nodes directly beneath `node_id`, in insertion order.
    pub fn children(&self, node_id: NodeId) -> &[NodeId] {
        self.nodes
            .get(node_id.0)
            .map(|entry| entry.children.as_slice())
            .unwrap_or_default()
    }

    pub fn node(&self, node_id: NodeId) -> Option<&SelectionNode> {
        self.nodes.get(node_id.0).map(|entry| &entry.selection)
    }

    /// Total number of nodes in the tree, the root operation included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The node whose selection set contains `node_id`, or `None` if
    /// `node_id` is the root operation (or unknown to this document).
    pub fn parent(&self, node_id: NodeId) -> Option<NodeId> {
        self.nodes.get(node_id.0).and_then(|entry| entry.parent)
    }

    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    /// Follow parent links from `node_id` up to the root operation.
    ///
    /// Returns `node_id` itself when called on the root, and `None` only if
    /// `node_id` was not issued by this document.
    pub fn root_of(&self, node_id: NodeId) -> Option<NodeId> {
        let mut current = self.nodes.get(node_id.0).map(|_| node_id)?;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        Some(current)
    }

    /// Append `selection` as the last child of `parent`.
    ///
    /// Callers are responsible for checking that `parent` can hold
    /// `selection`.
    pub(crate) fn append(
        &mut self,
        parent: NodeId,
        selection: SelectionNode,
    ) -> NodeId {
        let node_id = NodeId(self.nodes.len());
        tracing::trace!(
            parent = parent.0,
            node = node_id.0,
            kind = ?selection.kind(),
            "appending selection node"
        );
        self.nodes.push(NodeEntry {
            children: vec![],
            parent: Some(parent),
            selection,
        });
        self.nodes[parent.0].children.push(node_id);
        node_id
    }

    fn check_target(
        &self,
        target: NodeId,
        selection_kind: SelectionKind,
    ) -> Result<()> {
        let target_node = self.node(target).ok_or(
            BuildError::UnknownNode { node_id: target }
        )?;

        if !target_node.accepts(selection_kind) {
            tracing::debug!(
                target = target.0,
                target_kind = ?target_node.kind(),
                selection_kind = ?selection_kind,
                "rejecting selection for incompatible target"
            );
            return Err(BuildError::InvalidSelectionTarget {
                selection_kind,
                target,
                target_kind: target_node.kind(),
            });
        }

        Ok(())
    }
}

pub(crate) fn field_node(
    field_name: impl Into<String>,
    options: FieldOptions,
    scalar: bool,
) -> SelectionNode {
    let FieldOptions { alias, arguments } = options;
    SelectionNode::Field(FieldNode {
        alias,
        arguments,
        name: field_name.into(),
        scalar,
    })
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum BuildError {
    #[error(
        "Cannot add a `{selection_kind:?}` selection beneath a \
        `{target_kind:?}` node."
    )]
    InvalidSelectionTarget {
        selection_kind: SelectionKind,
        target: NodeId,
        target_kind: SelectionKind,
    },

    #[error("No node with id `{node_id:?}` exists in this document.")]
    UnknownNode {
        node_id: NodeId,
    },
}
