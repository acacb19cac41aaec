use crate::operation::Argument;
use crate::operation::OperationKind;
use crate::operation::VariableDefinition;

/// A single node of a [`Document`](crate::operation::Document)'s selection
/// tree.
///
/// Parent/child links are owned by the `Document`; see
/// [`Document::parent()`](crate::operation::Document::parent) and
/// [`Document::children()`](crate::operation::Document::children).
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionNode {
    Field(FieldNode),
    FragmentDefinition(FragmentDefinitionNode),
    FragmentSpread(FragmentSpreadNode),
    InlineFragment(InlineFragmentNode),
    Operation(OperationNode),
}
impl SelectionNode {
    pub fn kind(&self) -> SelectionKind {
        match self {
            Self::Field(field) if field.scalar => SelectionKind::Scalar,
            Self::Field(_) => SelectionKind::Field,
            Self::FragmentDefinition(_) => SelectionKind::FragmentDefinition,
            Self::FragmentSpread(_) => SelectionKind::FragmentSpread,
            Self::InlineFragment(_) => SelectionKind::InlineFragment,
            Self::Operation(_) => SelectionKind::Operation,
        }
    }

    pub fn as_field(&self) -> Option<&FieldNode> {
        if let Self::Field(field) = self {
            Some(field)
        } else {
            None
        }
    }

    pub fn as_operation(&self) -> Option<&OperationNode> {
        if let Self::Operation(operation) = self {
            Some(operation)
        } else {
            None
        }
    }

    /// Whether a child of kind `child` may be appended beneath a node of this
    /// kind.
    pub(crate) fn accepts(&self, child: SelectionKind) -> bool {
        use SelectionKind as K;
        match (self.kind(), child) {
            (_, K::Operation) => false,
            (K::Operation, K::InlineFragment) => false,
            (K::Operation, _) => true,
            (K::Field, _) => true,
            (K::InlineFragment | K::FragmentDefinition, K::Scalar | K::Field) => true,
            (K::InlineFragment | K::FragmentDefinition, _) => false,
            (K::Scalar | K::FragmentSpread, _) => false,
        }
    }
}

/// Similar to [`SelectionNode`], except without the corresponding data.
/// Distinguishes scalar (leaf) fields from fields with a selection set.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SelectionKind {
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    Operation,
    Scalar,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldNode {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: Vec<Argument>,
    pub(crate) name: String,
    pub(crate) scalar: bool,
}
impl FieldNode {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &[Argument] {
        self.arguments.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// `true` for a leaf field that carries no selection set.
    pub fn is_scalar(&self) -> bool {
        self.scalar
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinitionNode {
    pub(crate) name: String,
    pub(crate) type_condition: String,
}
impl FragmentDefinitionNode {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpreadNode {
    pub(crate) fragment_name: String,
}
impl FragmentSpreadNode {
    pub fn fragment_name(&self) -> &str {
        self.fragment_name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragmentNode {
    pub(crate) type_condition: String,
}
impl InlineFragmentNode {
    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OperationNode {
    pub(crate) kind: OperationKind,
    pub(crate) name: Option<String>,
    pub(crate) variable_definitions: Vec<VariableDefinition>,
}
impl OperationNode {
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn variable_definitions(&self) -> &[VariableDefinition] {
        self.variable_definitions.as_slice()
    }
}
