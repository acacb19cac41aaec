mod argument;
mod document;
mod field_builder;
mod field_options;
mod fragment_builder;
mod inline_fragment_builder;
mod operation_builder;
mod operation_kind;
mod operation_options;
mod selection_node;
mod selection_set_builder;
mod variable_definition;

pub use argument::Argument;
pub use document::BuildError;
pub use document::Document;
pub use document::NodeId;
pub use field_builder::FieldBuilder;
pub use field_options::FieldOptions;
pub use fragment_builder::FragmentBuilder;
pub use inline_fragment_builder::InlineFragmentBuilder;
pub use operation_builder::OperationBuilder;
pub use operation_kind::OperationKind;
pub use operation_options::OperationOptions;
pub use selection_node::FieldNode;
pub use selection_node::FragmentDefinitionNode;
pub use selection_node::FragmentSpreadNode;
pub use selection_node::InlineFragmentNode;
pub use selection_node::OperationNode;
pub use selection_node::SelectionKind;
pub use selection_node::SelectionNode;
pub use selection_set_builder::SelectionSetBuilder;
pub use variable_definition::VariableDefinition;

#[cfg(test)]
mod tests;
