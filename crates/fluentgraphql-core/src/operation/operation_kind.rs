/// The kind of root operation a [`Document`](crate::operation::Document) is
/// built around.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum OperationKind {
    Mutation,
    Query,
}
impl OperationKind {
    pub(crate) fn to_ast(self) -> apollo_compiler::ast::OperationType {
        match self {
            Self::Mutation => apollo_compiler::ast::OperationType::Mutation,
            Self::Query => apollo_compiler::ast::OperationType::Query,
        }
    }
}
