use crate::operation::Document;
use crate::operation::FieldOptions;
use crate::operation::NodeId;
use crate::operation::OperationOptions;
use crate::operation::SelectionNode;
use crate::tests::test_utils::parse;
use apollo_compiler::ast;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

#[derive(Clone, Debug)]
enum BuildStep {
    Parent,
    Scalar(String),
    Selection(String),
}

fn build_step() -> impl Strategy<Value = BuildStep> {
    prop_oneof![
        Just(BuildStep::Parent),
        "f_[a-z0-9]{0,6}".prop_map(BuildStep::Scalar),
        "f_[a-z0-9]{0,6}".prop_map(BuildStep::Selection),
    ]
}

/// Applies `steps` starting at the root. The root always gets one scalar, and
/// every selection field left without children gets one afterwards, so the
/// result always renders.
fn build(steps: &[BuildStep]) -> (Document, Vec<NodeId>) {
    let mut doc = Document::query(OperationOptions::new());
    let root_id = doc.root_id();
    doc.add_scalar(root_id, "id", FieldOptions::new()).unwrap();

    let mut current = root_id;
    let mut visited = vec![root_id];
    for step in steps {
        current = match step {
            BuildStep::Parent => doc.parent(current).unwrap_or(root_id),
            BuildStep::Scalar(name) => {
                doc.add_scalar(current, name.as_str(), FieldOptions::new()).unwrap()
            },
            BuildStep::Selection(name) => {
                doc.add_selection(current, name.as_str(), FieldOptions::new()).unwrap()
            },
        };
        visited.push(current);
    }

    let mut pending = vec![root_id];
    let mut empty_selections = vec![];
    while let Some(node_id) = pending.pop() {
        let children = doc.children(node_id);
        let is_empty_selection = doc.node(node_id)
            .and_then(SelectionNode::as_field)
            .is_some_and(|field| !field.is_scalar() && children.is_empty());
        if is_empty_selection {
            empty_selections.push(node_id);
        }
        pending.extend_from_slice(children);
    }
    for node_id in empty_selections {
        doc.add_scalar(node_id, "id", FieldOptions::new()).unwrap();
    }

    (doc, visited)
}

/// Walks the built tree under `node_id` alongside the parsed `selections`.
fn check_selections(
    doc: &Document,
    node_id: NodeId,
    selections: &[ast::Selection],
) -> Result<(), TestCaseError> {
    let children = doc.children(node_id);
    prop_assert_eq!(children.len(), selections.len());

    for (&child_id, selection) in children.iter().zip(selections) {
        let Some(field) = doc.node(child_id).and_then(SelectionNode::as_field) else {
            return Err(TestCaseError::fail(format!("node {child_id:?} is not a field")));
        };
        let ast::Selection::Field(parsed) = selection else {
            return Err(TestCaseError::fail(format!("expected a field, got: {selection:?}")));
        };

        prop_assert_eq!(parsed.name.as_str(), field.name());
        prop_assert_eq!(parsed.selection_set.is_empty(), field.is_scalar());
        check_selections(doc, child_id, &parsed.selection_set)?;
    }
    Ok(())
}

proptest! {
    #[test]
    fn rendered_text_parses_back_to_the_built_tree(steps in prop::collection::vec(build_step(), 0..48)) {
        let (doc, _) = build(&steps);
        let rendered = doc.render().unwrap();
        let parsed = parse(rendered.as_str());

        prop_assert_eq!(parsed.definitions.len(), 1);
        let ast::Definition::OperationDefinition(operation) = &parsed.definitions[0] else {
            return Err(TestCaseError::fail(format!("expected an operation, got: {rendered}")));
        };
        check_selections(&doc, doc.root_id(), &operation.selection_set)?;
        prop_assert!(graphql_parser::parse_query::<String>(rendered.as_str()).is_ok());
    }

    #[test]
    fn every_node_reaches_the_same_root(steps in prop::collection::vec(build_step(), 0..48)) {
        let (doc, visited) = build(&steps);
        let root_id = doc.root_id();

        for node_id in visited {
            let root = doc.root_of(node_id);
            prop_assert_eq!(root, Some(root_id));
            prop_assert_eq!(doc.root_of(root_id), Some(root_id));
        }
    }

    #[test]
    fn render_is_deterministic(steps in prop::collection::vec(build_step(), 0..24)) {
        let (doc, _) = build(&steps);
        prop_assert_eq!(doc.render().unwrap(), doc.render().unwrap());
    }
}
