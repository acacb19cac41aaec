//! Conversion of a built [`Document`] into `apollo_compiler`'s GraphQL AST,
//! and printing of that AST to text.

use crate::Value;
use crate::operation::Argument;
use crate::operation::Document;
use crate::operation::NodeId;
use crate::operation::SelectionNode;
use crate::operation::VariableDefinition;
use apollo_compiler::Name;
use apollo_compiler::Node;
use apollo_compiler::ast;
use thiserror::Error;

type Result<T> = std::result::Result<T, RenderError>;

/// Controls the textual layout produced by [`Document::render_with()`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderOptions {
    compact: bool,
}
impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print the whole document on a single line instead of one selection
    /// per indented line.
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }
}

impl Document {
    /// Render this document to GraphQL text using the default
    /// [`RenderOptions`].
    ///
    /// Rendering never modifies the document, and rendering the same
    /// document twice produces the same text.
    pub fn render(&self) -> Result<String> {
        self.render_with(&RenderOptions::default())
    }

    pub fn render_with(&self, options: &RenderOptions) -> Result<String> {
        let ast_doc = self.to_ast()?;
        tracing::debug!(
            nodes = self.node_count(),
            definitions = ast_doc.definitions.len(),
            compact = options.compact,
            "rendering document"
        );

        Ok(if options.compact {
            ast_doc.serialize().no_indent().to_string()
        } else {
            ast_doc.to_string()
        })
    }

    /// Convert this document into an `apollo_compiler` AST document.
    ///
    /// The first definition is always the operation. Fragment definitions
    /// follow it in the order they were added, no matter which node of the
    /// tree they were attached to.
    pub fn to_ast(&self) -> Result<ast::Document> {
        let root_id = self.root_id();
        let operation = self.node(root_id)
            .and_then(SelectionNode::as_operation)
            .ok_or(RenderError::MissingOperation)?;

        let mut converter = AstConverter {
            document: self,
            fragments: vec![],
        };

        let selection_set = converter.selection_set(root_id)?;
        if selection_set.is_empty() {
            return Err(RenderError::EmptySelectionSet {
                owner: describe_operation(operation.name()),
            });
        }

        let operation_def = ast::OperationDefinition {
            operation_type: operation.kind().to_ast(),
            name: operation.name()
                .map(|op_name| to_name(op_name, "operation name"))
                .transpose()?,
            variables: operation.variable_definitions()
                .iter()
                .map(|var_def| variable_definition_to_ast(var_def).map(Node::new))
                .collect::<Result<_>>()?,
            directives: ast::DirectiveList::default(),
            selection_set,
        };

        let mut fragments = converter.fragments;
        fragments.sort_by_key(|(node_id, _)| *node_id);

        let mut ast_doc = ast::Document::new();
        ast_doc.definitions.push(ast::Definition::OperationDefinition(
            Node::new(operation_def),
        ));
        ast_doc.definitions.extend(
            fragments.into_iter().map(|(_, fragment_def)| {
                ast::Definition::FragmentDefinition(Node::new(fragment_def))
            }),
        );

        Ok(ast_doc)
    }
}

struct AstConverter<'doc> {
    document: &'doc Document,
    fragments: Vec<(NodeId, ast::FragmentDefinition)>,
}
impl AstConverter<'_> {
    fn selection_set(&mut self, parent: NodeId) -> Result<Vec<ast::Selection>> {
        let mut selections = vec![];
        for &child_id in self.document.children(parent) {
            let Some(child) = self.document.node(child_id) else {
                continue
            };

            match child {
                SelectionNode::Field(field) => {
                    let alias = field.alias()
                        .map(|alias| to_name(alias, "field alias"))
                        .transpose()?;
                    let name = to_name(field.name(), "field name")?;
                    let arguments = field.arguments()
                        .iter()
                        .map(|arg| argument_to_ast(arg).map(Node::new))
                        .collect::<Result<_>>()?;

                    // Hoisted fragment definitions leave no selection behind,
                    // so check after conversion rather than on `children`.
                    let selection_set = self.selection_set(child_id)?;
                    if !field.is_scalar() && selection_set.is_empty() {
                        return Err(RenderError::EmptySelectionSet {
                            owner: format!("field `{}`", field.name()),
                        });
                    }

                    selections.push(ast::Selection::Field(Node::new(ast::Field {
                        alias,
                        name,
                        arguments,
                        directives: ast::DirectiveList::default(),
                        selection_set,
                    })));
                },

                SelectionNode::FragmentDefinition(fragment_def) => {
                    let selection_set = self.selection_set(child_id)?;
                    if selection_set.is_empty() {
                        return Err(RenderError::EmptySelectionSet {
                            owner: format!("fragment `{}`", fragment_def.name()),
                        });
                    }
                    self.fragments.push((child_id, ast::FragmentDefinition {
                        name: to_name(fragment_def.name(), "fragment name")?,
                        type_condition: to_name(
                            fragment_def.type_condition(),
                            "type condition",
                        )?,
                        directives: ast::DirectiveList::default(),
                        selection_set,
                    }));
                },

                SelectionNode::FragmentSpread(spread) => {
                    selections.push(ast::Selection::FragmentSpread(Node::new(
                        ast::FragmentSpread {
                            fragment_name: to_name(
                                spread.fragment_name(),
                                "fragment name",
                            )?,
                            directives: ast::DirectiveList::default(),
                        },
                    )));
                },

                SelectionNode::InlineFragment(inline_fragment) => {
                    let selection_set = self.selection_set(child_id)?;
                    if selection_set.is_empty() {
                        return Err(RenderError::EmptySelectionSet {
                            owner: format!(
                                "inline fragment on `{}`",
                                inline_fragment.type_condition(),
                            ),
                        });
                    }
                    selections.push(ast::Selection::InlineFragment(Node::new(
                        ast::InlineFragment {
                            type_condition: Some(to_name(
                                inline_fragment.type_condition(),
                                "type condition",
                            )?),
                            directives: ast::DirectiveList::default(),
                            selection_set,
                        },
                    )));
                },

                // Never a child.
                SelectionNode::Operation(_) => (),
            }
        }
        Ok(selections)
    }
}

fn describe_operation(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("operation `{name}`"),
        None => "anonymous operation".to_string(),
    }
}

fn to_name(text: &str, context: &'static str) -> Result<Name> {
    Name::new(text).map_err(|_| RenderError::InvalidName {
        context,
        name: text.to_string(),
    })
}

fn argument_to_ast(argument: &Argument) -> Result<ast::Argument> {
    Ok(ast::Argument {
        name: to_name(argument.name(), "argument name")?,
        value: Node::new(value_to_ast(argument.value())?),
    })
}

pub(crate) fn value_to_ast(value: &Value) -> Result<ast::Value> {
    Ok(match value {
        Value::Boolean(b) => ast::Value::Boolean(*b),

        Value::Enum(enum_value) => {
            // Would print as a boolean or null literal.
            if matches!(enum_value.as_str(), "true" | "false" | "null") {
                return Err(RenderError::InvalidEnumValue {
                    value: enum_value.to_owned(),
                });
            }
            ast::Value::Enum(to_name(enum_value, "enum value")?)
        },

        Value::Float(f) => {
            if !f.is_finite() {
                return Err(RenderError::NonFiniteFloat { value: *f });
            }
            ast::Value::Float(ast::FloatValue::new_parsed(
                &Value::float_to_graphql_string(*f),
            ))
        },

        Value::Int(i) => ast::Value::Int(ast::IntValue::new_parsed(
            &i.to_string(),
        )),

        Value::List(values) => ast::Value::List(
            values.iter()
                .map(|v| value_to_ast(v).map(Node::new))
                .collect::<Result<_>>()?,
        ),

        Value::Object(fields) => ast::Value::Object(
            fields.iter()
                .map(|field| Ok((
                    to_name(field.name(), "object field name")?,
                    Node::new(value_to_ast(field.value())?),
                )))
                .collect::<Result<_>>()?,
        ),

        Value::String(s) => ast::Value::String(s.to_owned()),

        Value::Variable(var_name) => ast::Value::Variable(
            to_name(var_name, "variable name")?,
        ),
    })
}

fn variable_definition_to_ast(
    var_def: &VariableDefinition,
) -> Result<ast::VariableDefinition> {
    let invalid_type = || RenderError::InvalidTypeAnnotation {
        type_annotation: var_def.var_type().to_string(),
        variable_name: var_def.name().to_string(),
    };

    let mut ty = type_to_ast(var_def.var_type()).ok_or_else(invalid_type)?;
    if var_def.required() && !ty.is_non_null() {
        ty = into_non_null(ty).ok_or_else(invalid_type)?;
    }

    Ok(ast::VariableDefinition {
        name: to_name(var_def.name(), "variable name")?,
        ty: Node::new(ty),
        default_value: var_def.default_value()
            .map(|val| value_to_ast(val).map(Node::new))
            .transpose()?,
        directives: ast::DirectiveList::default(),
    })
}

/// Parse a free-form type string such as `Int`, `[ID!]` or `[[String]]!`.
fn type_to_ast(text: &str) -> Option<ast::Type> {
    let text = text.trim();
    if let Some(inner) = text.strip_suffix('!') {
        return into_non_null(type_to_ast(inner)?);
    }
    if let Some(inner) = text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
        return Some(ast::Type::List(Box::new(type_to_ast(inner)?)));
    }
    Name::new(text).ok().map(ast::Type::Named)
}

fn into_non_null(ty: ast::Type) -> Option<ast::Type> {
    match ty {
        ast::Type::Named(name) => Some(ast::Type::NonNullNamed(name)),
        ast::Type::List(inner) => Some(ast::Type::NonNullList(inner)),
        ast::Type::NonNullNamed(_) | ast::Type::NonNullList(_) => None,
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("The {owner} has no selections.")]
    EmptySelectionSet {
        owner: String,
    },

    #[error("`{value}` cannot be used as an enum value.")]
    InvalidEnumValue {
        value: String,
    },

    #[error("`{name}` is not a valid GraphQL name (used as {context}).")]
    InvalidName {
        context: &'static str,
        name: String,
    },

    #[error(
        "`{type_annotation}` is not a valid type for variable \
        `${variable_name}`."
    )]
    InvalidTypeAnnotation {
        type_annotation: String,
        variable_name: String,
    },

    #[error("The document has no root operation.")]
    MissingOperation,

    #[error("Float value `{value}` is not finite and cannot be rendered.")]
    NonFiniteFloat {
        value: f64,
    },
}
