use crate::ObjectField;
use crate::RenderError;
use crate::RenderOptions;
use crate::Value;
use crate::operation::Argument;
use crate::operation::Document;
use crate::operation::FieldOptions;
use crate::operation::OperationOptions;
use crate::operation::VariableDefinition;
use crate::tests::test_utils::assert_renders_as;
use crate::tests::test_utils::parse;
use apollo_compiler::ast;

fn setup_query() -> Document {
    Document::query(OperationOptions::new())
}

fn scalar_with_argument(name: &str, value: Value) -> Document {
    let mut doc = setup_query();
    doc.operation().add_scalar_with(
        "field",
        FieldOptions::new().argument(Argument::new(name, value)),
    );
    doc
}

// ============================================================================
// Argument values
// ============================================================================

#[test]
fn int_and_string_arguments() {
    let mut doc = setup_query();
    doc.operation()
        .add_scalar_with(
            "human",
            FieldOptions::new().argument(Argument::new("id", 123)),
        )
        .add_scalar_with(
            "droid",
            FieldOptions::new().argument(Argument::new("id", "1000")),
        );

    let rendered = doc.render().unwrap();
    assert!(rendered.contains("human(id: 123)"), "{rendered}");
    assert!(rendered.contains(r#"droid(id: "1000")"#), "{rendered}");
    assert_renders_as(&doc, r#"{ human(id: 123) droid(id: "1000") }"#);
}

#[test]
fn negative_and_large_int_arguments() {
    let doc = scalar_with_argument("n", Value::int(i64::MIN));
    assert!(doc.render().unwrap().contains("-9223372036854775808"));

    let doc = scalar_with_argument("n", Value::int(-42));
    assert_renders_as(&doc, "{ field(n: -42) }");
}

#[test]
fn float_arguments_always_have_a_fraction_or_exponent() {
    let doc = scalar_with_argument("f", Value::float(1.0));
    assert_renders_as(&doc, "{ field(f: 1.0) }");

    let doc = scalar_with_argument("f", Value::float(-2.5));
    assert_renders_as(&doc, "{ field(f: -2.5) }");

    let doc = scalar_with_argument("f", Value::float(0.1));
    assert_renders_as(&doc, "{ field(f: 0.1) }");
}

#[test]
fn boolean_enum_and_variable_arguments() {
    let mut doc = Document::query(
        OperationOptions::new().add_variable_definition(
            VariableDefinition::new("after", "String", false, None),
        ),
    );
    doc.operation().add_scalar_with(
        "hero",
        FieldOptions::new().arguments([
            Argument::new("flag", false),
            Argument::new("episode", Value::enum_value("NEWHOPE")),
            Argument::new("after", Value::variable("after")),
        ]),
    );

    assert_renders_as(
        &doc,
        "query ($after: String) {
            hero(flag: false, episode: NEWHOPE, after: $after)
        }",
    );
}

#[test]
fn string_arguments_are_escaped() {
    let doc = scalar_with_argument("s", Value::string("say \"hi\" \\ back"));
    let rendered = doc.render().unwrap();

    let parsed = parse(rendered.as_str());
    assert_eq!(parsed.definitions, doc.to_ast().unwrap().definitions);

    let ast::Definition::OperationDefinition(operation) = &parsed.definitions[0] else {
        panic!("expected an operation, got: {rendered}");
    };
    let ast::Selection::Field(field) = &operation.selection_set[0] else {
        panic!("expected a field, got: {rendered}");
    };
    assert_eq!(
        *field.arguments[0].value,
        ast::Value::String("say \"hi\" \\ back".to_string()),
    );
}

#[test]
fn list_and_nested_object_arguments() {
    let doc = scalar_with_argument(
        "input",
        Value::object([
            ObjectField::new("ids", Value::list([Value::int(1), Value::int(2)])),
            ObjectField::new("nested", Value::object([
                ObjectField::new("name", Value::string("x")),
                ObjectField::new("tags", Value::List(vec![])),
            ])),
        ]),
    );

    assert_renders_as(
        &doc,
        r#"{ field(input: { ids: [1, 2], nested: { name: "x", tags: [] } }) }"#,
    );
}

#[test]
fn object_fields_keep_order_and_duplicates() {
    let doc = scalar_with_argument(
        "filter",
        Value::object([
            ObjectField::new("b", Value::int(1)),
            ObjectField::new("a", Value::int(2)),
            ObjectField::new("b", Value::int(3)),
        ]),
    );
    let rendered = doc.render().unwrap();
    let parsed = parse(rendered.as_str());

    let ast::Definition::OperationDefinition(operation) = &parsed.definitions[0] else {
        panic!("expected an operation, got: {rendered}");
    };
    let ast::Selection::Field(field) = &operation.selection_set[0] else {
        panic!("expected a field, got: {rendered}");
    };
    let ast::Value::Object(fields) = &*field.arguments[0].value else {
        panic!("expected an object value, got: {rendered}");
    };

    let int = |text: &str| ast::Value::Int(ast::IntValue::new_parsed(text));
    let entries: Vec<(&str, ast::Value)> = fields.iter()
        .map(|(name, value)| (name.as_str(), (**value).clone()))
        .collect();
    assert_eq!(entries, vec![("b", int("1")), ("a", int("2")), ("b", int("3"))]);
}

#[test]
fn default_values_of_every_kind() {
    let mut doc = Document::query(
        OperationOptions::new()
            .add_variable_definition(VariableDefinition::new(
                "limit",
                "Int",
                false,
                Some(Value::int(10)),
            ))
            .add_variable_definition(VariableDefinition::new(
                "order",
                "[Ordering!]",
                false,
                Some(Value::list([
                    Value::object([
                        ObjectField::new("field", Value::enum_value("NAME")),
                        ObjectField::new("asc", Value::boolean(true)),
                    ]),
                ])),
            )),
    );
    doc.operation().add_scalar_with(
        "items",
        FieldOptions::new()
            .argument(Argument::new("limit", Value::variable("limit")))
            .argument(Argument::new("order", Value::variable("order"))),
    );

    assert_renders_as(
        &doc,
        "query ($limit: Int = 10, $order: [Ordering!] = [{ field: NAME, asc: true }]) {
            items(limit: $limit, order: $order)
        }",
    );
}

// ============================================================================
// Render options
// ============================================================================

#[test]
fn pretty_output_is_multi_line() {
    let mut doc = setup_query();
    doc.operation()
        .add_selection("hero")
            .add_scalar("name");

    assert!(doc.render().unwrap().trim_end().contains('\n'));
}

#[test]
fn compact_output_is_single_line() {
    let mut doc = setup_query();
    doc.operation()
        .add_selection("hero")
            .add_scalar("name")
            .add_scalar("id");

    let options = RenderOptions::new().compact(true);
    assert!(options.is_compact());

    let compact = doc.render_with(&options).unwrap();
    assert!(!compact.trim_end().contains('\n'), "{compact}");
    assert_eq!(
        parse(compact.as_str()).definitions,
        parse(doc.render().unwrap().as_str()).definitions,
    );
}

#[test]
fn render_is_idempotent_and_does_not_modify_document() {
    let mut doc = setup_query();
    doc.operation()
        .add_selection("hero")
            .add_scalar("name");
    let before = doc.clone();

    let first = doc.render().unwrap();
    let second = doc.render().unwrap();

    assert_eq!(first, second);
    assert_eq!(doc, before);
}

// ============================================================================
// Render errors
// ============================================================================

#[test]
fn empty_operation_is_rejected() {
    let doc = Document::query(OperationOptions::new().name("Empty"));

    assert_eq!(
        doc.render(),
        Err(RenderError::EmptySelectionSet {
            owner: "operation `Empty`".to_string(),
        }),
    );
}

#[test]
fn empty_inline_fragment_is_rejected() {
    let mut doc = setup_query();
    doc.operation()
        .add_selection("hero")
            .add_inline_fragment("Droid");

    assert!(matches!(
        doc.render(),
        Err(RenderError::EmptySelectionSet { .. }),
    ));
}

#[test]
fn empty_fragment_definition_is_rejected() {
    let mut doc = setup_query();
    doc.operation()
        .add_fragment_spread("Nothing")
        .add_fragment_definition("Nothing", "Query");

    assert_eq!(
        doc.render(),
        Err(RenderError::EmptySelectionSet {
            owner: "fragment `Nothing`".to_string(),
        }),
    );
}

#[test]
fn empty_field_selection_is_rejected() {
    let mut doc = setup_query();
    doc.operation()
        .add_scalar("id")
        .add_selection("hero");

    assert_eq!(
        doc.render(),
        Err(RenderError::EmptySelectionSet {
            owner: "field `hero`".to_string(),
        }),
    );
    assert_eq!(
        doc.render().unwrap_err().to_string(),
        "The field `hero` has no selections.",
    );
}

#[test]
fn field_holding_only_a_fragment_definition_is_rejected() {
    let mut doc = setup_query();
    doc.operation()
        .add_selection("hero")
            .add_fragment_definition("F", "Character")
                .add_scalar("name");

    assert_eq!(
        doc.render(),
        Err(RenderError::EmptySelectionSet {
            owner: "field `hero`".to_string(),
        }),
    );
}

#[test]
fn field_with_a_fragment_definition_and_a_selection_renders() {
    let mut doc = setup_query();
    doc.operation()
        .add_selection("hero")
            .add_fragment_spread("F")
            .add_fragment_definition("F", "Character")
                .add_scalar("name");

    assert_renders_as(&doc, "
        { hero { ...F } }
        fragment F on Character { name }
    ");
}

#[test]
fn invalid_field_name_is_rejected() {
    let mut doc = setup_query();
    doc.operation().add_scalar("not a name");

    assert_eq!(
        doc.render(),
        Err(RenderError::InvalidName {
            context: "field name",
            name: "not a name".to_string(),
        }),
    );
}

#[test]
fn invalid_alias_is_rejected() {
    let mut doc = setup_query();
    doc.operation().add_scalar_with("hello", FieldOptions::new().alias("1st"));

    assert!(matches!(
        doc.render(),
        Err(RenderError::InvalidName { context: "field alias", .. }),
    ));
}

#[test]
fn enum_values_that_look_like_literals_are_rejected() {
    for literal in ["true", "false", "null"] {
        let doc = scalar_with_argument("e", Value::enum_value(literal));
        assert_eq!(
            doc.render(),
            Err(RenderError::InvalidEnumValue {
                value: literal.to_string(),
            }),
        );
    }
}

#[test]
fn non_finite_floats_are_rejected() {
    let doc = scalar_with_argument("f", Value::float(f64::INFINITY));
    assert_eq!(
        doc.render(),
        Err(RenderError::NonFiniteFloat { value: f64::INFINITY }),
    );

    let doc = scalar_with_argument("f", Value::list([Value::float(f64::NAN)]));
    assert!(matches!(
        doc.render(),
        Err(RenderError::NonFiniteFloat { .. }),
    ));
}

#[test]
fn malformed_type_annotations_are_rejected() {
    for var_type in ["[Int", "Int]", "Int!!", "", "[]", "Not A Type"] {
        let mut doc = Document::query(
            OperationOptions::new().add_variable_definition(
                VariableDefinition::new("v", var_type, false, None),
            ),
        );
        doc.operation().add_scalar("hello");

        assert_eq!(
            doc.render(),
            Err(RenderError::InvalidTypeAnnotation {
                type_annotation: var_type.to_string(),
                variable_name: "v".to_string(),
            }),
            "type annotation: {var_type:?}",
        );
    }
}

#[test]
fn render_errors_describe_the_offending_input() {
    let doc = scalar_with_argument("e", Value::enum_value("null"));
    assert_eq!(
        doc.render().unwrap_err().to_string(),
        "`null` cannot be used as an enum value.",
    );
}
