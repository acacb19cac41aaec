//! Builds the example queries from <https://graphql.org/learn/queries/>
//! and prints each one.
//!
//! Run with `LOG_LEVEL=debug` to see render events.

use fluentgraphql::Value;
use fluentgraphql::operation::Argument;
use fluentgraphql::operation::Document;
use fluentgraphql::operation::FieldOptions;
use fluentgraphql::operation::OperationOptions;
use fluentgraphql::operation::VariableDefinition;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;

fn main() -> anyhow::Result<()> {
    setup_logger();

    for doc in queries() {
        println!("{}", doc.render()?);
    }
    Ok(())
}

fn setup_logger() {
    let log_level =
        match std::env::var("LOG_LEVEL").as_deref().map(str::trim) {
            Ok("TRACE" | "trace") => tracing::Level::TRACE,
            Ok("DEBUG" | "debug") => tracing::Level::DEBUG,
            Ok("INFO" | "info") => tracing::Level::INFO,
            _ => DEFAULT_LOG_LEVEL,
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();
}

fn episode(value: Value) -> FieldOptions {
    FieldOptions::new().argument(Argument::new("episode", value))
}

fn queries() -> Vec<Document> {
    let mut docs = vec![];

    // { hero { name } }
    let mut doc = Document::query(OperationOptions::new());
    doc.operation()
        .add_selection("hero")
            .add_scalar("name");
    docs.push(doc);

    // { hero { name friends { name } } }
    let mut doc = Document::query(OperationOptions::new());
    doc.operation()
        .add_selection("hero")
            .add_scalar("name")
            .add_selection("friends")
                .add_scalar("name");
    docs.push(doc);

    // { human(id: "1000") { name height(unit: FOOT) } }
    let mut doc = Document::query(OperationOptions::new());
    doc.operation()
        .add_selection_with(
            "human",
            FieldOptions::new().argument(Argument::new("id", "1000")),
        )
            .add_scalar("name")
            .add_scalar_with(
                "height",
                FieldOptions::new()
                    .argument(Argument::new("unit", Value::enum_value("FOOT"))),
            );
    docs.push(doc);

    // Aliases.
    let mut doc = Document::query(OperationOptions::new());
    doc.operation()
        .add_selection_with(
            "hero",
            episode(Value::enum_value("EMPIRE")).alias("empireHero"),
        )
            .add_scalar("name")
            .parent()
        .add_selection_with(
            "hero",
            episode(Value::enum_value("JEDI")).alias("jediHero"),
        )
            .add_scalar("name");
    docs.push(doc);

    // Fragments, with a variable used inside the fragment.
    let mut doc = Document::query(
        OperationOptions::new()
            .name("HeroComparison")
            .add_variable_definition(VariableDefinition::new(
                "first",
                "Int",
                false,
                Some(Value::int(3)),
            )),
    );
    doc.operation()
        .add_selection_with(
            "hero",
            episode(Value::enum_value("EMPIRE")).alias("leftComparison"),
        )
            .add_fragment_spread("comparisonFields")
            .parent()
        .add_selection_with(
            "hero",
            episode(Value::enum_value("JEDI")).alias("rightComparison"),
        )
            .add_fragment_spread("comparisonFields")
            .root()
        .add_fragment_definition("comparisonFields", "Character")
            .add_scalar("name")
            .add_selection_with(
                "friendsConnection",
                FieldOptions::new()
                    .argument(Argument::new("first", Value::variable("first"))),
            )
                .add_scalar("totalCount")
                .add_selection("edges")
                    .add_selection("node")
                        .add_scalar("name");
    docs.push(doc);

    // Variables with a default value.
    let mut doc = Document::query(
        OperationOptions::new()
            .name("HeroNameAndFriends")
            .add_variable_definition(VariableDefinition::new(
                "episode",
                "Episode",
                false,
                Some(Value::enum_value("JEDI")),
            )),
    );
    doc.operation()
        .add_selection_with("hero", episode(Value::variable("episode")))
            .add_scalar("name")
            .add_selection("friends")
                .add_scalar("name");
    docs.push(doc);

    // Mutations.
    let mut doc = Document::mutation(
        OperationOptions::new()
            .name("CreateReviewForEpisode")
            .add_variable_definition(
                VariableDefinition::new("ep", "Episode", true, None),
            )
            .add_variable_definition(
                VariableDefinition::new("review", "ReviewInput", true, None),
            ),
    );
    doc.operation()
        .add_selection_with(
            "createReview",
            episode(Value::variable("ep"))
                .argument(Argument::new("review", Value::variable("review"))),
        )
            .add_scalar("stars")
            .add_scalar("commentary");
    docs.push(doc);

    // Inline fragments.
    let mut doc = Document::query(
        OperationOptions::new()
            .name("HeroForEpisode")
            .add_variable_definition(
                VariableDefinition::new("ep", "Episode", true, None),
            ),
    );
    doc.operation()
        .add_selection_with("hero", episode(Value::variable("ep")))
            .add_scalar("name")
            .add_inline_fragment("Droid")
                .add_scalar("primaryFunction")
                .parent()
            .add_inline_fragment("Human")
                .add_scalar("height");
    docs.push(doc);

    // Meta fields.
    let mut doc = Document::query(OperationOptions::new());
    let search = doc.operation()
        .add_selection_with(
            "search",
            FieldOptions::new().argument(Argument::new("text", "an")),
        )
            .add_scalar("__typename");
    ["Human", "Droid", "Starship"].into_iter().fold(
        search,
        |search, type_condition| {
            search
                .add_inline_fragment(type_condition)
                    .add_scalar("name")
                    .parent()
        },
    );
    docs.push(doc);

    docs
}
