//! Batches several GitHub repository lookups into one query by selecting the
//! same field repeatedly under different aliases, then prints the JSON body
//! a client would POST to `https://api.github.com/graphql`. The number of
//! topics fetched per repository is passed as the `$topics` variable.

use fluentgraphql::Request;
use fluentgraphql::Value;
use fluentgraphql::operation::Argument;
use fluentgraphql::operation::Document;
use fluentgraphql::operation::FieldOptions;
use fluentgraphql::operation::OperationOptions;
use fluentgraphql::operation::VariableDefinition;

const REPOS: &[&str] = &[
    "angular/angular",
    "emberjs/ember.js",
    "facebook/react",
    "jashkenas/backbone",
    "preactjs/preact",
    "sveltejs/svelte",
    "vuejs/vue",
];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let repos = REPOS.iter()
        .map(|repo| repo.split_once('/').ok_or_else(
            || anyhow::anyhow!("Expected `owner/name`, got `{repo}`"),
        ))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut doc = Document::query(
        OperationOptions::new()
            .name("Repos")
            .add_variable_definition(
                VariableDefinition::new("topics", "Int", true, None),
            ),
    );
    repos.iter().enumerate().fold(doc.operation(), |op, (i, (owner, name))| {
        op.add_selection_with(
            "repository",
            FieldOptions::new()
                .alias(format!("repo_{i}"))
                .argument(Argument::new("owner", *owner))
                .argument(Argument::new("name", *name)),
        )
            .add_selection("owner")
                .add_scalar("login")
                .parent()
            .add_scalar("name")
            .add_scalar("stargazerCount")
            .add_selection_with(
                "repositoryTopics",
                FieldOptions::new()
                    .argument(Argument::new("first", Value::variable("topics"))),
            )
                .add_scalar("totalCount")
                .parent()
            .parent()
    });

    println!("{}", doc.render()?);

    let request = Request::from_document(&doc)?
        .with_variables(serde_json::json!({ "topics": 5 }));
    tracing::info!(
        repos = REPOS.len(),
        operation = request.operation_name(),
        "built batch request"
    );
    println!("{}", request.to_json()?);
    Ok(())
}
