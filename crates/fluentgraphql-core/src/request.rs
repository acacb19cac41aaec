use crate::operation::Document;
use crate::render::RenderError;
use crate::render::RenderOptions;
use thiserror::Error;

/// A GraphQL-over-HTTP request body: the rendered query text, the optional
/// name of the operation to run and optional variable values.
///
/// ```
/// use fluentgraphql_core::Request;
/// use fluentgraphql_core::operation::Document;
/// use fluentgraphql_core::operation::OperationOptions;
///
/// let mut doc = Document::query(OperationOptions::new().name("Viewer"));
/// doc.operation().add_selection("viewer").add_scalar("login");
///
/// let request = Request::from_document(&doc).unwrap();
/// assert_eq!(request.operation_name(), Some("Viewer"));
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    operation_name: Option<String>,
    query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    variables: Option<serde_json::Value>,
}
impl Request {
    /// Build a request from already-rendered query text.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            operation_name: None,
            query: query.into(),
            variables: None,
        }
    }

    /// Render `document` compactly and carry its operation name, if any.
    pub fn from_document(document: &Document) -> Result<Self, RequestError> {
        let query = document.render_with(&RenderOptions::new().compact(true))?;
        let operation_name = document.node(document.root_id())
            .and_then(|node| node.as_operation())
            .and_then(|operation| operation.name())
            .map(str::to_string);

        Ok(Self {
            operation_name,
            query,
            variables: None,
        })
    }

    /// Select which operation of a multi-operation query to run.
    ///
    /// NOTE: Replaces any previously set operation name.
    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    /// Set the variable values sent alongside the query.
    ///
    /// NOTE: Replaces any previously set variables.
    pub fn with_variables(mut self, variables: serde_json::Value) -> Self {
        self.variables = Some(variables);
        self
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn variables(&self) -> Option<&serde_json::Value> {
        self.variables.as_ref()
    }

    /// Serialize to the JSON body expected by GraphQL HTTP endpoints.
    pub fn to_json(&self) -> Result<String, RequestError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Failed to serialize request body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to render request query: {0}")]
    Render(#[from] RenderError),
}
