use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::chart::ChartHint;

/// One result row keyed by column name.
pub(crate) type Row = Map<String, Value>;

/// Prefixes the Query Service puts on errors that are not meant for users.
const TECHNICAL_ERROR_PREFIXES: [&str; 2] = ["LLM error:", "Execution error:"];

const FRIENDLY_ERROR: &str =
    "Something went wrong while processing your query. Please try rephrasing your question.";

/// The response body returned by the Query Service for one question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct QueryResponse {
    pub(crate) success: bool,
    #[serde(default)]
    pub(crate) question: String,
    #[serde(default)]
    pub(crate) row_count: usize,
    #[serde(default)]
    pub(crate) columns: Vec<String>,
    #[serde(default)]
    pub(crate) data: Vec<Row>,
    #[serde(default)]
    pub(crate) chart: Option<ChartHint>,
    #[serde(default)]
    pub(crate) generated_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

impl QueryResponse {
    /// Builds the failure shape: no rows, no columns, no chart.
    pub(crate) fn failure(question: &str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            question: question.to_string(),
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Parses a response and fills in `null` for any declared column a row
    /// is missing.
    pub(crate) fn from_json(value: Value) -> serde_json::Result<Self> {
        let mut response: Self = serde_json::from_value(value)?;
        response.normalize_rows();
        Ok(response)
    }

    pub(crate) fn normalize_rows(&mut self) {
        for row in &mut self.data {
            for column in &self.columns {
                if !row.contains_key(column) {
                    row.insert(column.clone(), Value::Null);
                }
            }
        }
    }

    /// The message shown to the user for a failed response.
    ///
    /// Technical failures are replaced by a generic hint; anything else the
    /// service reported is shown verbatim.
    pub(crate) fn user_message(&self) -> String {
        let error = self.error.as_deref().unwrap_or_default();
        if TECHNICAL_ERROR_PREFIXES
            .iter()
            .any(|prefix| error.starts_with(prefix))
        {
            FRIENDLY_ERROR.to_string()
        } else {
            error.to_string()
        }
    }
}
