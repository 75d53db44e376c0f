use std::time::Duration;

use async_graphql::{Context, Enum, Json, Object, Result, SimpleObject};
use serde_json::Value;
use tracing::debug;

use crate::{
    api::ServiceState,
    column::{is_amount_column, is_rate_column, ColumnKind},
    format::{format_currency, format_number, format_percent, format_tooltip},
    intent::{loading_messages_for, Intent, MessageRotation},
};

#[derive(SimpleObject)]
struct IntentReport {
    intent: Intent,
    /// The full message set, in display order.
    loading_messages: Vec<String>,
    /// The message on screen after the requested elapsed time.
    current_message: String,
    rotation_interval_ms: u64,
}

#[derive(SimpleObject)]
struct ColumnKindReport {
    name: String,
    kind: ColumnKind,
    is_rate: bool,
    is_amount: bool,
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
enum FormatStyle {
    Number,
    Currency,
    Percent,
    Tooltip,
}

#[derive(Default)]
pub(super) struct ClassifyQuery;

#[Object]
impl ClassifyQuery {
    /// Classifies a question and returns the messages to show while it runs.
    #[allow(clippy::unused_async)]
    async fn classify_query(
        &self,
        ctx: &Context<'_>,
        query: Option<String>,
        #[graphql(default)] elapsed_ms: u64,
    ) -> Result<IntentReport> {
        let state = ctx.data::<ServiceState>()?;
        let intent = state.classifier.classify(query.as_deref());
        debug!(intent = intent.as_str(), "Classified query");

        let rotation = MessageRotation::new(
            intent,
            state.rotation.interval,
            state.rotation.enabled,
        );
        Ok(IntentReport {
            intent,
            loading_messages: to_owned(intent.loading_messages()),
            current_message: rotation
                .message_at(Duration::from_millis(elapsed_ms))
                .to_string(),
            rotation_interval_ms: u64::try_from(rotation.interval().as_millis())?,
        })
    }

    /// Messages for an intent name; unknown names get the generic set.
    #[allow(clippy::unused_async)]
    async fn loading_messages(&self, intent: String) -> Vec<String> {
        to_owned(loading_messages_for(&intent))
    }

    #[allow(clippy::unused_async)]
    async fn column_kind(&self, name: String) -> ColumnKindReport {
        ColumnKindReport {
            kind: ColumnKind::of(&name),
            is_rate: is_rate_column(&name),
            is_amount: is_amount_column(&name),
            name,
        }
    }

    #[allow(clippy::unused_async)]
    async fn format_value(&self, value: Json<Value>, style: FormatStyle) -> String {
        match style {
            FormatStyle::Number => format_number(&value),
            FormatStyle::Currency => format_currency(&value),
            FormatStyle::Percent => format_percent(&value),
            FormatStyle::Tooltip => format_tooltip(&value),
        }
    }
}

fn to_owned(messages: &[&str]) -> Vec<String> {
    messages.iter().map(ToString::to_string).collect()
}
