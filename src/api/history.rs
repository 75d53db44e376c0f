use async_graphql::{Context, Json, Object, Result, SimpleObject, ID};
use serde_json::Value;
use tracing::{info, warn};

use crate::{api::ServiceState, history::HistoryEntry, response::QueryResponse};

#[derive(SimpleObject)]
struct HistoryItem {
    id: ID,
    text: String,
    /// `true` until a response or failure is recorded.
    loading: bool,
    response: Option<Json<QueryResponse>>,
}

impl From<&HistoryEntry> for HistoryItem {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            id: ID(entry.id.to_string()),
            text: entry.text.clone(),
            loading: entry.loading,
            response: entry.response.clone().map(Json),
        }
    }
}

#[derive(Default)]
pub(super) struct HistoryQuery;

#[Object]
impl HistoryQuery {
    /// Recently asked questions, newest first.
    async fn history(&self, ctx: &Context<'_>) -> Result<Vec<HistoryItem>> {
        let state = ctx.data::<ServiceState>()?;
        let history = state.history.read().await;
        Ok(history.entries().map(HistoryItem::from).collect())
    }

    async fn history_entry(&self, ctx: &Context<'_>, id: ID) -> Result<Option<HistoryItem>> {
        let id = parse_id(&id)?;
        let state = ctx.data::<ServiceState>()?;
        let history = state.history.read().await;
        Ok(history.get(id).map(HistoryItem::from))
    }
}

#[derive(Default)]
pub(super) struct HistoryMutation;

#[Object]
impl HistoryMutation {
    /// Records a question that was just sent and returns its id.
    async fn start_query(&self, ctx: &Context<'_>, text: String) -> Result<ID> {
        let state = ctx.data::<ServiceState>()?;
        let id = state.history.write().await.start(&text);
        info!(id, "Query started");
        Ok(ID(id.to_string()))
    }

    /// Attaches the Query Service response to a started question.
    async fn complete_query(
        &self,
        ctx: &Context<'_>,
        id: ID,
        response: Json<Value>,
    ) -> Result<bool> {
        let id = parse_id(&id)?;
        let Json(response) = response;
        let response = QueryResponse::from_json(response)
            .map_err(|e| async_graphql::Error::new(format!("invalid query response: {e}")))?;
        let state = ctx.data::<ServiceState>()?;
        if state.history.write().await.complete(id, response) {
            info!(id, "Query completed");
            Ok(true)
        } else {
            warn!(id, "Completed query is no longer in history");
            Err(unknown_entry(id))
        }
    }

    /// Records that a started question never got a response.
    async fn fail_query(&self, ctx: &Context<'_>, id: ID, message: String) -> Result<bool> {
        let id = parse_id(&id)?;
        let state = ctx.data::<ServiceState>()?;
        if state.history.write().await.fail(id, &message) {
            info!(id, error = %message, "Query failed");
            Ok(true)
        } else {
            Err(unknown_entry(id))
        }
    }

    async fn clear_history(&self, ctx: &Context<'_>) -> Result<bool> {
        let state = ctx.data::<ServiceState>()?;
        state.history.write().await.clear();
        Ok(true)
    }
}

fn parse_id(id: &ID) -> Result<u64> {
    id.parse::<u64>()
        .map_err(|_| async_graphql::Error::new(format!("invalid history id: {}", id.as_str())))
}

fn unknown_entry(id: u64) -> async_graphql::Error {
    async_graphql::Error::new(format!("no history entry with id {id}"))
}
