mod classify;
mod dashboard;
mod history;

use std::time::Duration;

use async_graphql::{EmptySubscription, MergedObject};
use tokio::sync::RwLock;

use crate::{chart::ChartPlanner, history::QueryHistory, intent::IntentClassifier};

/// A set of queries defined in the schema.
///
/// This is exposed only for [`Schema`], and not used directly.
#[derive(Default, MergedObject)]
pub(crate) struct Query(
    classify::ClassifyQuery,
    dashboard::DashboardQuery,
    history::HistoryQuery,
);

/// A set of mutations defined in the schema.
#[derive(Default, MergedObject)]
pub(crate) struct Mutation(history::HistoryMutation);

pub(crate) type Schema = async_graphql::Schema<Query, Mutation, EmptySubscription>;

/// How loading messages are cycled on the client.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rotation {
    pub(crate) interval: Duration,
    pub(crate) enabled: bool,
}

/// Shared state reachable from every resolver.
pub(crate) struct ServiceState {
    pub(crate) classifier: IntentClassifier<'static>,
    pub(crate) planner: ChartPlanner,
    pub(crate) rotation: Rotation,
    pub(crate) history: RwLock<QueryHistory>,
}

pub(crate) fn schema(state: ServiceState) -> Schema {
    Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .data(state)
        .finish()
}

#[cfg(test)]
struct TestSchema {
    schema: Schema,
}

#[cfg(test)]
impl TestSchema {
    fn new() -> Self {
        Self::with_history_limit(crate::history::DEFAULT_HISTORY_LIMIT)
    }

    fn with_history_limit(limit: usize) -> Self {
        let state = ServiceState {
            classifier: IntentClassifier::default(),
            planner: ChartPlanner::default(),
            rotation: Rotation {
                interval: Duration::from_millis(crate::intent::DEFAULT_ROTATION_INTERVAL_MS),
                enabled: true,
            },
            history: RwLock::new(QueryHistory::new(limit)),
        };
        Self {
            schema: schema(state),
        }
    }

    async fn execute(&self, query: &str) -> async_graphql::Response {
        let request: async_graphql::Request = query.into();
        self.schema.execute(request).await
    }

    async fn execute_with(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> async_graphql::Response {
        let request = async_graphql::Request::new(query)
            .variables(async_graphql::Variables::from_json(variables));
        self.schema.execute(request).await
    }
}
